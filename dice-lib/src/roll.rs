pub mod pretty;

pub use pretty::Verbosity;

use crate::dice::DiceExpression;
use crate::error::Error;
use crate::error::Result;
use rand::Rng;
use std::collections::BTreeMap;

/// Interface for rolling dices
pub trait Source {
    fn throw(&mut self, sides: u64) -> u64;
}

/// Default random dice roller
pub struct RandomSource<'a, T: Rng> {
    pub generator: &'a mut T,
}

impl<T: Rng> Source for RandomSource<'_, T> {
    fn throw(&mut self, sides: u64) -> u64 {
        self.generator.gen_range(1..=sides)
    }
}

/// The result of rolling a [`DiceExpression`] once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollOutcome {
    /// `sides -> results` in the order they were thrown
    rolls: BTreeMap<u64, Vec<u64>>,
    constant: i64,
}

impl RollOutcome {
    /// Build an outcome from already thrown dice.
    ///
    /// Fails when there is nothing to show (no dice, zero constant), when a
    /// size has no results, or when a result does not fit its die.
    pub fn new(rolls: BTreeMap<u64, Vec<u64>>, constant: i64) -> Result<Self> {
        if rolls.is_empty() && constant == 0 {
            return Err(Error::InvalidState(
                "need at least one die or a nonzero constant",
            ));
        }
        if rolls.values().any(Vec::is_empty) {
            return Err(Error::InvalidState("cannot have an empty roll for a die size"));
        }
        if rolls.keys().any(|&sides| i64::try_from(sides).is_err()) {
            return Err(Error::InvalidState("die size does not fit an i64"));
        }
        if rolls
            .iter()
            .any(|(&sides, results)| results.iter().any(|r| !(1..=sides).contains(r)))
        {
            return Err(Error::InvalidState("die result outside of its faces"));
        }
        Ok(RollOutcome { rolls, constant })
    }

    /// Sum of every die plus the constant, saturating at the `i64` bounds
    pub fn total(&self) -> i64 {
        self.rolls
            .values()
            .flatten()
            .fold(self.constant, |total, &r| total.saturating_add(r as i64))
    }

    pub fn constant(&self) -> i64 {
        self.constant
    }

    /// Results for one die size, empty when that size was not rolled
    pub fn rolls(&self, sides: u64) -> &[u64] {
        self.rolls.get(&sides).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of dice thrown
    pub fn len(&self) -> usize {
        self.rolls.values().map(Vec::len).sum()
    }

    /// True when only a constant was "rolled"
    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// The expression this outcome is one realization of
    pub fn expression(&self) -> DiceExpression {
        DiceExpression::from_parts(
            self.rolls
                .iter()
                .map(|(&sides, results)| (sides, results.len() as i64))
                .collect(),
            self.constant,
        )
    }

    /// Iterate `(sides, results)`, biggest die first
    pub(crate) fn by_size(&self) -> impl Iterator<Item = (u64, &[u64])> + '_ {
        self.rolls
            .iter()
            .rev()
            .map(|(&sides, results)| (sides, results.as_slice()))
    }
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pretty(Verbosity::Sum))
    }
}
