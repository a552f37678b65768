pub(crate) mod operand;
mod ops;

pub use operand::Operand;

use crate::error::Error;
use crate::error::Result;
use crate::parser::Parser;
use crate::roll;
use crate::roll::RandomSource;
use crate::roll::RollOutcome;
use itertools::Itertools;
use rand::Rng;
use std::collections::BTreeMap;
use tracing::debug;
use tracing::trace;

/// Dice rolled together plus a constant offset, like `3d6 + 2`.
///
/// The value is immutable: every combinator returns a fresh expression.
/// Sizes are always positive and counts of zero are never stored, so two
/// expressions that roll the same dice compare equal. Counts and the
/// constant saturate at the `i64` bounds instead of overflowing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DiceExpression {
    /// `sides -> count`, a missing key means zero dice
    dice: BTreeMap<u64, i64>,
    constant: i64,
}

impl DiceExpression {
    pub(crate) fn from_parts(mut dice: BTreeMap<u64, i64>, constant: i64) -> Self {
        dice.retain(|_, count| *count != 0);
        DiceExpression { dice, constant }
    }

    /// Parse a flat sum such as `2d20 + 3d6 + 4`
    pub fn parse(input: &str) -> Result<Self> {
        let (dice, constant) = Parser::parse_expression(input)?;
        let expression = Self::from_parts(dice, constant);
        debug!(input, %expression, "parsed dice expression");
        Ok(expression)
    }

    /// The additive identity, rendered as `0`
    pub fn empty() -> Self {
        Self::default()
    }

    /// A single die with `sides` faces
    pub fn one(sides: i64) -> Result<Self> {
        let sides = u64::try_from(sides)
            .ok()
            .filter(|&s| s > 0)
            .ok_or(Error::InvalidSize(sides))?;
        Ok(Self::from_parts(BTreeMap::from([(sides, 1)]), 0))
    }

    /// Iterate `(sides, count)` pairs, biggest die first
    pub fn dice(&self) -> impl Iterator<Item = (u64, i64)> + '_ {
        self.dice.iter().rev().map(|(&sides, &count)| (sides, count))
    }

    /// Number of dice of the given size, zero when absent
    pub fn count(&self, sides: u64) -> i64 {
        self.dice.get(&sides).copied().unwrap_or(0)
    }

    pub fn constant(&self) -> i64 {
        self.constant
    }

    /// No dice and a zero constant
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty() && self.constant == 0
    }

    /// Scale every count and the constant by `factor`
    pub fn multiply(&self, factor: i64) -> Self {
        Self::from_parts(
            self.dice
                .iter()
                .map(|(&sides, &count)| (sides, count.saturating_mul(factor)))
                .collect(),
            self.constant.saturating_mul(factor),
        )
    }

    /// Add an integer, a textual expression or another expression
    pub fn add<'a>(&self, operand: impl Into<Operand<'a>>) -> Result<Self> {
        match operand.into() {
            Operand::Integer(value) => Ok(self.add_int(value)),
            Operand::Text(text) => self.add_text(text),
            Operand::Expression(other) => Ok(self.add_expression(&other)),
        }
    }

    pub fn add_int(&self, value: i64) -> Self {
        DiceExpression {
            dice: self.dice.clone(),
            constant: self.constant.saturating_add(value),
        }
    }

    pub fn add_text(&self, text: &str) -> Result<Self> {
        Ok(self.add_expression(&Self::parse(text)?))
    }

    /// Key-wise sum of both dice maps, constants summed
    pub fn add_expression(&self, other: &Self) -> Self {
        let dice = other
            .dice
            .iter()
            .fold(self.dice.clone(), |mut dice, (&sides, &count)| {
                let total = dice.get(&sides).copied().unwrap_or(0).saturating_add(count);
                dice.insert(sides, total);
                dice
            });
        Self::from_parts(dice, self.constant.saturating_add(other.constant))
    }

    /// Roll using the thread local generator
    pub fn roll(&self) -> Result<RollOutcome> {
        self.roll_with(&mut rand::thread_rng())
    }

    /// Roll using the provided Rng source
    pub fn roll_with<R: Rng>(&self, generator: &mut R) -> Result<RollOutcome> {
        self.roll_with_source(&mut RandomSource { generator })
    }

    /// Roll using the provided source. Non-positive counts roll nothing.
    pub fn roll_with_source<S: roll::Source>(&self, source: &mut S) -> Result<RollOutcome> {
        let mut rolls = BTreeMap::new();
        for (&sides, &count) in self.dice.iter().filter(|&(_, &count)| count > 0) {
            let mut results = Vec::new();
            for _ in 0..count {
                let result = source.throw(sides);
                trace!(sides, result, "die thrown");
                results.push(result);
            }
            rolls.insert(sides, results);
        }
        let outcome = RollOutcome::new(rolls, self.constant)?;
        debug!(expression = %self, total = outcome.total(), "rolled");
        Ok(outcome)
    }

    /// Roll and sum to an integer
    pub fn evaluate(&self) -> Result<i64> {
        Ok(self.roll()?.total())
    }
}

impl std::str::FromStr for DiceExpression {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Canonical text: biggest die first, a non-positive constant is dropped
/// when there are dice to show.
impl std::fmt::Display for DiceExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.dice.is_empty() {
            return write!(f, "{}", self.constant);
        }
        write!(
            f,
            "{}",
            self.dice()
                .map(|(sides, count)| format!("{count}d{sides}"))
                .format(" + ")
        )?;
        if self.constant > 0 {
            write!(f, " + {}", self.constant)?;
        }
        Ok(())
    }
}
