use super::RollOutcome;
use crate::error::Error;
use itertools::Itertools;
use std::iter;

const SEPARATOR: &str = "---------------";

/// How much of a roll to show
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Verbosity {
    /// `35`
    #[default]
    Total,
    /// `35 = 8 + 9 + 1 + 2 + 3 + 12`
    Sum,
    /// One line per die size, then the grand total
    Table,
}

impl TryFrom<u8> for Verbosity {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Verbosity::Total),
            1 => Ok(Verbosity::Sum),
            2 => Ok(Verbosity::Table),
            _ => Err(Error::InvalidVerbosity(value)),
        }
    }
}

impl From<Verbosity> for u8 {
    fn from(value: Verbosity) -> Self {
        value as u8
    }
}

impl RollOutcome {
    /// Stringify self at the given verbosity
    pub fn pretty(&self, verbosity: Verbosity) -> String {
        match verbosity {
            Verbosity::Total => self.total().to_string(),
            Verbosity::Sum => sum(self),
            Verbosity::Table => table(self),
        }
    }
}

/// The constant is always the last addend, even when zero
fn sum(outcome: &RollOutcome) -> String {
    let addends = outcome
        .by_size()
        .flat_map(|(_, results)| results.iter().map(u64::to_string))
        .chain(iter::once(outcome.constant.to_string()));
    format!("{} = {}", outcome.total(), addends.format(" + "))
}

fn table(outcome: &RollOutcome) -> String {
    let mut parts = outcome
        .by_size()
        .map(|(sides, results)| {
            (
                format!("{}d{}", results.len(), sides),
                results
                    .iter()
                    .fold(0u64, |sum, &r| sum.saturating_add(r))
                    .to_string(),
                format!(" = {}", results.iter().format(" + ")),
            )
        })
        .collect::<Vec<_>>();
    if outcome.constant != 0 {
        let constant = outcome.constant.to_string();
        parts.push((constant.clone(), constant, String::new()));
    }
    parts
        .iter()
        .enumerate()
        .map(|(i, (term, subtotal, expansion))| {
            let marker = if i > 0 { '+' } else { ' ' };
            format!(" {marker} {term:>6} : {subtotal:<3}{expansion}")
                .trim_end()
                .to_owned()
        })
        .chain([SEPARATOR.to_owned(), format!(" =          {}", outcome.total())])
        .join("\n")
}
