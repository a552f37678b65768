use crate::error::Error;
use crate::error::Result;
use pest::iterators::Pair;
use pest::Parser as _;
use pest_derive::Parser;
use std::collections::BTreeMap;

const TERM_SEPARATOR: char = '+';

/// Pest parser for a single `+`-separated term
#[derive(Parser)]
#[grammar = "dice.pest"]
pub(crate) struct Parser;

/// One term of a flat dice sum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Term {
    Dice { count: i64, sides: i64 },
    Constant(i64),
}

impl Parser {
    /// Parse a whole expression into a `sides -> count` map and a constant.
    ///
    /// A segment whose value no longer fits an `i64` once accumulated is
    /// malformed, like an out of range literal.
    pub(crate) fn parse_expression(input: &str) -> Result<(BTreeMap<u64, i64>, i64)> {
        input.split(TERM_SEPARATOR).map(str::trim).try_fold(
            (BTreeMap::new(), 0i64),
            |(mut dice, constant), segment| {
                let overflow = || Error::Parse(segment.to_owned());
                match Self::parse_term(segment)? {
                    Term::Dice { count, sides } => {
                        let sides = u64::try_from(sides)
                            .ok()
                            .filter(|&s| s > 0)
                            .ok_or(Error::InvalidSize(sides))?;
                        let count = dice
                            .get(&sides)
                            .copied()
                            .unwrap_or(0i64)
                            .checked_add(count)
                            .ok_or_else(overflow)?;
                        dice.insert(sides, count);
                        Ok((dice, constant))
                    }
                    Term::Constant(value) => {
                        let constant = constant.checked_add(value).ok_or_else(overflow)?;
                        Ok((dice, constant))
                    }
                }
            },
        )
    }

    /// Parse an already trimmed segment
    pub(crate) fn parse_term(segment: &str) -> Result<Term> {
        let malformed = || Error::Parse(segment.to_owned());
        let pair = Self::parse(Rule::term, segment)
            .map_err(|_| malformed())?
            .next()
            .ok_or_else(malformed)?;
        match pair.as_rule() {
            Rule::dice => {
                let mut inner = pair.into_inner();
                let count = Self::extract_number(inner.next(), segment)?;
                let sides = Self::extract_number(inner.next(), segment)?;
                Ok(Term::Dice { count, sides })
            }
            Rule::constant => Ok(Term::Constant(Self::extract_number(
                pair.into_inner().next(),
                segment,
            )?)),
            _ => Err(malformed()),
        }
    }

    /// Integer literals that overflow `i64` are malformed too
    fn extract_number(pair: Option<Pair<Rule>>, segment: &str) -> Result<i64> {
        pair.and_then(|number| number.as_str().parse::<i64>().ok())
            .ok_or_else(|| Error::Parse(segment.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dice_term_test() {
        assert_eq!(
            Term::Dice { count: 3, sides: 6 },
            Parser::parse_term("3d6").unwrap()
        );
        assert_eq!(
            Term::Dice { count: 2, sides: 20 },
            Parser::parse_term("2 d 20").unwrap()
        );
        assert_eq!(
            Term::Dice {
                count: -2,
                sides: 4
            },
            Parser::parse_term("-2d4").unwrap()
        );
    }

    #[test]
    fn constant_term_test() {
        assert_eq!(Term::Constant(12), Parser::parse_term("12").unwrap());
        assert_eq!(Term::Constant(-3), Parser::parse_term("-3").unwrap());
        assert_eq!(Term::Constant(0), Parser::parse_term("0").unwrap());
    }

    #[test]
    fn malformed_term_test() {
        for segment in ["", "d6", "3d", "3d6d2", "dd", "abc", "3 6", "1.5", "3D6", "- 3"] {
            assert_eq!(
                Err(Error::Parse(segment.to_owned())),
                Parser::parse_term(segment),
                "segment {:?}",
                segment
            );
        }
    }

    #[test]
    fn overflowing_literal_test() {
        let segment = "99999999999999999999";
        assert_eq!(
            Err(Error::Parse(segment.to_owned())),
            Parser::parse_term(segment)
        );
    }

    #[test]
    fn expression_test() {
        let (dice, constant) = Parser::parse_expression("3d6 + 2").unwrap();
        assert_eq!(BTreeMap::from([(6, 3)]), dice);
        assert_eq!(2, constant);
    }

    #[test]
    fn repeated_sizes_are_summed_test() {
        let (dice, constant) = Parser::parse_expression("1d6 + 4 + 2d6 + 1d8 + -1").unwrap();
        assert_eq!(BTreeMap::from([(6, 3), (8, 1)]), dice);
        assert_eq!(3, constant);
    }

    #[test]
    fn order_independent_test() {
        let lhs = Parser::parse_expression("2 + 1d20 + 3d6").unwrap();
        let rhs = Parser::parse_expression("3d6+1d20+2").unwrap();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn malformed_expression_test() {
        assert_eq!(
            Err(Error::Parse(String::new())),
            Parser::parse_expression("")
        );
        assert_eq!(
            Err(Error::Parse(String::new())),
            Parser::parse_expression("3d6 + ")
        );
        assert_eq!(
            Err(Error::Parse("3d6d2".to_owned())),
            Parser::parse_expression("1d4 + 3d6d2")
        );
        assert_eq!(
            Err(Error::Parse("x".to_owned())),
            Parser::parse_expression("  x  ")
        );
    }

    #[test]
    fn accumulated_overflow_test() {
        assert_eq!(
            Err(Error::Parse("1".to_owned())),
            Parser::parse_expression("9223372036854775807 + 1")
        );
        assert_eq!(
            Err(Error::Parse("1d6".to_owned())),
            Parser::parse_expression("9223372036854775807d6 + 1d6")
        );
        assert_eq!(
            Err(Error::Parse("-1".to_owned())),
            Parser::parse_expression("-9223372036854775808 + -1")
        );
        let (dice, constant) =
            Parser::parse_expression("9223372036854775807d6 + -1d6 + 9223372036854775807")
                .unwrap();
        assert_eq!(BTreeMap::from([(6, i64::MAX - 1)]), dice);
        assert_eq!(i64::MAX, constant);
    }

    #[test]
    fn error_message_test() {
        assert_eq!(
            "malformed term \"3d\"",
            Parser::parse_expression("3d").unwrap_err().to_string()
        );
        assert_eq!(
            "malformed term \"\"",
            Parser::parse_expression("").unwrap_err().to_string()
        );
        assert_eq!(
            "malformed term \"\"",
            Parser::parse_expression("1d4 +  + 2").unwrap_err().to_string()
        );
    }

    #[test]
    fn non_positive_size_test() {
        assert_eq!(Err(Error::InvalidSize(0)), Parser::parse_expression("3d0"));
        assert_eq!(
            Err(Error::InvalidSize(-6)),
            Parser::parse_expression("2 + 3d-6")
        );
    }
}
