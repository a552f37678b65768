mod dice;
pub mod error;
mod parser;
pub mod roll;
mod standard;

pub use dice::DiceExpression;
pub use dice::Operand;
pub use roll::RollOutcome;
pub use roll::Verbosity;
pub use standard::D10;
pub use standard::D100;
pub use standard::D12;
pub use standard::D20;
pub use standard::D4;
pub use standard::D6;
pub use standard::D8;

/// Shorthand for [`DiceExpression::one`]
pub fn d(sides: i64) -> error::Result<DiceExpression> {
    DiceExpression::one(sides)
}

/// Parse `input` and roll it once, returning the total
pub fn roll(input: &str) -> error::Result<i64> {
    DiceExpression::parse(input)?.evaluate()
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::roll::Source;
    use crate::*;

    pub struct MockIter<'a, T: Iterator<Item = u64>> {
        pub iter: &'a mut T,
    }

    impl<T: Iterator<Item = u64>> Source for MockIter<'_, T> {
        fn throw(&mut self, sides: u64) -> u64 {
            match self.iter.next() {
                Some(value) => {
                    if value > sides {
                        panic!("Tried to return {} for a {} sided dice", value, sides)
                    }
                    value
                }
                None => panic!("Iterator out of values"),
            }
        }
    }

    #[test]
    fn three_d_six_plus_two_test() {
        let dice = DiceExpression::parse("3d6 + 2").unwrap();
        let roll_mock = vec![3, 5, 1];
        let res = dice
            .roll_with_source(&mut MockIter {
                iter: &mut roll_mock.into_iter(),
            })
            .unwrap();
        assert_eq!(11, res.total());
        assert_eq!(&[3, 5, 1], res.rolls(6));
        assert_eq!("11 = 3 + 5 + 1 + 2", res.pretty(Verbosity::Sum));
    }

    #[test]
    fn mock_rolls_follow_size_order_test() {
        // the map is walked smallest size first, printing reverses it
        let dice = DiceExpression::parse("2d20 + 3d6 + 12").unwrap();
        let roll_mock = vec![1, 2, 3, 8, 9];
        let res = dice
            .roll_with_source(&mut MockIter {
                iter: &mut roll_mock.into_iter(),
            })
            .unwrap();
        assert_eq!(35, res.total());
        assert_eq!("35", res.pretty(Verbosity::Total));
        assert_eq!("35 = 8 + 9 + 1 + 2 + 3 + 12", res.pretty(Verbosity::Sum));
        assert!(res.pretty(Verbosity::Table).ends_with(" =          35"));
    }

    #[test]
    fn constant_only_test() {
        let dice = DiceExpression::parse("20").unwrap();
        let res = dice
            .roll_with_source(&mut MockIter {
                iter: &mut std::iter::empty(),
            })
            .unwrap();
        assert_eq!(20, res.total());
        assert_eq!("20 = 20", res.pretty(Verbosity::Sum));
    }

    #[test]
    fn total_matches_every_verbosity_test() {
        let dice = DiceExpression::parse("4d10 + 1d12 + 3").unwrap();
        let res = dice
            .roll_with_source(&mut MockIter { iter: &mut (1..6) })
            .unwrap();
        let total = res.total();
        assert_eq!(1 + 2 + 3 + 4 + 5 + 3, total);
        assert_eq!(total.to_string(), res.pretty(Verbosity::Total));
        assert!(res.pretty(Verbosity::Sum).starts_with(&format!("{} = ", total)));
        assert!(res
            .pretty(Verbosity::Table)
            .ends_with(&format!("={:>12}", total)));
    }

    #[test]
    fn standard_dice_test() {
        for (dice, sides) in [
            (&*D4, 4),
            (&*D6, 6),
            (&*D8, 8),
            (&*D10, 10),
            (&*D12, 12),
            (&*D20, 20),
            (&*D100, 100),
        ] {
            assert_eq!(&d(sides).unwrap(), dice);
            assert_eq!(format!("1d{}", sides), dice.to_string());
        }
    }

    #[test]
    fn parse_error_message_test() {
        assert_eq!(
            "malformed term \"3d\"",
            DiceExpression::parse("3d").unwrap_err().to_string()
        );
        assert_eq!(
            "malformed term \"\"",
            DiceExpression::parse("").unwrap_err().to_string()
        );
        assert_eq!(
            "invalid die size 0: sizes must be positive",
            d(0).unwrap_err().to_string()
        );
    }

    #[test]
    fn d_test() {
        assert_eq!(Err(Error::InvalidSize(0)), d(0));
        assert_eq!("3d6 + 2", (3 * d(6).unwrap() + 2).to_string());
    }

    #[test]
    fn roll_test() {
        for _ in 0..100 {
            let total = roll("2d6 + 1").unwrap();
            assert!((3..=13).contains(&total));
        }
        assert_eq!(Ok(5), roll("5"));
        assert_eq!(Err(Error::Parse(String::new())), roll(""));
        assert!(matches!(roll("0"), Err(Error::InvalidState(_))));
    }
}
