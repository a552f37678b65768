use super::DiceExpression;
use std::borrow::Cow;

/// Right hand side accepted by [`DiceExpression::add`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand<'a> {
    Integer(i64),
    /// Parsed before being added
    Text(&'a str),
    Expression(Cow<'a, DiceExpression>),
}

impl From<i64> for Operand<'_> {
    fn from(value: i64) -> Self {
        Operand::Integer(value)
    }
}

impl<'a> From<&'a str> for Operand<'a> {
    fn from(value: &'a str) -> Self {
        Operand::Text(value)
    }
}

impl<'a> From<&'a String> for Operand<'a> {
    fn from(value: &'a String) -> Self {
        Operand::Text(value.as_str())
    }
}

impl From<DiceExpression> for Operand<'_> {
    fn from(value: DiceExpression) -> Self {
        Operand::Expression(Cow::Owned(value))
    }
}

impl<'a> From<&'a DiceExpression> for Operand<'a> {
    fn from(value: &'a DiceExpression) -> Self {
        Operand::Expression(Cow::Borrowed(value))
    }
}
