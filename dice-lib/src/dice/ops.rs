//! Operator sugar over the named combinators of [`DiceExpression`]

use super::DiceExpression;
use std::iter::Sum;
use std::ops::Add;
use std::ops::Mul;

impl Add for DiceExpression {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_expression(&rhs)
    }
}

impl Add<&DiceExpression> for &DiceExpression {
    type Output = DiceExpression;

    fn add(self, rhs: &DiceExpression) -> Self::Output {
        self.add_expression(rhs)
    }
}

impl Add<i64> for DiceExpression {
    type Output = Self;

    fn add(self, rhs: i64) -> Self::Output {
        self.add_int(rhs)
    }
}

impl Add<DiceExpression> for i64 {
    type Output = DiceExpression;

    fn add(self, rhs: DiceExpression) -> Self::Output {
        rhs.add_int(self)
    }
}

impl Mul<i64> for DiceExpression {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Mul<DiceExpression> for i64 {
    type Output = DiceExpression;

    fn mul(self, rhs: DiceExpression) -> Self::Output {
        rhs.multiply(self)
    }
}

impl Mul<&DiceExpression> for i64 {
    type Output = DiceExpression;

    fn mul(self, rhs: &DiceExpression) -> Self::Output {
        rhs.multiply(self)
    }
}

impl Sum for DiceExpression {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(DiceExpression::empty(), |acc, dice| acc.add_expression(&dice))
    }
}
