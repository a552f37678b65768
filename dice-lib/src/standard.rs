use crate::dice::DiceExpression;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

fn standard(sides: u64) -> DiceExpression {
    DiceExpression::from_parts(BTreeMap::from([(sides, 1)]), 0)
}

pub static D4: Lazy<DiceExpression> = Lazy::new(|| standard(4));
pub static D6: Lazy<DiceExpression> = Lazy::new(|| standard(6));
pub static D8: Lazy<DiceExpression> = Lazy::new(|| standard(8));
pub static D10: Lazy<DiceExpression> = Lazy::new(|| standard(10));
pub static D12: Lazy<DiceExpression> = Lazy::new(|| standard(12));
pub static D20: Lazy<DiceExpression> = Lazy::new(|| standard(20));
pub static D100: Lazy<DiceExpression> = Lazy::new(|| standard(100));
