use dice_lib::error::Result;
use dice_lib::DiceExpression;
use dice_lib::Verbosity;
use rand::Rng;
use tracing::info;

/// Roll one expression and render it for the terminal
#[tracing::instrument(skip(generator))]
pub fn roll_expression<R: Rng>(
    input: &str,
    verbosity: Verbosity,
    generator: &mut R,
) -> Result<String> {
    let dice = DiceExpression::parse(input)?;
    let outcome = dice.roll_with(generator)?;
    info!(%dice, total = outcome.total(), "rolled");
    Ok(match verbosity {
        Verbosity::Total | Verbosity::Sum => format!("{}: {}", dice, outcome.pretty(verbosity)),
        Verbosity::Table => format!("{}\n{}", dice, outcome.pretty(verbosity)),
    })
}
