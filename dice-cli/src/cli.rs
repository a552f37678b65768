use clap::crate_authors;
use clap::crate_description;
use clap::crate_version;
use clap::value_parser;
pub use clap::Parser;

const DICE_AUTHOR: &str = crate_authors!();
const DICE_VERSION: &str = crate_version!();
const DICE_ABOUT: &str = crate_description!();
const DICE_EXPRESSIONS_HELP: &str = "Expressions to roll, like `3d6 + 2`";
const DICE_FLAG_V_SHORT: char = 'v';
const DICE_FLAG_V_HELP: &str = "0 prints the total, 1 the flat sum, 2 a table per die size";
const DICE_FLAG_V_ENV: &str = "DICE_VERBOSITY";
const DICE_FLAG_S_SHORT: char = 's';
const DICE_FLAG_S_HELP: &str = "Seed the generator to make the rolls reproducible";
const DICE_FLAG_S_ENV: &str = "DICE_SEED";
const DICE_FLAG_D_SHORT: char = 'd';
const DICE_FLAG_D_HELP: &str = "Enable Debug logging";

#[derive(Parser, Debug)]
#[command(author = DICE_AUTHOR, version = DICE_VERSION, about = DICE_ABOUT)]
pub struct Args {
    #[arg(required = true, help = DICE_EXPRESSIONS_HELP)]
    pub expressions: Vec<String>,
    #[arg(
        short = DICE_FLAG_V_SHORT,
        long,
        help = DICE_FLAG_V_HELP,
        env = DICE_FLAG_V_ENV,
        default_value_t = 1,
        value_parser = value_parser!(u8).range(0..=2),
    )]
    pub verbosity: u8,
    #[arg(short = DICE_FLAG_S_SHORT, long, help = DICE_FLAG_S_HELP, env = DICE_FLAG_S_ENV)]
    pub seed: Option<u64>,
    #[arg(short = DICE_FLAG_D_SHORT, long, help = DICE_FLAG_D_HELP, action)]
    pub debug: bool,
}
