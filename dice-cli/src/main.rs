use clap::Parser;
use dice_lib::Verbosity;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process::ExitCode;
use tracing::debug;
use tracing::error;
use tracing::Level;
use tracing_unwrap::ResultExt;

mod cli;
mod roll;

fn main() -> ExitCode {
    let dotenv = dotenv::dotenv();
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true)
        .with_max_level(if args.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    if let Err(error) = dotenv {
        debug!("no `.env` file: {}", error);
    }

    // clap already bounds the value to 0..=2
    let verbosity = Verbosity::try_from(args.verbosity).expect_or_log("verbosity out of range");
    let mut generator = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut status = ExitCode::SUCCESS;
    for input in args.expressions.iter() {
        match roll::roll_expression(input, verbosity, &mut generator) {
            Ok(output) => println!("{}", output),
            Err(err) => {
                error!("`{}`: {}", input, err);
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}
