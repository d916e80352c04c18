use std::process::ExitCode;

use clap::Parser as _;
use tracing::{debug, error};

use randstr::alphabet::Alphabet;
use randstr::cli::Cli;
use randstr::error::Result;
use randstr::generator;
use randstr::setup_tracing::setup_tracing;

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_tracing("warn");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let alphabet = match cli.alphabet.as_deref() {
        Some(symbols) => Alphabet::new(symbols)?,
        None => Alphabet::latin(),
    };

    debug!(
        "Generating {} string(s) of length {} over {} symbols",
        cli.count,
        cli.length,
        alphabet.len()
    );

    // One seeding per process, shared across the whole run.
    let mut rng = generator::seed_engine()?;

    for _ in 0..cli.count {
        println!("{}", generator::generate_with_rng(&mut rng, &alphabet, cli.length));
    }

    Ok(())
}
