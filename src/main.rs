//! Wordle - CLI
//!
//! Draws a secret word from a word bank file and gives the player six guesses.

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::{Prompter, run_play},
    output::Palette,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the secret 5-letter word in six tries",
    version,
    author
)]
struct Cli {
    /// Word bank file; prompted for when omitted
    wordbank: Option<PathBuf>,

    /// Seed for choosing the secret word (reproducible games)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => {
            log::debug!("using seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
    run_play(&mut prompter, cli.wordbank, &mut rng, &Palette::default())
        .context("game could not be completed")?;

    Ok(())
}
