//! Hangman - CLI
//!
//! Guess the hidden word one letter at a time. Six misses and you lose.

use anyhow::Result;
use clap::{ArgAction, Parser};
use hangman::config::Config;
use hangman::interactive::{Prompter, TurnController};
use hangman::persistence::DEFAULT_SAVES_DIR;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the log filter
const LOG_ENV: &str = "HANGMAN_LOG";

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Terminal Hangman: guess the word before you run out of attempts",
    version,
    author
)]
struct Cli {
    /// Word list file, one word per line (default: built-in list)
    #[arg(short = 'd', long)]
    dictionary: Option<PathBuf>,

    /// Directory for saved games
    #[arg(short = 's', long, default_value = DEFAULT_SAVES_DIR)]
    saves_dir: PathBuf,

    /// Give up after this many invalid answers to one question
    #[arg(long)]
    max_retries: Option<usize>,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            dictionary: self.dictionary.clone(),
            saves_dir: self.saves_dir.clone(),
            max_retries: self.max_retries,
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config();
    config.validate()?;

    let dictionary = config.dictionary()?;
    let store = config.save_store();

    let prompter =
        Prompter::new(io::stdin().lock(), io::stdout().lock()).with_max_retries(config.max_retries);
    TurnController::new(prompter, &dictionary, &store).run()
}
