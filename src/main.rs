//! Strictly Vowels - terminal front end
//!
//! Plays the vowel games on stdin/stdout.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};
use std::sync::Arc;
use strictly_vowels::{ConsolePresenter, GameConfig, GameSession, play_completion, play_matching};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the game screen.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Command::Match => run_match(&config),
        Command::Complete => run_complete(&config),
        Command::Guide { step } => run_guide(&config, step),
        Command::Catalog => run_catalog(&config),
    }
}

#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GameConfig::default(),
    };
    let config = config.with_seed(cli.seed);
    Ok(if cli.quiet {
        config.without_narration()
    } else {
        config
    })
}

fn rng_for(config: &GameConfig) -> StdRng {
    match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_entropy(),
    }
}

/// Run the matching game
#[instrument(skip(config))]
fn run_match(config: &GameConfig) -> Result<()> {
    let catalog = Arc::new(config.load_catalog()?);
    let mut session = GameSession::with_points(catalog, *config.points_per_correct());
    let mut presenter = ConsolePresenter::new(io::stdout().lock(), *config.narration());
    let end = play_matching(&mut session, &mut io::stdin().lock(), &mut presenter)?;
    info!(?end, "Matching game ended");
    Ok(())
}

/// Run the word-completion game
#[instrument(skip(config))]
fn run_complete(config: &GameConfig) -> Result<()> {
    let catalog = Arc::new(config.load_catalog()?);
    let mut rng = rng_for(config);
    let mut presenter = ConsolePresenter::new(io::stdout().lock(), *config.narration());
    let end = play_completion(
        catalog,
        *config.points_per_correct(),
        &mut rng,
        &mut io::stdin().lock(),
        &mut presenter,
    )?;
    info!(?end, "Completion game ended");
    Ok(())
}

/// Print guide steps
#[instrument(skip(config))]
fn run_guide(config: &GameConfig, step: Option<usize>) -> Result<()> {
    let catalog = config.load_catalog()?;
    let mut presenter = ConsolePresenter::new(io::stdout().lock(), *config.narration());
    match step {
        Some(n) => match n.checked_sub(1).and_then(|i| catalog.guide_step(i)) {
            Some(text) => {
                presenter.line(text);
                presenter.speak(text);
            }
            None => anyhow::bail!("the guide has {} steps", catalog.guide_steps().len()),
        },
        None => {
            for text in catalog.guide_steps() {
                presenter.line(text);
                presenter.speak(text);
            }
        }
    }
    Ok(())
}

/// Print the catalog as JSON
#[instrument(skip(config))]
fn run_catalog(config: &GameConfig) -> Result<()> {
    let catalog = config.load_catalog()?;
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &catalog)?;
    writeln!(out)?;
    Ok(())
}
