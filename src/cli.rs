//! Command-line interface for strictly_vowels.

use clap::{Parser, Subcommand};

/// Strictly Vowels - vowel matching and word completion for young readers
#[derive(Parser, Debug)]
#[command(name = "strictly_vowels")]
#[command(about = "Vowel recognition games in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game configuration
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Seed for shuffling tiles and words (overrides the config file)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Skip sound and speech cues
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Drag each vowel to the picture whose word starts with it
    Match,

    /// Fill the missing vowels of a word
    Complete,

    /// Read the guide steps
    Guide {
        /// Read only this step (numbered from 1)
        #[arg(long)]
        step: Option<usize>,
    },

    /// Print the active content catalog as JSON
    Catalog,
}
