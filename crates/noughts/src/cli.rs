//! Command-line interface for noughts.

use clap::{Parser, Subcommand};

/// Noughts - scripted driver for the noughts and crosses engine
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play scripted noughts and crosses rounds", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one or more rounds in a single session
    Play {
        /// Rounds to play, each a comma-separated list of cell indices (0-8)
        #[arg(required = true)]
        rounds: Vec<String>,

        /// TOML file with player names
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Name for X (overrides config)
        #[arg(long)]
        player_x: Option<String>,

        /// Name for O (overrides config)
        #[arg(long)]
        player_o: Option<String>,

        /// Print final scores as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the winning line table
    Lines,
}

/// Parses one round argument into cell indices.
pub fn parse_round(round: &str) -> Result<Vec<usize>, std::num::ParseIntError> {
    round
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}
