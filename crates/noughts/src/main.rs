//! Noughts - scripted driver
//!
//! Plays rounds through a single session and prints board, status and scores.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, parse_round};
use noughts_core::{LINES, Session, SessionConfig};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            rounds,
            config,
            player_x,
            player_o,
            json,
        } => {
            let config = match config {
                Some(path) => SessionConfig::from_file(&path)?,
                None => SessionConfig::default(),
            };
            run_play(config.with_overrides(player_x, player_o), &rounds, json)
        }
        Command::Lines => {
            for line in LINES {
                println!("{} {} {}", line[0], line[1], line[2]);
            }
            Ok(())
        }
    }
}

/// Plays every round in one session, then prints the scores.
#[instrument(skip(config))]
fn run_play(config: SessionConfig, rounds: &[String], json: bool) -> Result<()> {
    let mut session = Session::from_config(&config);

    for (number, round) in rounds.iter().enumerate() {
        let moves = parse_round(round).with_context(|| format!("Invalid round {round:?}"))?;
        session.restart_round();
        info!(round = number + 1, moves = moves.len(), "Playing round");

        for index in moves {
            if let Err(e) = session.play(index) {
                warn!(round = number + 1, index, error = %e, "Skipping move");
            }
        }

        println!("Round {}", number + 1);
        println!("{}", session.engine().board().display());
        println!("{}\n", session.status_message());
    }

    let scores = session.scores();
    if json {
        println!("{}", serde_json::to_string_pretty(&scores)?);
    } else {
        let names = session.names();
        println!("{}: {}", names.x(), scores.x());
        println!("{}: {}", names.o(), scores.o());
    }

    Ok(())
}
