//! Command-line interface for the tic-tac-toe front-end.

use crate::config::{Mode, PlayConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::{Player, Strategy};

/// Strictly Tic-Tac-Toe - play a friend or the computer in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with undo and a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ./tictactoe.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game
    Play {
        /// two-player or computer
        #[arg(long)]
        mode: Option<Mode>,

        /// Computer strength: easy, medium or hard
        #[arg(long)]
        difficulty: Option<Strategy>,

        /// Mark the computer plays (x or o)
        #[arg(long, value_parser = parse_mark)]
        computer: Option<Player>,

        /// Seed for reproducible computer moves
        #[arg(long)]
        seed: Option<u64>,

        /// Computer thinking delay in milliseconds
        #[arg(long)]
        think_ms: Option<u64>,

        /// Emit one JSON object per event
        #[arg(long)]
        json: bool,
    },

    /// Pit two strategies against each other
    Match {
        /// Strategy listed first (random, heuristic, exhaustive-search)
        #[arg(long)]
        first: Strategy,

        /// Strategy listed second
        #[arg(long)]
        second: Strategy,

        /// Number of games
        #[arg(long)]
        games: Option<u32>,

        /// Base seed for reproducible matches
        #[arg(long)]
        seed: Option<u64>,

        /// Let the first strategy play X in every game
        #[arg(long)]
        no_swap: bool,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parses `x` or `o` into a mark.
pub fn parse_mark(value: &str) -> Result<Player, String> {
    Player::from_symbol(value).ok_or_else(|| format!("expected x or o, got '{}'", value))
}

/// Applies `play` flags on top of the loaded configuration.
pub fn apply_play_overrides(
    config: PlayConfig,
    mode: Option<Mode>,
    difficulty: Option<Strategy>,
    computer: Option<Player>,
    seed: Option<u64>,
    think_ms: Option<u64>,
) -> PlayConfig {
    let mut config = config;
    if let Some(mode) = mode {
        config = config.with_mode(mode);
    }
    if let Some(difficulty) = difficulty {
        config = config.with_difficulty(difficulty);
    }
    if let Some(computer) = computer {
        config = config.with_computer(computer);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(think_ms) = think_ms {
        config = config.with_think_ms(think_ms);
    }
    config
}
