//! Strictly Tic-Tac-Toe - terminal binary

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufReader};
use std::path::Path;
use std::time::Duration;
use strictly_tictactoe::Opponent;
use strictly_tictactoe_cli::cli::{Cli, Command, apply_play_overrides};
use strictly_tictactoe_cli::{
    ComputerPlayer, EventSink, HumanPlayer, JsonSink, MatchSettings, Mode, Orchestrator,
    PlayConfig, TextSink, run_match,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = PlayConfig::load(cli.config.as_deref(), Path::new("."))?;

    match cli.command {
        Command::Play {
            mode,
            difficulty,
            computer,
            seed,
            think_ms,
            json,
        } => {
            let config = apply_play_overrides(config, mode, difficulty, computer, seed, think_ms);
            run_play(&config, json)
        }
        Command::Match {
            first,
            second,
            games,
            seed,
            no_swap,
            json,
        } => {
            let settings = MatchSettings::new(
                first,
                second,
                games.unwrap_or(*config.match_games()),
                seed.or(*config.seed()),
                !no_swap,
            );
            let tally = run_match(&settings)?;
            if json {
                println!("{}", serde_json::to_string(&tally)?);
            } else {
                println!("{}", tally);
            }
            Ok(())
        }
    }
}

/// Runs an interactive game on stdin/stdout.
#[instrument(skip(config), fields(mode = %config.mode()))]
fn run_play(config: &PlayConfig, json: bool) -> Result<()> {
    info!("Starting interactive game");

    let sink: Box<dyn EventSink> = if json {
        Box::new(JsonSink::new(io::stdout()))
    } else {
        Box::new(TextSink::new(io::stdout()))
    };

    let mut human = HumanPlayer::new("Human", BufReader::new(io::stdin()));
    if !json {
        human = human.with_prompt(io::stdout());
    }

    let mut orchestrator = match config.mode() {
        Mode::TwoPlayer => Orchestrator::two_player(Box::new(human), sink),
        Mode::Computer => {
            let opponent = match config.seed() {
                Some(seed) => Opponent::with_seed(*config.difficulty(), *seed),
                None => Opponent::new(*config.difficulty()),
            };
            let computer =
                ComputerPlayer::new(opponent, Duration::from_millis(*config.think_ms()));
            Orchestrator::versus_computer(
                Box::new(human),
                Box::new(computer),
                *config.computer(),
                sink,
            )
        }
    };

    orchestrator.run()
}
