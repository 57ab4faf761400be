//! Terminal front-end for strictly_tictactoe
//!
//! Wires a [`Session`](strictly_tictactoe::Session) to participants typing at
//! a prompt or choosing with a strategy, and reports what happens as prose or
//! JSON lines.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod events;
pub mod orchestrator;
pub mod players;
pub mod tournament;

pub use config::{ConfigError, DEFAULT_CONFIG_FILE, Mode, PlayConfig};
pub use events::{EventSink, GameEvent, JsonSink, TextSink};
pub use orchestrator::Orchestrator;
pub use players::{Action, ComputerPlayer, HumanPlayer, Participant, parse_command};
pub use tournament::{MatchSettings, MatchTally, play_game, run_match};
