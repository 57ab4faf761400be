//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_tictactoe::{Player, Strategy};
use tracing::{debug, info, instrument};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Who sits at the other side of the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case", try_from = "String")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Mode {
    /// Two people share the terminal.
    TwoPlayer,
    /// One person plays the computer.
    Computer,
}

impl TryFrom<String> for Mode {
    type Error = strum::ParseError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// Settings for interactive play and strategy matches.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct PlayConfig {
    /// Two-player or versus the computer.
    #[serde(default = "default_mode")]
    mode: Mode,

    /// Computer strength (easy, medium, hard).
    #[serde(default = "default_difficulty")]
    difficulty: Strategy,

    /// Which mark the computer plays.
    #[serde(default = "default_computer")]
    computer: Player,

    /// Pause before the computer moves, in milliseconds.
    #[serde(default = "default_think_ms")]
    think_ms: u64,

    /// Seed for reproducible computer choices.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,

    /// Games per strategy match.
    #[serde(default = "default_match_games")]
    match_games: u32,
}

fn default_mode() -> Mode {
    Mode::Computer
}

fn default_difficulty() -> Strategy {
    Strategy::ExhaustiveSearch
}

fn default_computer() -> Player {
    Player::Second
}

fn default_think_ms() -> u64 {
    400
}

fn default_match_games() -> u32 {
    100
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            difficulty: default_difficulty(),
            computer: default_computer(),
            think_ms: default_think_ms(),
            seed: None,
            match_games: default_match_games(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(mode = %config.mode, difficulty = %config.difficulty, "Config loaded");
        Ok(config)
    }

    /// Resolves the configuration to use.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] in
    /// `dir` is used if present, otherwise built-in defaults.
    #[instrument(skip(explicit, dir))]
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let candidate = dir.join(DEFAULT_CONFIG_FILE);
                if candidate.is_file() {
                    Self::from_file(candidate)
                } else {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
