//! Move selection for the computer opponent.
//!
//! Every strategy is a pure function of a board snapshot, the acting player
//! and a randomness source. Strategies never touch a session; the caller
//! submits the chosen index like any other move.

mod heuristic;
mod minimax;
mod random;

pub use heuristic::{completing_cell, heuristic_move};
pub use minimax::{SearchResult, best_move, minimax};
pub use random::random_move;

use super::board::Board;
use super::types::Player;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Strength tier of the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case", try_from = "String")]
#[strum(ascii_case_insensitive)]
pub enum Strategy {
    /// Uniformly random empty cell.
    #[strum(to_string = "random", serialize = "easy")]
    Random,
    /// Win if possible, else block, else random.
    #[strum(to_string = "heuristic", serialize = "medium")]
    Heuristic,
    /// Full-depth minimax; never loses.
    #[strum(to_string = "exhaustive-search", serialize = "hard", serialize = "minimax")]
    ExhaustiveSearch,
}

impl TryFrom<String> for Strategy {
    type Error = strum::ParseError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl Strategy {
    /// Difficulty name shown to players.
    pub fn difficulty(self) -> &'static str {
        match self {
            Strategy::Random => "easy",
            Strategy::Heuristic => "medium",
            Strategy::ExhaustiveSearch => "hard",
        }
    }
}

/// Chooses a cell for `player` on `board` using `strategy`.
///
/// Returns `None` only when the board has no empty cell.
#[instrument(skip(board, rng), fields(empty = board.empty_indices().len()))]
pub fn decide<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    strategy: Strategy,
    rng: &mut R,
) -> Option<usize> {
    let choice = match strategy {
        Strategy::Random => random_move(board, rng),
        Strategy::Heuristic => heuristic_move(board, player, rng),
        Strategy::ExhaustiveSearch => best_move(board, player),
    };
    debug!(?choice, "Decision made");
    choice
}

/// A computer opponent: a strategy plus its own seedable randomness.
#[derive(Debug, Clone)]
pub struct Opponent {
    strategy: Strategy,
    rng: SmallRng,
}

impl Opponent {
    /// Creates an opponent seeded from system entropy.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates an opponent with reproducible choices.
    pub fn with_seed(strategy: Strategy, seed: u64) -> Self {
        Self {
            strategy,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Returns this opponent's strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Chooses a cell for `player` on a snapshot of `board`.
    pub fn choose(&mut self, board: &Board, player: Player) -> Option<usize> {
        decide(&board.snapshot(), player, self.strategy, &mut self.rng)
    }
}
