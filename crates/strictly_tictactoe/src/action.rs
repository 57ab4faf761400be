//! First-class move and error types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. Once applied they are held by
//! the ledger until undone, at which point the ledger hands them back.

use super::position::Position;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Board index (0-8, row-major) where the mark was placed.
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, index: usize) -> Self {
        Self { player, index }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the board index of this move.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the named position of this move, if the index is on the board.
    pub fn position(&self) -> Option<Position> {
        Position::from_index(self.index)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position() {
            Some(pos) => write!(f, "{} -> {}", self.player, pos.label()),
            None => write!(f, "{} -> #{}", self.player, self.index),
        }
    }
}

/// Error that can occur when placing or clearing a mark.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The index is not on the board.
    #[display("Index {index} is out of range (must be 0-8)")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
    },

    /// The cell at the index is already occupied.
    #[display("Cell {index} is already occupied")]
    CellOccupied {
        /// The occupied index.
        index: usize,
    },

    /// The cell at the index is already empty and cannot be cleared.
    #[display("Cell {index} is already empty")]
    CellEmpty {
        /// The empty index.
        index: usize,
    },

    /// The game is already over.
    #[display("Game is already over")]
    GameAlreadyOver,
}

/// Error that can occur when undoing a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum UndoError {
    /// The ledger is empty.
    #[display("No moves to undo")]
    NoMovesToUndo,

    /// The board refused to clear the recorded cell.
    #[display("Board rejected undo: {_0}")]
    #[from]
    Board(MoveError),
}
