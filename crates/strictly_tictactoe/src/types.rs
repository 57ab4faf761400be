//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    #[serde(alias = "X", alias = "x")]
    First,
    /// Player O (goes second).
    #[display("O")]
    #[serde(alias = "O", alias = "o")]
    Second,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Conventional mark symbol for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::First => 'X',
            Player::Second => 'O',
        }
    }

    /// Parses a mark symbol (`x`/`o`, case-insensitive).
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.trim() {
            "x" | "X" => Some(Player::First),
            "o" | "O" => Some(Player::Second),
            _ => None,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Marked(Player),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Marked(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}
