//! Append/pop history of applied moves.

use super::action::Move;
use serde::{Deserialize, Serialize};

/// Stack of applied moves, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLedger {
    moves: Vec<Move>,
}

impl MoveLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self { moves: Vec::new() }
    }

    /// Records an applied move.
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Removes and returns the most recent move.
    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    /// Most recent move without removing it.
    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// Number of recorded moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Checks if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves in the order they were applied.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Forgets every move.
    pub fn clear(&mut self) {
        self.moves.clear();
    }
}

impl<'a> IntoIterator for &'a MoveLedger {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
