//! Game session: the single authority that mutates game state.
//!
//! A session owns one board, one ledger, the player to move and the game
//! status. Every transition is all-or-nothing: on error nothing changes.

use super::action::{Move, MoveError, UndoError};
use super::board::{Board, GameStatus};
use super::invariants::{InvariantSet, InvariantViolation, SessionInvariants, assert_invariants};
use super::ledger::MoveLedger;
use super::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// The move that was just applied.
    applied: Move,
    /// Game status after the move.
    status: GameStatus,
}

impl TurnOutcome {
    /// Returns true if the move ended the game.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// A single game of tic-tac-toe.
///
/// Deserialization checks every session invariant and refuses inconsistent
/// input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord")]
pub struct Session {
    pub(crate) board: Board,
    pub(crate) ledger: MoveLedger,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
}

/// Unvalidated wire form of a [`Session`].
#[derive(Deserialize)]
struct SessionRecord {
    board: Board,
    ledger: MoveLedger,
    current_player: Player,
    status: GameStatus,
}

impl TryFrom<SessionRecord> for Session {
    type Error = InvariantViolation;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        let session = Self {
            board: record.board,
            ledger: record.ledger,
            current_player: record.current_player,
            status: record.status,
        };
        SessionInvariants::check_all(&session).map_err(|violations| {
            warn!(count = violations.len(), "Rejected inconsistent session");
            let described: Vec<&str> = violations.iter().map(|v| v.description.as_str()).collect();
            InvariantViolation::new(described.join("; "))
        })?;
        Ok(session)
    }
}

/// Starts a fresh session: empty board, X to move.
pub fn new_session() -> Session {
    Session::new()
}

impl Session {
    /// Creates a new session.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new game session");
        Self {
            board: Board::new(),
            ledger: MoveLedger::new(),
            current_player: Player::First,
            status: GameStatus::InProgress,
        }
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// On success the move is recorded and the board evaluated. A win or
    /// draw halts turn alternation; otherwise the other player is to move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameAlreadyOver`] if the game is won or drawn.
    /// - [`MoveError::IndexOutOfRange`] / [`MoveError::CellOccupied`] from
    ///   the board. No state changes on error.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn submit_move(&mut self, index: usize) -> Result<TurnOutcome, MoveError> {
        if self.status.is_terminal() {
            warn!(index, status = ?self.status, "Move rejected: game already over");
            return Err(MoveError::GameAlreadyOver);
        }

        let player = self.current_player;
        self.board
            .place(index, player)
            .inspect_err(|e| warn!(index, error = %e, "Move rejected by board"))?;

        let applied = Move::new(player, index);
        self.ledger.push(applied);
        self.status = self.board.evaluate();

        match self.status {
            GameStatus::InProgress => {
                self.current_player = player.opponent();
                debug!(index, next = %self.current_player, "Move applied");
            }
            GameStatus::Won(winner, line) => {
                info!(index, winner = %winner, line = %line, "Game won");
            }
            GameStatus::Drawn => {
                info!(index, "Game drawn");
            }
        }

        assert_invariants(self);

        Ok(TurnOutcome {
            applied,
            status: self.status,
        })
    }

    /// Reverts the most recent move and hands it back.
    ///
    /// The mover of the undone move is to play again. Undoing the move that
    /// ended a game reopens it.
    ///
    /// # Errors
    ///
    /// - [`UndoError::NoMovesToUndo`] if nothing has been played.
    /// - [`UndoError::Board`] if the board disagrees with the ledger. No
    ///   state changes on error.
    #[instrument(skip(self), fields(moves = self.ledger.len()))]
    pub fn undo(&mut self) -> Result<Move, UndoError> {
        let last = *self.ledger.last().ok_or_else(|| {
            debug!("Undo requested with empty ledger");
            UndoError::NoMovesToUndo
        })?;

        self.board.clear(last.index)?;
        let undone = self.ledger.pop().unwrap_or(last);

        if self.status.is_terminal() {
            info!(status = ?self.status, "Undo reopened finished game");
        }
        self.current_player = undone.player;
        self.status = GameStatus::InProgress;

        debug!(undone = %undone, "Move undone");
        assert_invariants(self);

        Ok(undone)
    }

    /// Starts over: empty board, empty ledger, X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(moves = self.ledger.len(), "Resetting session");
        self.board = Board::new();
        self.ledger.clear();
        self.current_player = Player::First;
        self.status = GameStatus::InProgress;
    }

    /// Returns the player to move (the winner's mark once the game is won).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Independent copy of the board for analysis or rendering.
    pub fn board_snapshot(&self) -> Board {
        self.board.snapshot()
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move ledger.
    pub fn ledger(&self) -> &MoveLedger {
        &self.ledger
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
