//! Strictly Tic-Tac-Toe - pure game logic with undo and a computer opponent
//!
//! # Architecture
//!
//! - **Board**: nine cells, the eight win lines, terminal evaluation
//! - **Ledger**: stack of applied moves, enabling exact undo
//! - **Session**: the only thing that mutates a game; enforces turn order
//! - **Invariants**: consistency properties checked after every transition
//! - **Decision**: random, win/block heuristic and exhaustive minimax
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameStatus, Opponent, Player, Session, Strategy};
//!
//! let mut session = Session::new();
//! session.submit_move(4)?;
//!
//! let mut computer = Opponent::with_seed(Strategy::ExhaustiveSearch, 7);
//! if let Some(index) = computer.choose(session.board(), session.current_player()) {
//!     session.submit_move(index)?;
//! }
//! assert_eq!(session.status(), GameStatus::InProgress);
//! assert_eq!(session.current_player(), Player::First);
//! # Ok::<(), strictly_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod decision;
mod ledger;
mod position;
mod session;
mod types;

pub mod invariants;

pub use action::{Move, MoveError, UndoError};
pub use board::{Board, CELL_COUNT, GameStatus, NotAWinLine, WinLine};
pub use decision::{
    Opponent, SearchResult, Strategy, best_move, completing_cell, decide, heuristic_move, minimax,
    random_move,
};
pub use ledger::MoveLedger;
pub use position::Position;
pub use session::{Session, TurnOutcome, new_session};
pub use types::{Cell, Player};
