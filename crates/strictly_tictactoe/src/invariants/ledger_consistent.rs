//! Ledger consistency invariant: ledger replays to exactly the board.

use super::super::{Board, Session};
use super::Invariant;

/// Invariant: every ledger entry corresponds to exactly one occupied cell.
///
/// Replaying the ledger onto an empty board must succeed without touching an
/// occupied cell and must reproduce the session's board. In particular the
/// ledger length equals the number of non-empty cells.
pub struct LedgerConsistentInvariant;

impl Invariant<Session> for LedgerConsistentInvariant {
    fn holds(session: &Session) -> bool {
        let board = session.board();
        if session.ledger().len() != board.occupied_count() {
            return false;
        }

        let mut replayed = Board::new();
        for mv in session.ledger() {
            if replayed.place(mv.index, mv.player).is_err() {
                return false;
            }
        }
        replayed == *board
    }

    fn description() -> &'static str {
        "Ledger replays to the current board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player};

    #[test]
    fn test_empty_session_holds() {
        assert!(LedgerConsistentInvariant::holds(&Session::new()));
    }

    #[test]
    fn test_full_game_holds() {
        let mut session = Session::new();
        for index in [0, 1, 2, 3, 4, 6, 5, 8, 7] {
            session.submit_move(index).unwrap();
        }
        assert!(LedgerConsistentInvariant::holds(&session));
        assert_eq!(session.ledger().len(), 9);
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut session = Session::new();
        session.submit_move(4).unwrap();
        session.board.place(0, Player::Second).unwrap();
        assert!(!LedgerConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_mismatched_cell_violates() {
        let mut session = Session::new();
        session.submit_move(4).unwrap();
        // Same count, different cell.
        session.ledger.pop();
        session.ledger.push(Move::new(Player::First, 5));
        assert!(!LedgerConsistentInvariant::holds(&session));
    }
}
