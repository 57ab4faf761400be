//! Property tests for session transitions, driven by seeded random playouts.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use strictly_tictactoe::invariants::{InvariantSet, SessionInvariants};
use strictly_tictactoe::{Cell, GameStatus, MoveError, Session, UndoError, random_move};

fn occupied(session: &Session) -> usize {
    session
        .board()
        .cells()
        .iter()
        .filter(|cell| **cell != Cell::Empty)
        .count()
}

#[test]
fn test_ledger_tracks_occupied_cells_through_moves_and_undos() {
    for seed in 0..200 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut session = Session::new();

        for _ in 0..40 {
            let roll: u8 = rng.gen_range(0..10);
            if roll < 3 {
                let _ = session.undo();
            } else if roll == 3 {
                // Out-of-contract requests must be rejected without effect.
                let index = rng.gen_range(0..12);
                let _ = session.submit_move(index);
            } else if let Some(index) = random_move(session.board(), &mut rng) {
                let _ = session.submit_move(index);
            }

            assert_eq!(session.ledger().len(), occupied(&session), "seed {seed}");
            assert!(SessionInvariants::check_all(&session).is_ok(), "seed {seed}");
        }
    }
}

#[test]
fn test_submit_then_undo_round_trips() {
    for seed in 0..100 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut session = Session::new();

        while !session.is_over() {
            let before = session.clone();
            let Some(index) = random_move(session.board(), &mut rng) else {
                break;
            };

            let outcome = session.submit_move(index).unwrap();
            let undone = session.undo().unwrap();
            assert_eq!(undone, *outcome.applied());
            assert_eq!(session, before, "seed {seed}");

            session.submit_move(index).unwrap();
        }
    }
}

#[test]
fn test_rejected_moves_leave_session_unchanged() {
    let mut session = Session::new();
    for index in [4, 0, 8] {
        session.submit_move(index).unwrap();
    }
    let snapshot = session.board_snapshot();
    let ledger_len = session.ledger().len();

    assert_eq!(
        session.submit_move(0),
        Err(MoveError::CellOccupied { index: 0 })
    );
    assert_eq!(
        session.submit_move(42),
        Err(MoveError::IndexOutOfRange { index: 42 })
    );
    assert_eq!(session.board_snapshot(), snapshot);
    assert_eq!(session.ledger().len(), ledger_len);
}

#[test]
fn test_undo_after_reset_reports_no_moves() {
    let mut session = Session::new();
    session.submit_move(4).unwrap();
    session.reset();
    assert_eq!(session.undo(), Err(UndoError::NoMovesToUndo));
    assert_eq!(session.status(), GameStatus::InProgress);
}

#[test]
fn test_sessions_are_independent() {
    let mut a = Session::new();
    let b = Session::new();
    a.submit_move(4).unwrap();
    assert!(b.board().is_empty(4));
    assert!(b.ledger().is_empty());
}

#[test]
fn test_snapshot_does_not_alias_session() {
    let mut session = Session::new();
    let mut snapshot = session.board_snapshot();
    snapshot.place(0, strictly_tictactoe::Player::Second).unwrap();
    assert!(session.board().is_empty(0));
    assert!(session.submit_move(0).is_ok());
}
