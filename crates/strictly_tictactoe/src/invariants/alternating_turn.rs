//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Player, Session};
use super::Invariant;

/// Invariant: players alternate turns, starting with X.
///
/// The ledger must read X, O, X, ... and the player to move must follow
/// from it: the next player while in progress, the last mover once the
/// game is over.
pub struct AlternatingTurnInvariant;

impl Invariant<Session> for AlternatingTurnInvariant {
    fn holds(session: &Session) -> bool {
        let alternates = session.ledger().iter().enumerate().all(|(i, mv)| {
            let expected = if i % 2 == 0 {
                Player::First
            } else {
                Player::Second
            };
            mv.player == expected
        });
        if !alternates {
            return false;
        }

        let expected_to_move = match session.ledger().last() {
            None => Player::First,
            Some(last) if session.is_over() => last.player,
            Some(last) => last.player.opponent(),
        };
        session.current_player() == expected_to_move
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;

    #[test]
    fn test_empty_session_holds() {
        assert!(AlternatingTurnInvariant::holds(&Session::new()));
    }

    #[test]
    fn test_holds_after_win() {
        let mut session = Session::new();
        for index in [0, 3, 1, 4, 2] {
            session.submit_move(index).unwrap();
        }
        assert!(session.is_over());
        assert!(AlternatingTurnInvariant::holds(&session));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut session = Session::new();
        session.submit_move(0).unwrap();
        session.ledger.push(Move::new(Player::First, 4));
        session.board.place(4, Player::First).unwrap();
        assert!(!AlternatingTurnInvariant::holds(&session));
    }

    #[test]
    fn test_wrong_player_to_move_violates() {
        let mut session = Session::new();
        session.submit_move(0).unwrap();
        session.current_player = Player::First;
        assert!(!AlternatingTurnInvariant::holds(&session));
    }
}
