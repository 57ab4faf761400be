//! Status invariant: the recorded status is what the board says.

use super::super::Session;
use super::Invariant;

/// Invariant: the session status equals a fresh evaluation of its board.
pub struct StatusMatchesBoardInvariant;

impl Invariant<Session> for StatusMatchesBoardInvariant {
    fn holds(session: &Session) -> bool {
        session.status() == session.board().evaluate()
    }

    fn description() -> &'static str {
        "Session status matches board evaluation"
    }
}
