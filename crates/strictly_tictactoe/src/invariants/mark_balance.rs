//! Mark balance invariant: X never trails O and leads by at most one.

use super::super::{Player, Session};
use super::Invariant;
use tracing::warn;

/// Invariant: X's mark count minus O's mark count is 0 or 1.
///
/// Holds on every board reached by alternating play from an empty board.
pub struct MarkBalanceInvariant;

impl Invariant<Session> for MarkBalanceInvariant {
    fn holds(session: &Session) -> bool {
        let x_count = session.board().count(Player::First);
        let o_count = session.board().count(Player::Second);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X has the same number of marks as O, or one more"
    }
}
