//! First-class invariants for tic-tac-toe sessions.
//!
//! Invariants are logical properties that must hold after every session
//! transition. They are testable independently and checked in debug builds.

use super::session::Session;
use derive_more::{Display, Error};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_turn;
pub mod ledger_consistent;
pub mod mark_balance;
pub mod status_matches_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use ledger_consistent::LedgerConsistentInvariant;
pub use mark_balance::MarkBalanceInvariant;
pub use status_matches_board::StatusMatchesBoardInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (
    LedgerConsistentInvariant,
    MarkBalanceInvariant,
    AlternatingTurnInvariant,
    StatusMatchesBoardInvariant,
);

/// Asserts that all session invariants hold (panics on violation in debug builds).
pub(crate) fn assert_invariants(session: &Session) {
    if cfg!(debug_assertions)
        && let Err(violations) = SessionInvariants::check_all(session)
    {
        for violation in &violations {
            warn!(invariant = %violation.description, "Session invariant violated");
        }
        panic!("Session invariants violated: {:?}", violations);
    }
}
