//! First-class invariants for game sessions.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are testable independently and document the session's guarantees.

#[cfg(kani)]
mod verification;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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
/// Implementations are provided for tuples of two to four invariants.
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

pub mod bounded_progress;
pub mod phase_consistent;
pub mod score_consistent;

pub use bounded_progress::{LevelInBoundsInvariant, MatchedWithinLevelInvariant};
pub use phase_consistent::PhaseConsistentInvariant;
pub use score_consistent::ScoreConsistentInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (
    LevelInBoundsInvariant,
    MatchedWithinLevelInvariant,
    ScoreConsistentInvariant,
    PhaseConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::vowels::{Catalog, GameSession};
    use std::sync::Arc;

    fn session() -> GameSession {
        GameSession::new(Arc::new(Catalog::builtin()))
    }

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        assert!(SessionInvariants::check_all(&session()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_through_a_play_through() {
        let mut session = session();
        session.reset();
        for _ in 0..3 {
            for _ in 0..5 {
                session.record_correct_match(&mut ()).unwrap();
                assert!(SessionInvariants::check_all(&session).is_ok());
            }
            session.advance_level().unwrap();
            assert!(SessionInvariants::check_all(&session).is_ok());
        }
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut session = session();
        session.reset();
        session.matched_in_level = 9;
        session.score = 7;

        let violations = SessionInvariants::check_all(&session).unwrap_err();
        // Matched overflow also breaks phase consistency.
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (LevelInBoundsInvariant, ScoreConsistentInvariant);
        assert!(TwoInvariants::check_all(&session()).is_ok());
    }
}
