//! Formal verification of session invariants using the Kani model checker.
//!
//! These harnesses drive a session through bounded, arbitrary sequences
//! of transitions and prove the invariant set holds after each one.

#[cfg(kani)]
mod proofs {
    use crate::{Catalog, GameSession, InvariantSet, SessionInvariants};
    use std::sync::Arc;

    /// Verify invariants hold for any interleaving of matches and advances.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_session_invariants_bounded() {
        let mut session = GameSession::new(Arc::new(Catalog::builtin()));
        session.reset();

        let steps: u8 = kani::any();
        kani::assume(steps <= 6);

        for _ in 0..steps {
            if kani::any() {
                let _ = session.record_correct_match(&mut ());
            } else {
                let _ = session.advance_level();
            }
            assert!(
                SessionInvariants::check_all(&session).is_ok(),
                "Session invariant violated"
            );
        }
    }

    /// Verify the score never decreases without a reset.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_score_monotonic() {
        let mut session = GameSession::new(Arc::new(Catalog::builtin()));
        session.reset();

        let steps: u8 = kani::any();
        kani::assume(steps <= 6);

        let mut last = session.score();
        for _ in 0..steps {
            if kani::any() {
                let _ = session.record_correct_match(&mut ());
            } else {
                let _ = session.advance_level();
            }
            assert!(session.score() >= last, "Score decreased");
            last = session.score();
        }
    }
}
