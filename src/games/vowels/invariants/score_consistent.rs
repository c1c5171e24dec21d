//! Score consistency invariant: points come only from recorded matches.

use super::super::GameSession;
use super::Invariant;

/// Invariant: score equals the point value times the correct matches recorded,
/// capped at `u32::MAX`.
///
/// Nothing but a validated match adds points, so any other score means a
/// transition mutated it behind the session's back.
pub struct ScoreConsistentInvariant;

impl Invariant<GameSession> for ScoreConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let earned = u64::from(session.points_per_correct()) * u64::from(session.total_correct());
        u64::from(session.score()) == earned.min(u64::from(u32::MAX))
    }

    fn description() -> &'static str {
        "Score equals points per correct match times matches recorded"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::vowels::Catalog;
    use std::sync::Arc;

    #[test]
    fn test_score_tracks_matches() {
        let mut session = GameSession::new(Arc::new(Catalog::builtin()));
        session.reset();
        session.record_correct_match(&mut ()).unwrap();
        session.record_correct_match(&mut ()).unwrap();
        assert!(ScoreConsistentInvariant::holds(&session));
        assert_eq!(session.score(), 20);
    }

    #[test]
    fn test_inflated_score_violates() {
        let mut session = GameSession::new(Arc::new(Catalog::builtin()));
        session.reset();
        session.score = 100;
        assert!(!ScoreConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_saturated_score_is_consistent() {
        let mut session = GameSession::with_points(Arc::new(Catalog::builtin()), u32::MAX);
        session.reset();
        session.record_correct_match(&mut ()).unwrap();
        session.record_correct_match(&mut ()).unwrap();
        assert!(ScoreConsistentInvariant::holds(&session));
    }
}
