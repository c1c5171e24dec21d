//! Bounded progress invariants: the level index and matched count stay in range.

use super::super::GameSession;
use super::Invariant;

/// Invariant: the level index points at a catalog level.
pub struct LevelInBoundsInvariant;

impl Invariant<GameSession> for LevelInBoundsInvariant {
    fn holds(session: &GameSession) -> bool {
        session.level_index() < session.total_levels()
    }

    fn description() -> &'static str {
        "Level index is within the catalog"
    }
}

/// Invariant: matched pairs never exceed the current level's pair count.
pub struct MatchedWithinLevelInvariant;

impl Invariant<GameSession> for MatchedWithinLevelInvariant {
    fn holds(session: &GameSession) -> bool {
        session.matched_in_level() <= session.level_pair_count()
    }

    fn description() -> &'static str {
        "Matched pairs never exceed the level's pair count"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::vowels::Catalog;
    use std::sync::Arc;

    #[test]
    fn test_fresh_session_holds() {
        let session = GameSession::new(Arc::new(Catalog::builtin()));
        assert!(LevelInBoundsInvariant::holds(&session));
        assert!(MatchedWithinLevelInvariant::holds(&session));
    }

    #[test]
    fn test_completed_level_holds_at_the_limit() {
        let mut session = GameSession::new(Arc::new(Catalog::builtin()));
        session.reset();
        for _ in 0..5 {
            session.record_correct_match(&mut ()).unwrap();
        }
        assert_eq!(session.matched_in_level(), 5);
        assert!(MatchedWithinLevelInvariant::holds(&session));
    }

    #[test]
    fn test_out_of_range_index_violates() {
        let mut session = GameSession::new(Arc::new(Catalog::builtin()));
        session.reset();
        session.level_index = 3;
        assert!(!LevelInBoundsInvariant::holds(&session));
        // No level at that index means no pairs either.
        session.matched_in_level = 1;
        assert!(!MatchedWithinLevelInvariant::holds(&session));
    }
}
