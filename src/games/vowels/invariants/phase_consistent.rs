//! Phase consistency invariant: the phase agrees with the matched count.

use super::super::{GameSession, Phase};
use super::Invariant;

/// Invariant: a level is complete exactly when all of its pairs are matched.
///
/// - `NotStarted` has no progress at all
/// - `InLevel` has fewer matches than pairs
/// - `LevelComplete` has as many matches as pairs
pub struct PhaseConsistentInvariant;

impl Invariant<GameSession> for PhaseConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let pairs = session.level_pair_count();
        match session.phase() {
            Phase::NotStarted => {
                session.matched_in_level() == 0 && session.score() == 0 && session.level_index() == 0
            }
            Phase::InLevel => session.matched_in_level() < pairs,
            Phase::LevelComplete => session.matched_in_level() == pairs,
        }
    }

    fn description() -> &'static str {
        "Level is complete exactly when every pair is matched"
    }
}
