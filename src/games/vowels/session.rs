//! Game state machine for the matching game.
//!
//! A [`GameSession`] tracks the current level, the score and how many pairs
//! of the current level are matched. It is mutated only by
//! [`GameSession::record_correct_match`], [`GameSession::advance_level`] and
//! [`GameSession::reset`].

use super::catalog::{Catalog, Level, POINTS_PER_CORRECT};
use super::contracts::{AdvanceLevel, AdvanceLevelContract, Contract, RecordMatch, RecordMatchContract};
use super::events::{GameEvent, GameObserver, LevelCompleted};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Internal phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Created but never reset.
    NotStarted,
    /// Accepting matches for the current level.
    InLevel,
    /// Every pair of the current level is matched.
    LevelComplete,
}

/// Externally visible state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// No play-through has begun.
    NotStarted,
    /// Playing the level at this 0-based index.
    InLevel(usize),
    /// The level at this 0-based index is complete and another follows.
    LevelComplete(usize),
    /// The final level is complete.
    AllLevelsComplete,
}

/// Result of [`GameSession::advance_level`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelAdvance {
    /// Moved to the level with this 1-based number.
    Advanced(u32),
    /// Already on the last level; nothing changed.
    NoFurtherLevel,
}

impl LevelAdvance {
    /// Returns true if a new level was entered.
    pub fn is_advanced(&self) -> bool {
        matches!(self, LevelAdvance::Advanced(_))
    }
}

/// Error returned when a transition is invoked outside its valid state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The session has not been reset into its first level yet.
    #[display("Session has not started")]
    NotStarted,

    /// A match was recorded while no level is being played.
    #[display("No active level to record a match in")]
    NoActiveLevel,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for SessionError {}

/// One play-through of the matching game.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(super) catalog: Arc<Catalog>,
    pub(super) points_per_correct: u32,
    pub(super) phase: Phase,
    pub(super) level_index: usize,
    pub(super) score: u32,
    pub(super) matched_in_level: usize,
    pub(super) total_correct: u32,
    pub(super) generation: u64,
}

impl GameSession {
    /// Creates a session that awards the default points per match.
    #[instrument(skip(catalog))]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_points(catalog, POINTS_PER_CORRECT)
    }

    /// Creates a session with a custom point value per correct match.
    #[instrument(skip(catalog))]
    pub fn with_points(catalog: Arc<Catalog>, points_per_correct: u32) -> Self {
        debug!(levels = catalog.total_levels(), "Creating game session");
        Self {
            catalog,
            points_per_correct,
            phase: Phase::NotStarted,
            level_index: 0,
            score: 0,
            matched_in_level: 0,
            total_correct: 0,
            generation: 0,
        }
    }

    /// Starts (or restarts) the play-through at the first level with no score.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting session to level 1");
        self.phase = Phase::InLevel;
        self.level_index = 0;
        self.score = 0;
        self.matched_in_level = 0;
        self.total_correct = 0;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Records one validated correct match in the current level.
    ///
    /// When the match completes the level, a [`GameEvent::LevelComplete`] is
    /// delivered to `observer` and the same summary is returned.
    ///
    /// Outside a level nothing changes and an error is returned.
    #[instrument(skip(self, observer), fields(level = self.level_index, matched = self.matched_in_level))]
    pub fn record_correct_match(
        &mut self,
        observer: &mut impl GameObserver,
    ) -> Result<Option<LevelCompleted>, SessionError> {
        if let Err(e) = RecordMatchContract::pre(self, &RecordMatch) {
            warn!(error = %e, "Ignoring match outside an active level");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        // Saturates at u32::MAX.
        self.score = self.score.saturating_add(self.points_per_correct);
        self.total_correct = self.total_correct.saturating_add(1);
        self.matched_in_level += 1;

        let completed = if self.matched_in_level >= self.level_pair_count() {
            self.phase = Phase::LevelComplete;
            let summary = LevelCompleted {
                level_number: self.level_number_unchecked(),
                score: self.score,
                is_last_level: self.is_last_level(),
            };
            info!(
                level_number = summary.level_number,
                score = summary.score,
                is_last_level = summary.is_last_level,
                "Level complete"
            );
            Some(summary)
        } else {
            None
        };

        #[cfg(debug_assertions)]
        RecordMatchContract::post(&before, self)?;

        if let Some(summary) = completed {
            observer.notify(&GameEvent::LevelComplete(summary));
        }
        Ok(completed)
    }

    /// Moves to the next level, if there is one.
    ///
    /// On the last level nothing changes and [`LevelAdvance::NoFurtherLevel`]
    /// is returned; callers must not render a new level in that case.
    #[instrument(skip(self), fields(level = self.level_index))]
    pub fn advance_level(&mut self) -> Result<LevelAdvance, SessionError> {
        if let Err(e) = AdvanceLevelContract::pre(self, &AdvanceLevel) {
            warn!(error = %e, "Ignoring level advance before start");
            return Err(e);
        }

        if self.is_last_level() {
            debug!("No level after the last one");
            return Ok(LevelAdvance::NoFurtherLevel);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.level_index += 1;
        self.matched_in_level = 0;
        self.phase = Phase::InLevel;

        #[cfg(debug_assertions)]
        AdvanceLevelContract::post(&before, self)?;

        let number = self.level_number_unchecked();
        info!(level_number = number, "Advanced to next level");
        Ok(LevelAdvance::Advanced(number))
    }

    /// Returns the externally visible state.
    pub fn state(&self) -> SessionState {
        match self.phase {
            Phase::NotStarted => SessionState::NotStarted,
            Phase::InLevel => SessionState::InLevel(self.level_index),
            Phase::LevelComplete if self.is_last_level() => SessionState::AllLevelsComplete,
            Phase::LevelComplete => SessionState::LevelComplete(self.level_index),
        }
    }

    /// Returns the internal phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The level being played, or `None` before the session starts.
    pub fn current_level(&self) -> Option<&Level> {
        match self.phase {
            Phase::NotStarted => None,
            Phase::InLevel | Phase::LevelComplete => self.catalog.level(self.level_index),
        }
    }

    /// 1-based number of the current level, or `None` before the session starts.
    pub fn level_number(&self) -> Option<u32> {
        self.current_level().map(|_| self.level_number_unchecked())
    }

    /// 0-based index of the current level.
    pub fn level_index(&self) -> usize {
        self.level_index
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Pairs matched in the current level.
    pub fn matched_in_level(&self) -> usize {
        self.matched_in_level
    }

    /// Correct matches recorded since the last reset.
    pub fn total_correct(&self) -> u32 {
        self.total_correct
    }

    /// Play-through counter, bumped by every [`GameSession::reset`].
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Points awarded per correct match.
    pub fn points_per_correct(&self) -> u32 {
        self.points_per_correct
    }

    /// Number of levels in the catalog.
    pub fn total_levels(&self) -> usize {
        self.catalog.total_levels()
    }

    /// True when the current level is the final one.
    pub fn is_last_level(&self) -> bool {
        self.level_index + 1 >= self.catalog.total_levels()
    }

    /// The catalog this session plays through.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub(super) fn level_pair_count(&self) -> usize {
        self.catalog
            .level(self.level_index)
            .map(Level::pair_count)
            .unwrap_or(0)
    }

    fn level_number_unchecked(&self) -> u32 {
        u32::try_from(self.level_index + 1).unwrap_or(u32::MAX)
    }
}
