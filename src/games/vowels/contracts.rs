//! Contract-based validation for session transitions.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(state, action)} transition {Q(before, after)}.

use super::invariants::{InvariantSet, SessionInvariants};
use super::session::{GameSession, Phase, SessionError};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), SessionError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), SessionError>;
}

// ─────────────────────────────────────────────────────────────
//  Actions
// ─────────────────────────────────────────────────────────────

/// Action: record one correct match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordMatch;

/// Action: move on to the next level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceLevel;

// ─────────────────────────────────────────────────────────────
//  Session Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the session has been started.
pub struct SessionStarted;

impl SessionStarted {
    /// Checks that the session has left `NotStarted`.
    #[instrument(skip(session))]
    pub fn check(session: &GameSession) -> Result<(), SessionError> {
        if session.phase() == Phase::NotStarted {
            Err(SessionError::NotStarted)
        } else {
            Ok(())
        }
    }
}

/// Precondition: a level is being played.
pub struct LevelActive;

impl LevelActive {
    /// Checks that the session is accepting matches for its current level.
    #[instrument(skip(session))]
    pub fn check(session: &GameSession) -> Result<(), SessionError> {
        SessionStarted::check(session)?;
        if session.phase() != Phase::InLevel {
            Err(SessionError::NoActiveLevel)
        } else {
            Ok(())
        }
    }
}

fn invariants_hold(session: &GameSession) -> Result<(), SessionError> {
    SessionInvariants::check_all(session).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        SessionError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}

// ─────────────────────────────────────────────────────────────
//  Record Match Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for recording a match.
///
/// Preconditions:
/// - A level is active
///
/// Postconditions:
/// - Score grew by exactly the point value, saturating at `u32::MAX`
/// - Matched count grew by exactly one, on the same level and play-through
/// - Session invariants hold
pub struct RecordMatchContract;

impl Contract<GameSession, RecordMatch> for RecordMatchContract {
    fn pre(session: &GameSession, _action: &RecordMatch) -> Result<(), SessionError> {
        LevelActive::check(session)
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), SessionError> {
        if after.score() != before.score().saturating_add(before.points_per_correct()) {
            warn!(before = before.score(), after = after.score(), "Score delta wrong");
            return Err(SessionError::InvariantViolation(
                "Score must grow by the point value".to_string(),
            ));
        }
        if after.matched_in_level() != before.matched_in_level() + 1
            || after.level_index() != before.level_index()
            || after.generation() != before.generation()
        {
            warn!("Matched count delta wrong");
            return Err(SessionError::InvariantViolation(
                "Matched count must grow by one on the same level".to_string(),
            ));
        }
        invariants_hold(after)
    }
}

// ─────────────────────────────────────────────────────────────
//  Advance Level Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for advancing a level.
///
/// Preconditions:
/// - The session has started
///
/// Postconditions:
/// - Level index grew by exactly one
/// - Matched count is zero and score is untouched
/// - Session invariants hold
pub struct AdvanceLevelContract;

impl Contract<GameSession, AdvanceLevel> for AdvanceLevelContract {
    fn pre(session: &GameSession, _action: &AdvanceLevel) -> Result<(), SessionError> {
        SessionStarted::check(session)
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), SessionError> {
        if after.level_index() != before.level_index() + 1
            || after.matched_in_level() != 0
            || after.score() != before.score()
        {
            warn!(
                before = before.level_index(),
                after = after.level_index(),
                "Level advance postcondition violated"
            );
            return Err(SessionError::InvariantViolation(
                "Advance must move exactly one level and clear matches".to_string(),
            ));
        }
        invariants_hold(after)
    }
}
