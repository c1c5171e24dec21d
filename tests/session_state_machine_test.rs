//! Tests for the matching game's session state machine.

use std::sync::Arc;
use strictly_vowels::{
    Catalog, GameEvent, GameSession, InvariantSet, LevelAdvance, LevelCompleted, SessionError,
    SessionInvariants, SessionState,
};

fn started() -> GameSession {
    let mut session = GameSession::new(Arc::new(Catalog::builtin()));
    session.reset();
    session
}

fn level_complete_events(events: &[GameEvent]) -> Vec<LevelCompleted> {
    events
        .iter()
        .filter_map(|e| match e {
            GameEvent::LevelComplete(summary) => Some(*summary),
            _ => None,
        })
        .collect()
}

#[test]
fn test_full_level_emits_exactly_one_completion() {
    let mut session = started();
    let mut events = Vec::new();
    let pairs = session.current_level().unwrap().pair_count();

    for _ in 0..pairs {
        session.record_correct_match(&mut events).unwrap();
    }

    assert_eq!(level_complete_events(&events).len(), 1);
    assert_eq!(session.score(), pairs as u32 * 10);
}

#[test]
fn test_first_level_scenario() {
    let mut session = started();
    let mut events = Vec::new();

    for _ in 0..5 {
        session.record_correct_match(&mut events).unwrap();
    }

    assert_eq!(
        level_complete_events(&events),
        vec![LevelCompleted {
            level_number: 1,
            score: 50,
            is_last_level: false,
        }]
    );
    assert_eq!(session.state(), SessionState::LevelComplete(0));

    let advance = session.advance_level().unwrap();
    assert!(advance.is_advanced());
    assert_eq!(advance, LevelAdvance::Advanced(2));
    assert_eq!(session.level_index(), 1);
    assert_eq!(session.matched_in_level(), 0);
    assert_eq!(session.state(), SessionState::InLevel(1));
}

#[test]
fn test_last_level_scenario() {
    let mut session = started();
    session.advance_level().unwrap();
    session.advance_level().unwrap();
    assert_eq!(session.level_index(), 2);

    let mut events = Vec::new();
    for _ in 0..5 {
        session.record_correct_match(&mut events).unwrap();
    }
    let completions = level_complete_events(&events);
    assert_eq!(completions.len(), 1);
    assert!(completions[0].is_last_level);
    assert_eq!(completions[0].level_number, 3);

    let score = session.score();
    let matched = session.matched_in_level();
    assert_eq!(session.advance_level(), Ok(LevelAdvance::NoFurtherLevel));
    assert_eq!(session.level_index(), 2);
    assert_eq!(session.score(), score);
    assert_eq!(session.matched_in_level(), matched);
    assert_eq!(session.state(), SessionState::AllLevelsComplete);
}

#[test]
fn test_whole_play_through_score() {
    let mut session = started();
    let mut events = Vec::new();
    loop {
        for _ in 0..5 {
            session.record_correct_match(&mut events).unwrap();
        }
        if !session.advance_level().unwrap().is_advanced() {
            break;
        }
    }
    assert_eq!(session.score(), 150);
    let completions = level_complete_events(&events);
    assert_eq!(
        completions.iter().map(|c| c.level_number).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(
        completions.iter().map(|c| c.score).collect::<Vec<_>>(),
        vec![50, 100, 150]
    );
    assert!(SessionInvariants::check_all(&session).is_ok());
}

#[test]
fn test_record_outside_level_is_guarded() {
    let mut session = GameSession::new(Arc::new(Catalog::builtin()));
    assert_eq!(
        session.record_correct_match(&mut ()),
        Err(SessionError::NotStarted)
    );

    let mut session = started();
    for _ in 0..5 {
        session.record_correct_match(&mut ()).unwrap();
    }
    let mut events = Vec::new();
    assert_eq!(
        session.record_correct_match(&mut events),
        Err(SessionError::NoActiveLevel)
    );
    assert!(events.is_empty());
    assert_eq!(session.score(), 50);
}

#[test]
fn test_independent_sessions_share_a_catalog() {
    let catalog = Arc::new(Catalog::builtin());
    let mut a = GameSession::new(catalog.clone());
    let mut b = GameSession::new(catalog);
    a.reset();
    b.reset();
    a.record_correct_match(&mut ()).unwrap();
    assert_eq!(a.score(), 10);
    assert_eq!(b.score(), 0);
}

#[test]
fn test_closure_observer_receives_completion() {
    let mut session = started();
    let mut seen = 0;
    {
        let mut observer = |event: &GameEvent| {
            if matches!(event, GameEvent::LevelComplete(_)) {
                seen += 1;
            }
        };
        for _ in 0..5 {
            session.record_correct_match(&mut observer).unwrap();
        }
    }
    assert_eq!(seen, 1);
}
