//! Domain events emitted by the games and the observer that receives them.
//!
//! The presentation layer (sounds, animation, screen changes) consumes
//! these events; the game logic never calls into it directly.

use super::types::Vowel;
use serde::{Deserialize, Serialize};

/// Summary delivered when every pair of a level has been matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCompleted {
    /// 1-based level number.
    pub level_number: u32,
    /// Session score at the moment of completion.
    pub score: u32,
    /// True when this was the final level of the catalog.
    pub is_last_level: bool,
}

/// Something the presentation layer may want to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A tile was dropped on the zone expecting it.
    CorrectMatch {
        /// The matched vowel.
        vowel: Vowel,
        /// Index of the resolved zone.
        zone: usize,
    },
    /// A tile was dropped on a zone expecting another vowel.
    WrongMatch {
        /// The dropped vowel.
        vowel: Vowel,
        /// Index of the zone it was dropped on.
        zone: usize,
    },
    /// The last pair of a level was matched.
    LevelComplete(LevelCompleted),
    /// Every slot of the current word holds a vowel.
    WordAllFilled,
    /// The current word was checked.
    WordChecked {
        /// True when every slot holds its expected vowel.
        correct: bool,
    },
}

/// Receiver for [`GameEvent`]s.
///
/// Each event is delivered exactly once, synchronously, from inside the
/// operation that produced it.
pub trait GameObserver {
    /// Handles one event.
    fn notify(&mut self, event: &GameEvent);
}

/// No presentation attached.
impl GameObserver for () {
    fn notify(&mut self, _event: &GameEvent) {}
}

/// Records events in order.
impl GameObserver for Vec<GameEvent> {
    fn notify(&mut self, event: &GameEvent) {
        self.push(*event);
    }
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn notify(&mut self, event: &GameEvent) {
        self(event)
    }
}
