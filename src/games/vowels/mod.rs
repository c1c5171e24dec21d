//! Vowel recognition games: picture matching and word completion.

mod catalog;
mod completion;
mod contracts;
mod events;
mod invariants;
mod matching;
mod rounds;
mod session;
mod types;

pub use catalog::{Catalog, CatalogError, Level, POINTS_PER_CORRECT, Pair, WordEntry};
pub use completion::{FillError, PuzzlePhase, SlotMark, VowelSlot, WordPart, WordPuzzle, WordTile};
pub use contracts::{
    AdvanceLevel, AdvanceLevelContract, Contract, LevelActive, RecordMatch, RecordMatchContract,
    SessionStarted,
};
pub use events::{GameEvent, GameObserver, LevelCompleted};
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, LevelInBoundsInvariant,
    MatchedWithinLevelInvariant, PhaseConsistentInvariant, ScoreConsistentInvariant,
    SessionInvariants,
};
pub use matching::{
    BoardStamp, DropError, DropOutcome, DropZone, MatchBoard, MatchTile, is_match,
};
pub use rounds::{CompletionRound, WordAdvance};
pub use session::{GameSession, LevelAdvance, Phase, SessionError, SessionState};
pub use types::{Vowel, is_vowel, normalize_vowel, word_vowels};
