//! Strictly Vowels library - vowel recognition games with checked state machines
//!
//! Two games for children learning their vowels:
//!
//! - **Matching**: drag each vowel onto the picture whose word starts with it.
//!   A [`GameSession`] tracks level, score and matched pairs; a
//!   [`MatchBoard`] validates each drop.
//! - **Completion**: fill the vowel gaps of a word. A [`WordPuzzle`] validates
//!   each placement and the final answer; a [`CompletionRound`] runs a shuffled
//!   list of words.
//!
//! Presentation (sounds, animation, speech) is decoupled through
//! [`GameObserver`]: operations deliver [`GameEvent`]s to an injected observer.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use strictly_vowels::{Catalog, DropOutcome, GameSession, MatchBoard, Vowel};
//!
//! let mut session = GameSession::new(Arc::new(Catalog::builtin()));
//! session.reset();
//! let mut board = MatchBoard::for_session(&session).unwrap();
//!
//! let mut events = Vec::new();
//! let outcome = board.drop_tile(&mut session, Vowel::A, 0, &mut events).unwrap();
//! assert!(matches!(outcome, DropOutcome::Correct { .. }));
//! assert_eq!(session.score(), 10);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Terminal front end
pub use console::{ConsolePresenter, PlayEnd, play_completion, play_matching, render_word};

// Crate-level exports - Game types
pub use games::vowels::*;
