//! Word-completion validator: filling a word's vowel gaps with tiles.
//!
//! A [`WordPuzzle`] moves through `Empty -> PartiallyFilled -> AllFilled ->
//! Checked`. There is no way back from `Checked`; a retry needs a new puzzle.

use super::catalog::WordEntry;
use super::events::{GameEvent, GameObserver};
use super::types::{Vowel, normalize_vowel};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A vowel gap in a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VowelSlot {
    expected: Vowel,
    original: char,
    filled: Option<Vowel>,
}

impl VowelSlot {
    /// The normalized vowel the slot expects.
    pub fn expected(&self) -> Vowel {
        self.expected
    }

    /// The character as written in the word, accent and case preserved.
    pub fn original(&self) -> char {
        self.original
    }

    /// The vowel placed in the slot, if any.
    pub fn filled(&self) -> Option<Vowel> {
        self.filled
    }

    /// True once a vowel has been placed.
    pub fn is_filled(&self) -> bool {
        self.filled.is_some()
    }

    /// True when the placed vowel is the expected one.
    pub fn is_correct(&self) -> bool {
        self.filled == Some(self.expected)
    }
}

/// One character position of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordPart {
    /// A letter shown as-is.
    Letter(char),
    /// A vowel gap.
    Slot(VowelSlot),
}

/// A draggable vowel for the completion game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTile {
    vowel: Vowel,
    consumed: bool,
}

impl WordTile {
    /// The vowel on the tile.
    pub fn vowel(&self) -> Vowel {
        self.vowel
    }

    /// True once the tile has been placed in a slot.
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}

/// Lifecycle of a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PuzzlePhase {
    /// No slot filled.
    Empty,
    /// Some but not all slots filled.
    PartiallyFilled,
    /// Every slot filled, not yet checked.
    AllFilled,
    /// Checked; the verdict is final.
    Checked {
        /// True when every slot held its expected vowel.
        correct: bool,
    },
}

/// Per-slot marking shown after a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotMark {
    /// Holds the expected vowel.
    Correct,
    /// Holds another vowel.
    Wrong,
    /// Still empty.
    Empty,
}

/// Error that can occur when filling a slot.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum FillError {
    /// No slot exists at this index.
    #[display("No slot at index {}", _0)]
    UnknownSlot(usize),

    /// The slot already holds a vowel.
    #[display("Slot {} is already filled", _0)]
    SlotFilled(usize),

    /// The character is not a vowel.
    #[display("'{}' is not a vowel", _0)]
    NotAVowel(char),

    /// No unused tile carries this vowel.
    #[display("No tile left for vowel {}", _0)]
    NoTileAvailable(Vowel),

    /// The puzzle was already checked.
    #[display("Puzzle has already been checked")]
    AlreadyChecked,
}

impl std::error::Error for FillError {}

/// A word with its vowels removed, and the tiles to put them back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPuzzle {
    word: String,
    glyph: String,
    parts: Vec<WordPart>,
    tiles: Vec<WordTile>,
    phase: PuzzlePhase,
}

impl WordPuzzle {
    /// Builds a puzzle for a word, shuffling its tiles with `rng`.
    ///
    /// Tiles are the full multiset of the word's vowels: `OSO` yields two
    /// `O` tiles.
    #[instrument(skip(rng))]
    pub fn new<R: Rng + ?Sized>(word: &str, glyph: &str, rng: &mut R) -> Self {
        let mut puzzle = Self::unshuffled(word, glyph);
        puzzle.tiles.shuffle(rng);
        puzzle
    }

    /// Builds a puzzle for a catalog entry.
    pub fn from_entry<R: Rng + ?Sized>(entry: &WordEntry, rng: &mut R) -> Self {
        Self::new(entry.word(), entry.glyph(), rng)
    }

    /// Builds a puzzle whose tiles are in reading order.
    #[instrument]
    pub fn unshuffled(word: &str, glyph: &str) -> Self {
        let parts = word
            .chars()
            .map(|c| match normalize_vowel(c) {
                Some(expected) => WordPart::Slot(VowelSlot {
                    expected,
                    original: c,
                    filled: None,
                }),
                None => WordPart::Letter(c),
            })
            .collect::<Vec<_>>();
        let tiles = parts
            .iter()
            .filter_map(|p| match p {
                WordPart::Slot(slot) => Some(WordTile {
                    vowel: slot.expected,
                    consumed: false,
                }),
                WordPart::Letter(_) => None,
            })
            .collect::<Vec<_>>();
        debug!(slots = tiles.len(), "Built word puzzle");
        Self {
            word: word.to_string(),
            glyph: glyph.to_string(),
            parts,
            tiles,
            phase: PuzzlePhase::Empty,
        }
    }

    /// Places a vowel character in a slot.
    ///
    /// Accented input is normalized (`Á` counts as `A`). The first unused
    /// tile for that vowel is consumed. A filled slot never accepts another
    /// vowel. When the last slot is filled, [`GameEvent::WordAllFilled`] is
    /// delivered once.
    #[instrument(skip(self, observer), fields(word = %self.word))]
    pub fn fill(
        &mut self,
        slot: usize,
        input: char,
        observer: &mut impl GameObserver,
    ) -> Result<PuzzlePhase, FillError> {
        if matches!(self.phase, PuzzlePhase::Checked { .. }) {
            warn!("Fill after check");
            return Err(FillError::AlreadyChecked);
        }
        let vowel = normalize_vowel(input).ok_or(FillError::NotAVowel(input))?;

        let target = self
            .slot_position(slot)
            .ok_or(FillError::UnknownSlot(slot))?;
        if matches!(&self.parts[target], WordPart::Slot(s) if s.is_filled()) {
            debug!(slot, "Slot already filled");
            return Err(FillError::SlotFilled(slot));
        }

        let tile = self
            .tiles
            .iter_mut()
            .find(|t| t.vowel == vowel && !t.consumed)
            .ok_or(FillError::NoTileAvailable(vowel))?;
        tile.consumed = true;

        if let WordPart::Slot(s) = &mut self.parts[target] {
            s.filled = Some(vowel);
        }

        let was_all_filled = self.phase == PuzzlePhase::AllFilled;
        self.phase = if self.is_complete() {
            PuzzlePhase::AllFilled
        } else {
            PuzzlePhase::PartiallyFilled
        };
        debug!(slot, %vowel, phase = ?self.phase, "Slot filled");

        if self.phase == PuzzlePhase::AllFilled && !was_all_filled {
            info!("Every slot filled");
            observer.notify(&GameEvent::WordAllFilled);
        }
        Ok(self.phase)
    }

    /// True when every slot holds a vowel, right or wrong.
    pub fn is_complete(&self) -> bool {
        self.slots().all(VowelSlot::is_filled)
    }

    /// Checks the answer and fixes the verdict.
    ///
    /// True only if every slot holds its expected vowel; an empty slot
    /// counts as wrong. [`GameEvent::WordChecked`] is delivered on the first
    /// check; later calls return the same verdict silently.
    #[instrument(skip(self, observer), fields(word = %self.word))]
    pub fn check_answer(&mut self, observer: &mut impl GameObserver) -> bool {
        if let PuzzlePhase::Checked { correct } = self.phase {
            debug!(correct, "Puzzle already checked");
            return correct;
        }
        if !self.is_complete() {
            warn!("Checking an incomplete word");
        }
        let correct = self.slots().all(VowelSlot::is_correct);
        self.phase = PuzzlePhase::Checked { correct };
        info!(correct, "Word checked");
        observer.notify(&GameEvent::WordChecked { correct });
        correct
    }

    /// Per-slot marks for visual feedback.
    pub fn slot_marks(&self) -> Vec<SlotMark> {
        self.slots()
            .map(|s| match s.filled {
                None => SlotMark::Empty,
                Some(v) if v == s.expected => SlotMark::Correct,
                Some(_) => SlotMark::Wrong,
            })
            .collect()
    }

    /// The word as given.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The picture.
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Letters and slots in reading order.
    pub fn parts(&self) -> &[WordPart] {
        &self.parts
    }

    /// Slots in reading order.
    pub fn slots(&self) -> impl Iterator<Item = &VowelSlot> + '_ {
        self.parts.iter().filter_map(|p| match p {
            WordPart::Slot(s) => Some(s),
            WordPart::Letter(_) => None,
        })
    }

    /// Number of slots.
    pub fn slot_count(&self) -> usize {
        self.slots().count()
    }

    /// All tiles in presentation order.
    pub fn tiles(&self) -> &[WordTile] {
        &self.tiles
    }

    /// Vowels of the tiles not yet placed, in presentation order.
    pub fn available_tiles(&self) -> Vec<Vowel> {
        self.tiles
            .iter()
            .filter(|t| !t.consumed)
            .map(|t| t.vowel)
            .collect()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> PuzzlePhase {
        self.phase
    }

    fn slot_position(&self, slot: usize) -> Option<usize> {
        self.parts
            .iter()
            .enumerate()
            .filter(|(_, p)| matches!(p, WordPart::Slot(_)))
            .nth(slot)
            .map(|(i, _)| i)
    }
}
