//! Core domain types for the vowel games.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the five vowels taught by the games.
///
/// The alphabet is closed: every symbol that can be dragged, every
/// drop zone and every word slot is bound to exactly one of these.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Vowel {
    /// The vowel A.
    A,
    /// The vowel E.
    E,
    /// The vowel I.
    I,
    /// The vowel O.
    O,
    /// The vowel U.
    U,
}

impl Vowel {
    /// All five vowels in alphabetical order.
    pub const ALL: [Vowel; 5] = [Vowel::A, Vowel::E, Vowel::I, Vowel::O, Vowel::U];

    /// Returns the uppercase letter for this vowel.
    pub fn letter(self) -> char {
        match self {
            Vowel::A => 'A',
            Vowel::E => 'E',
            Vowel::I => 'I',
            Vowel::O => 'O',
            Vowel::U => 'U',
        }
    }

    /// Parses an unaccented vowel letter, ignoring case.
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Vowel::A),
            'E' => Some(Vowel::E),
            'I' => Some(Vowel::I),
            'O' => Some(Vowel::O),
            'U' => Some(Vowel::U),
            _ => None,
        }
    }

    /// Parses a drag symbol such as `"a"` or `"E"`.
    ///
    /// The symbol must be exactly one unaccented vowel letter. Accented
    /// forms are rejected here; only word completion normalizes them.
    #[instrument]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let mut chars = symbol.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_letter(c),
            _ => None,
        }
    }
}

impl std::fmt::Display for Vowel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Maps a vowel character, accented or not, to its base vowel.
///
/// `á` and `Á` both become [`Vowel::A`]. Returns `None` for consonants
/// and anything outside the vowel set.
pub fn normalize_vowel(c: char) -> Option<Vowel> {
    match c {
        'Á' | 'á' => Some(Vowel::A),
        'É' | 'é' => Some(Vowel::E),
        'Í' | 'í' => Some(Vowel::I),
        'Ó' | 'ó' => Some(Vowel::O),
        'Ú' | 'ú' => Some(Vowel::U),
        other => Vowel::from_letter(other),
    }
}

/// Returns true if the character is a vowel, including accented forms.
pub fn is_vowel(c: char) -> bool {
    normalize_vowel(c).is_some()
}

/// Returns the normalized vowels of a word in reading order.
#[instrument]
pub fn word_vowels(word: &str) -> Vec<Vowel> {
    word.chars().filter_map(normalize_vowel).collect()
}
