//! Content catalog: levels, word list and guide narration.
//!
//! The catalog is read-only data. Sessions and rounds borrow it through an
//! `Arc` and never mutate it.

use super::types::{Vowel, word_vowels};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Points awarded for each correct match or correctly completed word.
pub const POINTS_PER_CORRECT: u32 = 10;

/// An association between a vowel and the picture/word that starts with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Pair {
    vowel: Vowel,
    #[new(into)]
    word: String,
    #[new(into)]
    glyph: String,
}

impl Pair {
    /// The vowel a tile must carry to resolve this pair.
    pub fn vowel(&self) -> Vowel {
        self.vowel
    }

    /// The word shown under the picture.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The picture (an emoji) shown in the drop zone.
    pub fn glyph(&self) -> &str {
        &self.glyph
    }
}

/// An ordered set of pairs played together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Level {
    id: u32,
    #[new(into)]
    name: String,
    pairs: Vec<Pair>,
}

impl Level {
    /// The level identifier as listed in the catalog.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Display name, e.g. "Nivel 1".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pairs in presentation order.
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Number of matches needed to complete the level.
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Distinct vowels of the level, first occurrence order.
    ///
    /// Draggable tiles are built from this list, so a level with two
    /// pairs for the same vowel still shows a single tile for it.
    #[instrument(skip(self), fields(level = self.id))]
    pub fn distinct_vowels(&self) -> Vec<Vowel> {
        let mut seen = Vec::with_capacity(self.pairs.len());
        for pair in &self.pairs {
            if !seen.contains(&pair.vowel) {
                seen.push(pair.vowel);
            }
        }
        seen
    }
}

/// A word for the completion game, with its picture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct WordEntry {
    #[new(into)]
    word: String,
    #[new(into)]
    glyph: String,
}

impl WordEntry {
    /// The word as displayed.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The picture shown next to the word.
    pub fn glyph(&self) -> &str {
        &self.glyph
    }
}

/// All static game content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    guide_steps: Vec<String>,
    levels: Vec<Level>,
    words: Vec<WordEntry>,
}

impl Catalog {
    /// Builds a catalog from parts and validates it.
    #[instrument(skip_all)]
    pub fn new(
        levels: Vec<Level>,
        words: Vec<WordEntry>,
        guide_steps: Vec<String>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            guide_steps,
            levels,
            words,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The content shipped with the game.
    #[instrument]
    pub fn builtin() -> Self {
        let level = |id: u32, pairs: [(Vowel, &str, &str); 5]| {
            Level::new(
                id,
                format!("Nivel {}", id),
                pairs
                    .into_iter()
                    .map(|(vowel, glyph, word)| Pair::new(vowel, word, glyph))
                    .collect(),
            )
        };

        let levels = vec![
            level(
                1,
                [
                    (Vowel::A, "🕷️", "Araña"),
                    (Vowel::E, "🐘", "Elefante"),
                    (Vowel::I, "🦎", "Iguana"),
                    (Vowel::O, "🐻", "Oso"),
                    (Vowel::U, "🍇", "Uvas"),
                ],
            ),
            level(
                2,
                [
                    (Vowel::A, "✈️", "Avión"),
                    (Vowel::E, "⭐", "Estrella"),
                    (Vowel::I, "🏝️", "Isla"),
                    (Vowel::O, "🐑", "Oveja"),
                    (Vowel::U, "🦄", "Unicornio"),
                ],
            ),
            level(
                3,
                [
                    (Vowel::A, "🌳", "Árbol"),
                    (Vowel::E, "🦔", "Erizo"),
                    (Vowel::I, "🧲", "Imán"),
                    (Vowel::O, "👂", "Oreja"),
                    (Vowel::U, "🌌", "Universo"),
                ],
            ),
        ];

        let words = [
            ("ELEFANTE", "🐘"),
            ("OSO", "🐻"),
            ("UVA", "🍇"),
            ("AVION", "✈️"),
            ("CASA", "🏠"),
            ("SOL", "☀️"),
            ("LUNA", "🌙"),
            ("PELOTA", "⚽"),
            ("MANZANA", "🍎"),
            ("IGUANA", "🦎"),
            ("OVEJA", "🐑"),
            ("UNICORNIO", "🦄"),
            ("ARBOL", "🌳"),
            ("AGUA", "💧"),
            ("ESTRELLA", "⭐"),
        ]
        .into_iter()
        .map(|(word, glyph)| WordEntry::new(word, glyph))
        .collect();

        let guide_steps = [
            "Paso 1. Mira las imágenes que aparecen. Cada una tiene una palabra debajo.",
            "Paso 2. Arrastra cada vocal: A, E, I, O, U, hacia la imagen que comienza con esa letra.",
            "Paso 3. Cuando aciertes, escucharás un sonido y ganarás puntos.",
            "Paso 4. Completa todas las parejas para pasar al siguiente nivel. ¡Diviértete!",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        Self {
            guide_steps,
            levels,
            words,
        }
    }

    /// Parses and validates a catalog from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let catalog: Self = toml::from_str(content)
            .map_err(|e| CatalogError::new(format!("Failed to parse catalog: {}", e)))?;
        catalog.validate()?;
        debug!(
            levels = catalog.levels.len(),
            words = catalog.words.len(),
            "Catalog parsed"
        );
        Ok(catalog)
    }

    /// Loads a catalog from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| CatalogError::new(format!("Failed to read catalog file: {}", e)))?;
        let catalog = Self::from_toml_str(&content)?;
        info!(levels = catalog.levels.len(), "Catalog loaded from file");
        Ok(catalog)
    }

    /// Checks the structural rules every catalog must satisfy.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.levels.is_empty() {
            warn!("Catalog has no levels");
            return Err(CatalogError::new("Catalog must contain at least one level"));
        }
        if let Some(level) = self.levels.iter().find(|l| l.pairs.is_empty()) {
            warn!(level = level.id, "Level has no pairs");
            return Err(CatalogError::new(format!(
                "Level {} has no pairs",
                level.id
            )));
        }
        if self.words.is_empty() {
            warn!("Catalog has no words");
            return Err(CatalogError::new("Catalog must contain at least one word"));
        }
        if let Some(entry) = self.words.iter().find(|w| word_vowels(&w.word).is_empty()) {
            warn!(word = %entry.word, "Word has no vowels");
            return Err(CatalogError::new(format!(
                "Word '{}' has no vowels to complete",
                entry.word
            )));
        }
        Ok(())
    }

    /// Returns the level at a 0-based index.
    pub fn level(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    /// All levels in play order.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Number of levels.
    pub fn total_levels(&self) -> usize {
        self.levels.len()
    }

    /// Words available to the completion game.
    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    /// Narration steps for the spoken guide.
    pub fn guide_steps(&self) -> &[String] {
        &self.guide_steps
    }

    /// Returns one narration step, or `None` past the end.
    pub fn guide_step(&self, index: usize) -> Option<&str> {
        self.guide_steps.get(index).map(String::as_str)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Catalog loading or validation error.
#[derive(Debug, Clone, Display, Error)]
#[display("Catalog error: {} at {}:{}", message, file, line)]
pub struct CatalogError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CatalogError {
    /// Creates a new catalog error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.total_levels(), 3);
        assert_eq!(catalog.words().len(), 15);
        assert_eq!(catalog.guide_steps().len(), 4);
    }

    #[test]
    fn test_builtin_levels_cover_every_vowel_once() {
        for level in Catalog::builtin().levels() {
            assert_eq!(level.pair_count(), 5);
            assert_eq!(level.distinct_vowels(), Vowel::ALL.to_vec());
        }
    }

    #[test]
    fn test_distinct_vowels_collapses_duplicates() {
        let level = Level::new(
            7,
            "Repetida",
            vec![
                Pair::new(Vowel::O, "Oso", "🐻"),
                Pair::new(Vowel::A, "Agua", "💧"),
                Pair::new(Vowel::O, "Oreja", "👂"),
            ],
        );
        assert_eq!(level.pair_count(), 3);
        assert_eq!(level.distinct_vowels(), vec![Vowel::O, Vowel::A]);
    }

    #[test]
    fn test_validation_rejects_empty_level() {
        let result = Catalog::new(
            vec![Level::new(1, "Vacío", vec![])],
            vec![WordEntry::new("OSO", "🐻")],
            vec![],
        );
        let err = result.unwrap_err();
        assert!(err.message.contains("no pairs"));
    }

    #[test]
    fn test_validation_rejects_word_without_vowels() {
        let result = Catalog::new(
            Catalog::builtin().levels().to_vec(),
            vec![WordEntry::new("PST", "🤫")],
            vec![],
        );
        assert!(result.unwrap_err().message.contains("no vowels"));
    }

    #[test]
    fn test_guide_step_past_end_is_none() {
        let catalog = Catalog::builtin();
        assert!(catalog.guide_step(0).unwrap().starts_with("Paso 1"));
        assert!(catalog.guide_step(4).is_none());
    }

    #[test]
    fn test_parse_catalog_from_toml() {
        let toml = r#"
guide_steps = ["Uno"]

[[levels]]
id = 1
name = "Corto"

[[levels.pairs]]
vowel = "A"
word = "Agua"
glyph = "💧"

[[words]]
word = "SOL"
glyph = "☀️"
"#;
        let catalog = Catalog::from_toml_str(toml).unwrap();
        assert_eq!(catalog.total_levels(), 1);
        assert_eq!(catalog.level(0).unwrap().pairs()[0].vowel(), Vowel::A);
        assert_eq!(catalog.words()[0].word(), "SOL");
        assert_eq!(catalog.guide_steps(), ["Uno".to_string()]);
    }

    #[test]
    fn test_parse_rejects_unknown_vowel() {
        let toml = r#"
[[levels]]
id = 1
name = "Mal"

[[levels.pairs]]
vowel = "B"
word = "Barco"
glyph = "⛵"

[[words]]
word = "SOL"
glyph = "☀️"
"#;
        assert!(Catalog::from_toml_str(toml).is_err());
    }
}
