//! Word-completion rounds: a shuffled run through the catalog's words.

use super::catalog::{Catalog, POINTS_PER_CORRECT, WordEntry};
use super::completion::{FillError, PuzzlePhase, WordPuzzle};
use super::events::GameObserver;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Result of [`CompletionRound::next_word`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordAdvance {
    /// Presenting the word at this 1-based position.
    Next(usize),
    /// The last word has been passed; show the result.
    Exhausted,
}

/// One play-through of the completion game.
#[derive(Debug, Clone)]
pub struct CompletionRound {
    catalog: Arc<Catalog>,
    points_per_correct: u32,
    order: Vec<WordEntry>,
    index: usize,
    score: u32,
    puzzle: Option<WordPuzzle>,
    scored_current: bool,
}

impl CompletionRound {
    /// Shuffles the words and presents the first one.
    #[instrument(skip(catalog, rng))]
    pub fn start<R: Rng + ?Sized>(catalog: Arc<Catalog>, rng: &mut R) -> Self {
        Self::start_with_points(catalog, POINTS_PER_CORRECT, rng)
    }

    /// Like [`CompletionRound::start`] with a custom point value.
    #[instrument(skip(catalog, rng))]
    pub fn start_with_points<R: Rng + ?Sized>(
        catalog: Arc<Catalog>,
        points_per_correct: u32,
        rng: &mut R,
    ) -> Self {
        let mut round = Self {
            catalog,
            points_per_correct,
            order: Vec::new(),
            index: 0,
            score: 0,
            puzzle: None,
            scored_current: false,
        };
        round.restart(rng);
        round
    }

    /// Reshuffles, clears the score and presents the first word again.
    #[instrument(skip(self, rng))]
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut order = self.catalog.words().to_vec();
        order.shuffle(rng);
        self.order = order;
        self.index = 0;
        self.score = 0;
        self.scored_current = false;
        self.puzzle = self
            .order
            .first()
            .map(|entry| WordPuzzle::from_entry(entry, rng));
        info!(words = self.order.len(), "Completion round started");
    }

    /// The puzzle being played, or `None` once the words are exhausted.
    pub fn puzzle(&self) -> Option<&WordPuzzle> {
        self.puzzle.as_ref()
    }

    /// Places a vowel in a slot of the current puzzle.
    #[instrument(skip(self, observer))]
    pub fn fill(
        &mut self,
        slot: usize,
        input: char,
        observer: &mut impl GameObserver,
    ) -> Option<Result<PuzzlePhase, FillError>> {
        self.puzzle
            .as_mut()
            .map(|puzzle| puzzle.fill(slot, input, observer))
    }

    /// Checks the current puzzle, scoring a correct answer once.
    ///
    /// Returns `None` when no word is being presented.
    #[instrument(skip(self, observer))]
    pub fn check(&mut self, observer: &mut impl GameObserver) -> Option<bool> {
        let puzzle = self.puzzle.as_mut()?;
        let correct = puzzle.check_answer(observer);
        if correct && !self.scored_current {
            self.score = self.score.saturating_add(self.points_per_correct);
            self.scored_current = true;
            debug!(score = self.score, "Word scored");
        }
        Some(correct)
    }

    /// Moves to the next word.
    #[instrument(skip(self, rng))]
    pub fn next_word<R: Rng + ?Sized>(&mut self, rng: &mut R) -> WordAdvance {
        if self.index >= self.order.len() {
            return WordAdvance::Exhausted;
        }
        self.index += 1;
        self.scored_current = false;
        match self.order.get(self.index) {
            Some(entry) => {
                self.puzzle = Some(WordPuzzle::from_entry(entry, rng));
                debug!(position = self.index + 1, "Next word");
                WordAdvance::Next(self.index + 1)
            }
            None => {
                self.puzzle = None;
                info!(score = self.score, "Completion round finished");
                WordAdvance::Exhausted
            }
        }
    }

    /// 1-based position of the current word.
    pub fn position(&self) -> usize {
        (self.index + 1).min(self.order.len())
    }

    /// Number of words in the round.
    pub fn total_words(&self) -> usize {
        self.order.len()
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// True once every word has been passed.
    pub fn is_finished(&self) -> bool {
        self.puzzle.is_none()
    }
}
