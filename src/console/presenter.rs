//! Text rendering of game feedback.
//!
//! Sounds, applause, star rain and speech become text cues. With narration
//! off the cues are skipped and only the visual messages remain.

use crate::games::vowels::{
    DropZone, GameEvent, GameObserver, LevelCompleted, MatchBoard, SlotMark, WordPart, WordPuzzle,
};
use std::io::Write;
use tracing::{instrument, warn};

/// Observer that writes feedback to a terminal-like sink.
#[derive(Debug)]
pub struct ConsolePresenter<W: Write> {
    out: W,
    narration: bool,
}

impl<W: Write> ConsolePresenter<W> {
    /// Creates a presenter writing to `out`.
    pub fn new(out: W, narration: bool) -> Self {
        Self { out, narration }
    }

    /// The underlying sink, for prompts and screens.
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// Consumes the presenter and returns the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Whether audio cues are rendered.
    pub fn narration(&self) -> bool {
        self.narration
    }

    /// Reads a text aloud (rendered as a speech cue).
    pub fn speak(&mut self, text: &str) {
        if self.narration {
            self.line(&format!("🔊 {}", text));
        }
    }

    /// Renders the zones and remaining tiles of a matching board.
    #[instrument(skip_all)]
    pub fn show_board(&mut self, level_number: u32, score: u32, board: &MatchBoard) {
        self.line(&format!("── Nivel {} · Puntos: {} ──", level_number, score));
        for (index, zone) in board.zones().iter().enumerate() {
            self.line(&zone_line(index, zone));
        }
        let tiles = board
            .available_tiles()
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        self.line(&format!("Vocales: {}", tiles));
    }

    /// Renders a word puzzle with its gaps and remaining tiles.
    #[instrument(skip_all)]
    pub fn show_puzzle(&mut self, position: usize, total: usize, score: u32, puzzle: &WordPuzzle) {
        self.line(&format!(
            "── Palabra {}/{} · Puntos: {} ──",
            position, total, score
        ));
        self.line(&format!("{}  {}", puzzle.glyph(), render_word(puzzle)));
        let tiles = puzzle
            .available_tiles()
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        self.line(&format!("Vocales: {}", tiles));
    }

    /// Renders per-slot marks after a check.
    pub fn show_marks(&mut self, marks: &[SlotMark]) {
        let rendered = marks
            .iter()
            .map(|m| match m {
                SlotMark::Correct => "✔",
                SlotMark::Wrong => "✘",
                SlotMark::Empty => "·",
            })
            .collect::<Vec<_>>()
            .join(" ");
        self.line(&rendered);
    }

    /// Writes one line; write failures degrade to a log entry.
    pub fn line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            warn!(error = %e, "Console output unavailable");
        }
    }

    fn cue(&mut self, cue: &str) {
        if self.narration {
            self.line(&format!("♪ {}", cue));
        }
    }

    fn level_complete(&mut self, summary: &LevelCompleted) {
        self.cue("aplausos");
        self.line("★ ✦ ★ ✦ ★ ✦ ★");
        if summary.is_last_level {
            self.line("¡Has completado todos los niveles!");
            self.line("Muy bien, ya conoces las vocales.");
        } else {
            self.line("¡Nivel completado!");
            self.line(&format!("Siguiente: nivel {}.", summary.level_number + 1));
        }
        self.line(&format!("Puntuación: {}", summary.score));
    }
}

impl<W: Write> GameObserver for ConsolePresenter<W> {
    fn notify(&mut self, event: &GameEvent) {
        match event {
            GameEvent::CorrectMatch { vowel, .. } => {
                self.cue("tono de acierto");
                self.line(&format!("¡Muy bien! {}", vowel));
            }
            GameEvent::WrongMatch { .. } => {
                self.cue("tono de error");
                self.line("¡Uy! Inténtalo otra vez.");
            }
            GameEvent::LevelComplete(summary) => self.level_complete(summary),
            GameEvent::WordAllFilled => self.line("Ya puedes comprobar la palabra."),
            GameEvent::WordChecked { correct: true } => {
                self.cue("tono de acierto");
                self.line("¡Correcto!");
            }
            GameEvent::WordChecked { correct: false } => {
                self.cue("tono de error");
                self.line("Revisa las vocales marcadas.");
            }
        }
    }
}

fn zone_line(index: usize, zone: &DropZone) -> String {
    let mark = if zone.is_resolved() {
        format!(" ✔ {}", zone.expected())
    } else {
        String::new()
    };
    format!("[{}] {} {}{}", index + 1, zone.glyph(), zone.word(), mark)
}

/// Renders a word with `_` for empty slots.
pub fn render_word(puzzle: &WordPuzzle) -> String {
    puzzle
        .parts()
        .iter()
        .map(|part| match part {
            WordPart::Letter(c) => *c,
            WordPart::Slot(slot) => slot.filled().map(|v| v.letter()).unwrap_or('_'),
        })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}
