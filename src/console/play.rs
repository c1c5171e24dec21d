//! Line-oriented play loops for both games.
//!
//! Input is a [`BufRead`] so the loops can be driven by a script in tests.
//! End of input abandons the session.

use super::presenter::ConsolePresenter;
use crate::games::vowels::{
    Catalog, CompletionRound, DropOutcome, GameSession, LevelAdvance, MatchBoard, PuzzlePhase,
    WordAdvance,
};
use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// How a play loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayEnd {
    /// The player quit or input ran out.
    Abandoned {
        /// Score when play stopped.
        score: u32,
    },
    /// Every level or word was played and the player chose not to replay.
    Finished {
        /// Final score.
        score: u32,
    },
}

/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    Guide,
    Check,
    Next,
    Replay,
    Place { first: String, second: String },
    Unknown,
}

fn parse_command(line: &str) -> Command {
    let mut words = line.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some(w), None, None) => match w.to_lowercase().as_str() {
            "salir" | "quit" | "q" => Command::Quit,
            "guia" | "guía" | "guide" | "?" => Command::Guide,
            "comprobar" | "check" => Command::Check,
            "siguiente" | "next" | "s" => Command::Next,
            "repetir" | "replay" | "r" => Command::Replay,
            _ => Command::Unknown,
        },
        (Some(a), Some(b), None) => Command::Place {
            first: a.to_string(),
            second: b.to_string(),
        },
        _ => Command::Unknown,
    }
}

fn read_command<R: BufRead>(input: &mut R) -> Result<Option<Command>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(parse_command(&line)))
}

fn prompt<W: Write>(presenter: &mut ConsolePresenter<W>) -> Result<()> {
    write!(presenter.out(), "> ")?;
    presenter.out().flush()?;
    Ok(())
}

fn narrate_guide<W: Write>(presenter: &mut ConsolePresenter<W>, catalog: &Catalog) {
    for step in catalog.guide_steps() {
        presenter.line(step);
        presenter.speak(step);
    }
}

/// Plays the matching game from level 1 until the player stops.
///
/// Commands: `<vowel> <zone>` drops a tile (zones are numbered from 1);
/// after a level, `siguiente` continues and `repetir` starts over.
#[instrument(skip_all)]
pub fn play_matching<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: &mut R,
    presenter: &mut ConsolePresenter<W>,
) -> Result<PlayEnd> {
    session.reset();
    let catalog = session.catalog().clone();

    'levels: loop {
        let mut board = MatchBoard::for_session(session)?;
        let level_number = session.level_number().unwrap_or(1);
        info!(level_number, "Presenting level");

        let completed = loop {
            presenter.show_board(level_number, session.score(), &board);
            prompt(presenter)?;
            let Some(command) = read_command(input)? else {
                return Ok(PlayEnd::Abandoned {
                    score: session.score(),
                });
            };
            match command {
                Command::Quit => {
                    return Ok(PlayEnd::Abandoned {
                        score: session.score(),
                    });
                }
                Command::Guide => narrate_guide(presenter, &catalog),
                Command::Place { first, second } => {
                    let Ok(zone) = second.parse::<usize>() else {
                        presenter.line("Escribe la vocal y el número de la imagen, por ejemplo: A 1");
                        continue;
                    };
                    match board.drop_symbol(session, &first, zone.wrapping_sub(1), presenter) {
                        Ok(DropOutcome::Correct {
                            level_completed: Some(summary),
                        }) => break summary,
                        Ok(_) => {}
                        Err(e) => {
                            debug!(error = %e, "Drop rejected");
                            presenter.line(&format!("No se puede: {}", e));
                        }
                    }
                }
                _ => presenter.line("Escribe la vocal y el número de la imagen, por ejemplo: A 1"),
            }
        };

        loop {
            if completed.is_last_level {
                presenter.line("Escribe «repetir» para jugar otra vez o «salir».");
            } else {
                presenter.line("Escribe «siguiente», «repetir» o «salir».");
            }
            prompt(presenter)?;
            let Some(command) = read_command(input)? else {
                return Ok(PlayEnd::Finished {
                    score: session.score(),
                });
            };
            match command {
                Command::Next if !completed.is_last_level => {
                    match session.advance_level()? {
                        LevelAdvance::Advanced(_) => continue 'levels,
                        LevelAdvance::NoFurtherLevel => {}
                    }
                }
                Command::Replay => {
                    session.reset();
                    continue 'levels;
                }
                Command::Quit => {
                    return Ok(PlayEnd::Finished {
                        score: session.score(),
                    });
                }
                _ => {}
            }
        }
    }
}

/// Plays the word-completion game through every catalog word.
///
/// Commands: `<slot> <vowel>` fills a gap (gaps are numbered from 1),
/// `comprobar` checks the word, `siguiente` moves on, `repetir` replays.
#[instrument(skip_all)]
pub fn play_completion<R: BufRead, W: Write, G: Rng + ?Sized>(
    catalog: Arc<Catalog>,
    points_per_correct: u32,
    rng: &mut G,
    input: &mut R,
    presenter: &mut ConsolePresenter<W>,
) -> Result<PlayEnd> {
    let mut round = CompletionRound::start_with_points(catalog.clone(), points_per_correct, rng);

    loop {
        let Some(puzzle) = round.puzzle() else {
            presenter.line(&format!("Puntuación final: {}", round.score()));
            presenter.line("Escribe «repetir» para jugar otra vez o «salir».");
            prompt(presenter)?;
            match read_command(input)? {
                Some(Command::Replay) => {
                    round.restart(rng);
                    continue;
                }
                Some(Command::Quit) | None => {
                    return Ok(PlayEnd::Finished {
                        score: round.score(),
                    });
                }
                Some(_) => continue,
            }
        };

        presenter.show_puzzle(round.position(), round.total_words(), round.score(), puzzle);
        let phase = puzzle.phase();
        prompt(presenter)?;
        let Some(command) = read_command(input)? else {
            return Ok(PlayEnd::Abandoned {
                score: round.score(),
            });
        };

        match command {
            Command::Quit => {
                return Ok(PlayEnd::Abandoned {
                    score: round.score(),
                });
            }
            Command::Guide => narrate_guide(presenter, &catalog),
            Command::Check => match phase {
                PuzzlePhase::AllFilled => {
                    round.check(presenter);
                    if let Some(puzzle) = round.puzzle() {
                        let marks = puzzle.slot_marks();
                        presenter.show_marks(&marks);
                    }
                    presenter.line("Escribe «siguiente» para la próxima palabra.");
                }
                PuzzlePhase::Checked { .. } => {
                    presenter.line("Ya comprobada. Escribe «siguiente».");
                }
                PuzzlePhase::Empty | PuzzlePhase::PartiallyFilled => {
                    presenter.line("Primero completa todos los huecos.");
                }
            },
            Command::Next => {
                if matches!(phase, PuzzlePhase::Checked { .. }) {
                    if round.next_word(rng) == WordAdvance::Exhausted {
                        debug!("Words exhausted");
                    }
                } else {
                    presenter.line("Comprueba la palabra antes de seguir.");
                }
            }
            Command::Place { first, second } => {
                let slot = first.parse::<usize>().ok();
                let letter = single_char(&second);
                match (slot, letter) {
                    (Some(slot), Some(letter)) => {
                        if let Some(Err(e)) = round.fill(slot.wrapping_sub(1), letter, presenter) {
                            presenter.line(&format!("No se puede: {}", e));
                        }
                    }
                    _ => presenter.line("Escribe el número del hueco y la vocal, por ejemplo: 1 A"),
                }
            }
            Command::Replay => {
                round.restart(rng);
            }
            Command::Unknown => {
                presenter.line("Escribe el número del hueco y la vocal, por ejemplo: 1 A");
            }
        }
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
