//! Scripted play-throughs of the console front end.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;
use std::sync::Arc;
use strictly_vowels::{
    Catalog, ConsolePresenter, GameSession, PlayEnd, WordEntry, play_completion, play_matching,
};

const LEVEL_DROPS: &str = "A 1\nE 2\nI 3\nO 4\nU 5\n";

fn run_matching(script: &str) -> (PlayEnd, String) {
    let mut session = GameSession::new(Arc::new(Catalog::builtin()));
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut presenter = ConsolePresenter::new(Vec::new(), false);
    let end = play_matching(&mut session, &mut input, &mut presenter).unwrap();
    (end, String::from_utf8(presenter.into_inner()).unwrap())
}

fn single_word_catalog(word: &str, glyph: &str) -> Arc<Catalog> {
    let builtin = Catalog::builtin();
    Arc::new(
        Catalog::new(
            builtin.levels().to_vec(),
            vec![WordEntry::new(word, glyph)],
            builtin.guide_steps().to_vec(),
        )
        .unwrap(),
    )
}

fn run_completion(catalog: Arc<Catalog>, script: &str) -> (PlayEnd, String) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut presenter = ConsolePresenter::new(Vec::new(), false);
    let end = play_completion(catalog, 10, &mut rng, &mut input, &mut presenter).unwrap();
    (end, String::from_utf8(presenter.into_inner()).unwrap())
}

#[test]
fn test_matching_play_through_all_levels() {
    let script = format!("{LEVEL_DROPS}siguiente\n{LEVEL_DROPS}siguiente\n{LEVEL_DROPS}salir\n");
    let (end, output) = run_matching(&script);

    assert_eq!(end, PlayEnd::Finished { score: 150 });
    assert_eq!(output.matches("¡Nivel completado!").count(), 2);
    assert!(output.contains("¡Has completado todos los niveles!"));
    assert!(output.contains("Puntuación: 150"));
}

#[test]
fn test_matching_wrong_drop_then_quit() {
    let (end, output) = run_matching("E 1\nA 1\nquit\n");
    assert_eq!(end, PlayEnd::Abandoned { score: 10 });
    assert!(output.contains("Inténtalo otra vez"));
    assert!(output.contains("¡Muy bien! A"));
}

#[test]
fn test_matching_end_of_input_abandons() {
    let (end, _) = run_matching("A 1\n");
    assert_eq!(end, PlayEnd::Abandoned { score: 10 });
}

#[test]
fn test_matching_replay_resets_score() {
    let script = format!("{LEVEL_DROPS}repetir\nA 1\nsalir\n");
    let (end, _) = run_matching(&script);
    assert_eq!(end, PlayEnd::Abandoned { score: 10 });
}

#[test]
fn test_matching_rejects_bad_input() {
    let (end, output) = run_matching("A x\nB 1\nA 9\nsalir\n");
    assert_eq!(end, PlayEnd::Abandoned { score: 0 });
    assert_eq!(output.matches("No se puede").count(), 2);
    assert!(output.contains("por ejemplo: A 1"));
}

#[test]
fn test_completion_correct_word() {
    let (end, output) = run_completion(
        single_word_catalog("UVA", "🍇"),
        "1 U\n2 a\ncomprobar\nsiguiente\nsalir\n",
    );
    assert_eq!(end, PlayEnd::Finished { score: 10 });
    assert!(output.contains("U V A"));
    assert!(output.contains("¡Correcto!"));
    assert!(output.contains("Puntuación final: 10"));
}

#[test]
fn test_completion_replay_after_exhaustion() {
    let (end, output) = run_completion(
        single_word_catalog("SOL", "☀️"),
        "1 O\ncomprobar\nsiguiente\nrepetir\nsalir\n",
    );
    assert_eq!(end, PlayEnd::Abandoned { score: 0 });
    assert_eq!(output.matches("Palabra 1/1").count(), 4);
}

#[test]
fn test_completion_requires_all_slots_before_check() {
    let (end, output) = run_completion(
        single_word_catalog("CASA", "🏠"),
        "1 A\ncomprobar\nsiguiente\nsalir\n",
    );
    assert_eq!(end, PlayEnd::Abandoned { score: 0 });
    assert!(output.contains("Primero completa todos los huecos."));
    assert!(output.contains("Comprueba la palabra antes de seguir."));
}

#[test]
fn test_completion_wrong_word_scores_nothing() {
    let (end, output) = run_completion(
        single_word_catalog("LUNA", "🌙"),
        "1 A\n2 U\ncomprobar\nsiguiente\nsalir\n",
    );
    assert_eq!(end, PlayEnd::Finished { score: 0 });
    assert!(output.contains("Revisa las vocales marcadas."));
    assert!(output.contains("✘ ✘"));
}
