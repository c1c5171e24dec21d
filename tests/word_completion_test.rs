//! Tests for filling and checking word puzzles.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_vowels::{FillError, GameEvent, PuzzlePhase, SlotMark, Vowel, WordPuzzle};

fn fill_expected(puzzle: &mut WordPuzzle, events: &mut Vec<GameEvent>) {
    let expected = puzzle
        .slots()
        .map(|s| s.expected().letter())
        .collect::<Vec<_>>();
    for (slot, letter) in expected.into_iter().enumerate() {
        puzzle.fill(slot, letter, events).unwrap();
    }
}

#[test]
fn test_is_complete_only_after_every_slot() {
    let mut puzzle = WordPuzzle::unshuffled("ELEFANTE", "🐘");
    let slots = puzzle.slot_count();
    assert_eq!(slots, 4);

    // Fill in a wrong order on purpose: correctness does not matter.
    let letters = ['E', 'E', 'A', 'E'];
    let order = [3, 0, 1, 2];
    for (filled, slot) in order.into_iter().enumerate() {
        assert!(!puzzle.is_complete());
        puzzle.fill(slot, letters[filled], &mut ()).unwrap();
    }
    assert!(puzzle.is_complete());
    assert_eq!(puzzle.phase(), PuzzlePhase::AllFilled);
}

#[test]
fn test_check_correct_word() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut puzzle = WordPuzzle::new("UNICORNIO", "🦄", &mut rng);
    let mut events = Vec::new();
    fill_expected(&mut puzzle, &mut events);

    assert!(puzzle.check_answer(&mut events));
    assert_eq!(
        events,
        vec![GameEvent::WordAllFilled, GameEvent::WordChecked { correct: true }]
    );
    assert_eq!(puzzle.phase(), PuzzlePhase::Checked { correct: true });
    assert!(puzzle.slot_marks().iter().all(|m| *m == SlotMark::Correct));
}

#[test]
fn test_single_mismatch_fails_the_word() {
    let mut puzzle = WordPuzzle::unshuffled("PELOTA", "⚽");
    puzzle.fill(0, 'O', &mut ()).unwrap();
    puzzle.fill(1, 'E', &mut ()).unwrap();
    puzzle.fill(2, 'A', &mut ()).unwrap();

    assert!(!puzzle.check_answer(&mut ()));
    assert_eq!(
        puzzle.slot_marks(),
        vec![SlotMark::Wrong, SlotMark::Wrong, SlotMark::Correct]
    );
}

#[test]
fn test_accented_input_counts_as_base_vowel() {
    let mut puzzle = WordPuzzle::unshuffled("AGUA", "💧");
    puzzle.fill(0, 'Á', &mut ()).unwrap();
    puzzle.fill(1, 'ú', &mut ()).unwrap();
    puzzle.fill(2, 'a', &mut ()).unwrap();
    assert_eq!(puzzle.slots().next().unwrap().filled(), Some(Vowel::A));
    assert!(puzzle.check_answer(&mut ()));
}

#[test]
fn test_accented_word_accepts_plain_vowel() {
    let mut puzzle = WordPuzzle::unshuffled("AVIÓN", "✈️");
    puzzle.fill(0, 'A', &mut ()).unwrap();
    puzzle.fill(1, 'I', &mut ()).unwrap();
    puzzle.fill(2, 'O', &mut ()).unwrap();
    assert!(puzzle.check_answer(&mut ()));
    assert_eq!(puzzle.slots().nth(2).unwrap().original(), 'Ó');
}

#[test]
fn test_placed_tiles_are_consumed() {
    let mut puzzle = WordPuzzle::unshuffled("OSO", "🐻");
    puzzle.fill(0, 'O', &mut ()).unwrap();
    assert_eq!(puzzle.available_tiles(), vec![Vowel::O]);
    puzzle.fill(1, 'O', &mut ()).unwrap();
    assert!(puzzle.available_tiles().is_empty());
    assert!(puzzle.tiles().iter().all(|t| t.is_consumed()));
}

#[test]
fn test_no_refill_after_check() {
    let mut puzzle = WordPuzzle::unshuffled("SOL", "☀️");
    puzzle.check_answer(&mut ());
    assert_eq!(puzzle.fill(0, 'O', &mut ()), Err(FillError::AlreadyChecked));
    assert_eq!(puzzle.phase(), PuzzlePhase::Checked { correct: false });
}
