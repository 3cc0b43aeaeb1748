//! Tests for 8-puzzle solvability against actual sliding.

use pocket_games::{
    generate_solvable, is_sliding_puzzle_solvable, EightPuzzleSession, SlideError, SlideOutcome,
    SlidingPuzzle, Tiles,
};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

/// Random legal slides from `start`; returns the blank cells visited, oldest first.
fn random_walk(start: &mut SlidingPuzzle, steps: usize, rng: &mut StdRng) -> Vec<(usize, usize)> {
    let mut blanks = vec![start.blank()];
    for _ in 0..steps {
        let movable = start.movable();
        let &(row, col) = movable.choose(rng).unwrap();
        start.slide(row, col).unwrap();
        blanks.push(start.blank());
    }
    blanks
}

#[test]
fn test_states_reached_by_sliding_are_solvable() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut puzzle = SlidingPuzzle::goal();
    for _ in 0..500 {
        random_walk(&mut puzzle, 1, &mut rng);
        assert!(is_sliding_puzzle_solvable(puzzle.tiles().values()));
    }
}

#[test]
fn test_session_solves_by_retracing_slides() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..20 {
        let mut puzzle = SlidingPuzzle::goal();
        let blanks = random_walk(&mut puzzle, 30, &mut rng);
        if puzzle.is_solved() {
            continue;
        }

        let mut session = EightPuzzleSession::with_puzzle(puzzle);
        let mut outcome = SlideOutcome::Moved;
        for &(row, col) in blanks.iter().rev().skip(1) {
            outcome = session.slide(row, col).unwrap();
            if matches!(outcome, SlideOutcome::Solved { .. }) {
                break;
            }
        }

        let SlideOutcome::Solved { moves } = outcome else {
            panic!("retracing did not solve the puzzle");
        };
        assert!(moves <= 30);
        assert_eq!(session.best_moves(), Some(moves));
        assert_eq!(session.slide(0, 0), Err(SlideError::AlreadySolved));
    }
}

#[test]
fn test_generated_puzzles_can_be_played() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut session = EightPuzzleSession::new();
    for _ in 0..50 {
        session.shuffle(&mut rng);
        let tiles = *session.puzzle().tiles();
        assert!(tiles.is_solvable());
        assert_eq!(session.move_count(), 0);
        assert!(!session.is_completed());
    }
}

#[test]
fn test_generation_is_reproducible_per_seed() {
    let a: Vec<Tiles> = (0..10)
        .map(|seed| generate_solvable(&mut StdRng::seed_from_u64(seed)))
        .collect();
    let b: Vec<Tiles> = (0..10)
        .map(|seed| generate_solvable(&mut StdRng::seed_from_u64(seed)))
        .collect();
    assert_eq!(a, b);
}

#[test]
fn test_known_arrangements() {
    assert!(is_sliding_puzzle_solvable(&[1, 2, 3, 4, 5, 6, 7, 8, 0]));
    assert!(!is_sliding_puzzle_solvable(&[2, 1, 3, 4, 5, 6, 7, 8, 0]));
    assert!(is_sliding_puzzle_solvable(&[1, 2, 3, 4, 5, 6, 0, 7, 8]));
}
