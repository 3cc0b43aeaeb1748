//! One player's 8-puzzle session.

use super::generate::generate_solvable;
use super::puzzle::{SlideError, SlidingPuzzle};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Result of a successful slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlideOutcome {
    /// The tile moved; the puzzle is not solved yet.
    Moved,
    /// The tile moved and completed the puzzle.
    Solved {
        /// Moves used in this round.
        moves: u32,
    },
}

/// Puzzle state plus the move counters shown to the player.
///
/// The best score lives only as long as the session does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EightPuzzleSession {
    puzzle: SlidingPuzzle,
    move_count: u32,
    best_moves: Option<u32>,
    completed: bool,
}

impl EightPuzzleSession {
    /// Starts a session on the solved board.
    pub fn new() -> Self {
        Self {
            puzzle: SlidingPuzzle::goal(),
            move_count: 0,
            best_moves: None,
            completed: false,
        }
    }

    /// Starts a session on the given board.
    pub fn with_puzzle(puzzle: SlidingPuzzle) -> Self {
        Self {
            puzzle,
            ..Self::new()
        }
    }

    /// Current board.
    pub fn puzzle(&self) -> &SlidingPuzzle {
        &self.puzzle
    }

    /// Moves made in the current round.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Fewest moves any completed round took.
    pub fn best_moves(&self) -> Option<u32> {
        self.best_moves
    }

    /// True once the current round is solved.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Installs a fresh solvable puzzle and resets the move counter.
    #[instrument(skip(self, rng))]
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.puzzle = SlidingPuzzle::new(generate_solvable(rng));
        self.move_count = 0;
        self.completed = false;
    }

    /// Returns to the solved board and resets the move counter.
    pub fn reset(&mut self) {
        self.puzzle = SlidingPuzzle::goal();
        self.move_count = 0;
        self.completed = false;
    }

    /// Slides the tile at `(row, col)` and checks for completion.
    #[instrument(skip(self), fields(moves = self.move_count))]
    pub fn slide(&mut self, row: usize, col: usize) -> Result<SlideOutcome, SlideError> {
        if self.completed {
            return Err(SlideError::AlreadySolved);
        }
        self.puzzle.slide(row, col)?;
        self.move_count += 1;

        if !self.puzzle.is_solved() {
            return Ok(SlideOutcome::Moved);
        }
        self.completed = true;
        let moves = self.move_count;
        if self.best_moves.is_none_or(|best| moves < best) {
            self.best_moves = Some(moves);
        }
        info!(moves, best = ?self.best_moves, "Puzzle completed");
        Ok(SlideOutcome::Solved { moves })
    }
}

impl Default for EightPuzzleSession {
    fn default() -> Self {
        Self::new()
    }
}
