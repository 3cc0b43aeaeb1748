//! Sliding moves on a single 8-puzzle board.

use super::tiles::{Tiles, WIDTH};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// An 8-puzzle board with the blank's coordinate tracked alongside.
///
/// Serialized as its tiles alone; the blank is recomputed on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Tiles", into = "Tiles")]
pub struct SlidingPuzzle {
    tiles: Tiles,
    blank: (usize, usize),
}

impl SlidingPuzzle {
    /// Wraps an arrangement, recording where the blank sits.
    pub fn new(tiles: Tiles) -> Self {
        Self {
            blank: tiles.blank(),
            tiles,
        }
    }

    /// The solved board.
    pub fn goal() -> Self {
        Self::new(Tiles::goal())
    }

    /// Current arrangement.
    pub fn tiles(&self) -> &Tiles {
        &self.tiles
    }

    /// Coordinate of the blank cell.
    pub fn blank(&self) -> (usize, usize) {
        self.blank
    }

    /// True iff the board shows the goal arrangement.
    pub fn is_solved(&self) -> bool {
        self.tiles.is_goal()
    }

    /// True iff the tile at `(row, col)` borders the blank orthogonally.
    pub fn is_adjacent_to_blank(&self, row: usize, col: usize) -> bool {
        let (blank_row, blank_col) = self.blank;
        (row == blank_row && col.abs_diff(blank_col) == 1)
            || (col == blank_col && row.abs_diff(blank_row) == 1)
    }

    /// Coordinates of every tile that can slide, in row-major order.
    pub fn movable(&self) -> Vec<(usize, usize)> {
        (0..WIDTH)
            .flat_map(|row| (0..WIDTH).map(move |col| (row, col)))
            .filter(|(row, col)| self.is_adjacent_to_blank(*row, *col))
            .collect()
    }

    /// Slides the tile at `(row, col)` into the blank.
    #[instrument(skip(self), fields(blank = ?self.blank))]
    pub fn slide(&mut self, row: usize, col: usize) -> Result<(), SlideError> {
        if row >= WIDTH || col >= WIDTH {
            return Err(SlideError::OutOfBounds { row, col });
        }
        if !self.is_adjacent_to_blank(row, col) {
            return Err(SlideError::NotAdjacent { row, col });
        }
        self.tiles.swap(self.blank, (row, col));
        self.blank = (row, col);
        trace!(tiles = ?self.tiles.values(), "Slid tile");
        Ok(())
    }
}

impl Default for SlidingPuzzle {
    fn default() -> Self {
        Self::goal()
    }
}

impl From<Tiles> for SlidingPuzzle {
    fn from(tiles: Tiles) -> Self {
        Self::new(tiles)
    }
}

impl From<SlidingPuzzle> for Tiles {
    fn from(puzzle: SlidingPuzzle) -> Self {
        puzzle.tiles
    }
}

impl std::fmt::Display for SlidingPuzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tiles)
    }
}

/// Error for a slide that cannot be made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SlideError {
    /// The coordinate is off the board.
    #[display("({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The tile does not border the blank.
    #[display("Tile at ({}, {}) is not next to the blank", row, col)]
    NotAdjacent {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The puzzle is already solved.
    #[display("Puzzle is already solved")]
    AlreadySolved,
}

impl std::error::Error for SlideError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_blank_in_corner() {
        let puzzle = SlidingPuzzle::goal();
        assert_eq!(puzzle.blank(), (2, 2));
        assert!(puzzle.is_solved());
        assert_eq!(puzzle.movable(), vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn test_slide_moves_blank() {
        let mut puzzle = SlidingPuzzle::goal();
        puzzle.slide(2, 1).unwrap();
        assert_eq!(puzzle.blank(), (2, 1));
        assert_eq!(puzzle.tiles().values(), &[1, 2, 3, 4, 5, 6, 7, 0, 8]);
        assert!(!puzzle.is_solved());
        assert!(puzzle.tiles().is_solvable());
    }

    #[test]
    fn test_rejects_distant_and_off_board_tiles() {
        let mut puzzle = SlidingPuzzle::goal();
        assert_eq!(
            puzzle.slide(0, 0),
            Err(SlideError::NotAdjacent { row: 0, col: 0 })
        );
        assert_eq!(
            puzzle.slide(1, 1),
            Err(SlideError::NotAdjacent { row: 1, col: 1 })
        );
        assert_eq!(
            puzzle.slide(3, 2),
            Err(SlideError::OutOfBounds { row: 3, col: 2 })
        );
        assert!(puzzle.is_solved());
    }

    #[test]
    fn test_blank_is_recomputed_when_loading() {
        let puzzle: SlidingPuzzle = serde_json::from_str("[1,2,3,4,0,5,6,7,8]").unwrap();
        assert_eq!(puzzle.blank(), (1, 1));
        assert_eq!(
            serde_json::to_string(&puzzle).unwrap(),
            "[1,2,3,4,0,5,6,7,8]"
        );
    }

    #[test]
    fn test_stale_blank_coordinate_cannot_be_loaded() {
        let stored = r#"{"tiles":[1,2,3,4,5,6,7,8,0],"blank":[0,0]}"#;
        assert!(serde_json::from_str::<SlidingPuzzle>(stored).is_err());

        let mut puzzle: SlidingPuzzle = serde_json::from_str("[1,2,3,4,5,6,7,8,0]").unwrap();
        assert_eq!(puzzle.slide(0, 1), Err(SlideError::NotAdjacent { row: 0, col: 1 }));
        assert!(puzzle.tiles().is_solvable());
    }
}
