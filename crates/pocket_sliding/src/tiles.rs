//! Tile permutations and inversion-parity solvability.
//!
//! A sliding move swaps the blank with an orthogonal neighbour. On a grid
//! of odd width a horizontal move leaves the row-major order of the
//! numbered tiles unchanged, and a vertical move jumps a tile over an even
//! number of others, so the parity of the inversion count never changes.
//! The goal has zero inversions, hence exactly the even permutations are
//! reachable. The argument needs the odd width: on an even-width grid a
//! vertical move flips the parity and the blank's row has to be counted
//! as well.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Side length of the grid. Must stay odd for [`is_solvable`] to hold.
pub const WIDTH: usize = 3;

/// Number of cells, blank included.
pub const CELLS: usize = WIDTH * WIDTH;

/// Value marking the blank cell.
pub const BLANK: u8 = 0;

/// Solved arrangement: tiles 1-8 in row-major order, blank last.
pub const GOAL: [u8; CELLS] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

/// A validated permutation of `0..=8` in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; 9]", into = "[u8; 9]")]
pub struct Tiles([u8; CELLS]);

impl Tiles {
    /// Validates that `values` holds each of `0..=8` exactly once.
    pub fn new(values: [u8; CELLS]) -> Result<Self, TilesError> {
        let mut seen = [false; CELLS];
        for value in values {
            let slot = seen
                .get_mut(usize::from(value))
                .ok_or(TilesError::OutOfRange(value))?;
            if *slot {
                return Err(TilesError::Duplicate(value));
            }
            *slot = true;
        }
        Ok(Self(values))
    }

    /// The solved arrangement.
    pub fn goal() -> Self {
        Self(GOAL)
    }

    /// Row-major values.
    pub fn values(&self) -> &[u8; CELLS] {
        &self.0
    }

    /// Value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below [`WIDTH`].
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(
            row < WIDTH && col < WIDTH,
            "cell ({}, {}) is off the {}x{} grid",
            row,
            col,
            WIDTH,
            WIDTH
        );
        self.0[row * WIDTH + col]
    }

    /// Coordinate of the blank cell.
    pub fn blank(&self) -> (usize, usize) {
        let index = self.0.iter().position(|v| *v == BLANK).unwrap_or(CELLS - 1);
        (index / WIDTH, index % WIDTH)
    }

    /// Number of out-of-order pairs among the numbered tiles.
    pub fn inversions(&self) -> usize {
        count_inversions(&self.0)
    }

    /// True iff the arrangement can be slid back to [`GOAL`].
    pub fn is_solvable(&self) -> bool {
        self.inversions() % 2 == 0
    }

    /// True iff the arrangement equals [`GOAL`].
    pub fn is_goal(&self) -> bool {
        self.0 == GOAL
    }

    pub(crate) fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    pub(crate) fn swap(&mut self, a: (usize, usize), b: (usize, usize)) {
        self.0.swap(a.0 * WIDTH + a.1, b.0 * WIDTH + b.1);
    }
}

impl TryFrom<[u8; CELLS]> for Tiles {
    type Error = TilesError;

    fn try_from(values: [u8; CELLS]) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<Tiles> for [u8; CELLS] {
    fn from(tiles: Tiles) -> Self {
        tiles.0
    }
}

impl std::fmt::Display for Tiles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..WIDTH {
            for col in 0..WIDTH {
                match self.get(row, col) {
                    BLANK => write!(f, "_")?,
                    value => write!(f, "{}", value)?,
                }
                if col + 1 < WIDTH {
                    write!(f, " ")?;
                }
            }
            if row + 1 < WIDTH {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Error for arrays that are not a permutation of `0..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum TilesError {
    /// A value outside `0..=8`.
    #[display("Tile value {} is out of range 0-8", _0)]
    OutOfRange(u8),
    /// A value that appears more than once.
    #[display("Tile value {} appears more than once", _0)]
    Duplicate(u8),
}

impl std::error::Error for TilesError {}

/// Decides whether `tiles` can be slid back to [`GOAL`].
///
/// Counts inversions over the row-major sequence with the blank left out
/// and accepts an even count.
///
/// # Panics
///
/// Panics if `tiles` is not a permutation of `0..=8`.
pub fn is_solvable(tiles: &[u8; CELLS]) -> bool {
    assert!(
        Tiles::new(*tiles).is_ok(),
        "tiles must be a permutation of 0..=8, got {:?}",
        tiles
    );
    count_inversions(tiles) % 2 == 0
}

fn count_inversions(tiles: &[u8; CELLS]) -> usize {
    let numbered: Vec<u8> = tiles.iter().copied().filter(|v| *v != BLANK).collect();
    numbered
        .iter()
        .enumerate()
        .map(|(i, a)| numbered[i + 1..].iter().filter(|b| a > *b).count())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_is_solvable() {
        assert!(is_solvable(&GOAL));
        assert_eq!(Tiles::goal().inversions(), 0);
        assert!(Tiles::goal().is_goal());
    }

    #[test]
    fn test_single_swap_flips_parity() {
        // Swapping two numbered tiles is never a sliding move.
        let mut swapped = GOAL;
        swapped.swap(0, 1);
        assert!(!is_solvable(&swapped));

        swapped.swap(3, 4);
        assert!(is_solvable(&swapped));
    }

    #[test]
    fn test_blank_position_is_ignored() {
        // Moving the blank along the row-major order keeps the parity.
        assert!(is_solvable(&[0, 1, 2, 3, 4, 5, 6, 7, 8]));
        assert!(is_solvable(&[1, 2, 3, 4, 0, 5, 6, 7, 8]));
    }

    #[test]
    fn test_inversion_count() {
        let tiles = Tiles::new([8, 7, 6, 5, 4, 3, 2, 1, 0]).unwrap();
        assert_eq!(tiles.inversions(), 28);
        assert!(tiles.is_solvable());
    }

    #[test]
    fn test_rejects_non_permutations() {
        assert_eq!(
            Tiles::new([1, 2, 3, 4, 5, 6, 7, 8, 9]),
            Err(TilesError::OutOfRange(9))
        );
        assert_eq!(
            Tiles::new([1, 1, 3, 4, 5, 6, 7, 8, 0]),
            Err(TilesError::Duplicate(1))
        );
    }

    #[test]
    #[should_panic(expected = "permutation")]
    fn test_predicate_panics_on_malformed_input() {
        is_solvable(&[1, 1, 1, 1, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_blank_and_display() {
        let tiles = Tiles::new([1, 2, 3, 4, 0, 5, 6, 7, 8]).unwrap();
        assert_eq!(tiles.blank(), (1, 1));
        assert_eq!(tiles.to_string(), "1 2 3\n4 _ 5\n6 7 8");
    }

    #[test]
    #[should_panic(expected = "off the 3x3 grid")]
    fn test_get_panics_off_the_grid() {
        // (0, 3) would alias (1, 0) in row-major order without the check.
        Tiles::goal().get(0, 3);
    }
}
