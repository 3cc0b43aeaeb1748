//! The 8-puzzle: tiles 1-8 and a blank on a 3x3 grid.
//!
//! - [`is_solvable`] decides reachability of an arrangement by inversion
//!   parity.
//! - [`generate_solvable`] draws random arrangements from a caller-owned
//!   RNG until one is solvable.
//! - [`SlidingPuzzle`] applies sliding moves; [`EightPuzzleSession`] adds
//!   the move counter and best score.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod generate;
mod puzzle;
mod session;
mod tiles;

pub use generate::generate_solvable;
pub use puzzle::{SlideError, SlidingPuzzle};
pub use session::{EightPuzzleSession, SlideOutcome};
pub use tiles::{is_solvable, Tiles, TilesError, BLANK, CELLS, GOAL, WIDTH};
