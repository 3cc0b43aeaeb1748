//! Random solvable puzzle generation.

use super::tiles::Tiles;
use rand::Rng;
use tracing::{debug, instrument};

/// Shuffles `0..=8` until the arrangement is solvable.
///
/// Half of all permutations are solvable, so this takes two draws on
/// average. The random source belongs to the caller; seed it for
/// reproducible puzzles.
#[instrument(skip(rng))]
pub fn generate_solvable<R: Rng + ?Sized>(rng: &mut R) -> Tiles {
    let mut tiles = Tiles::goal();
    let mut attempts = 0u32;
    loop {
        attempts += 1;
        tiles.shuffle(rng);
        if tiles.is_solvable() {
            debug!(attempts, tiles = ?tiles.values(), "Generated solvable puzzle");
            return tiles;
        }
    }
}
