//! Preset puzzles offered when a new round starts.

use super::config::JugConfiguration;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument, warn};

/// Built-in presets as `(capacity_a, capacity_b, target)`.
///
/// Not every preset is solvable; [`choose_solvable`] filters them.
pub const PRESETS: [(u32, u32, u32); 15] = [
    (5, 3, 4),
    (7, 4, 5),
    (8, 5, 6),
    (9, 6, 7),
    (10, 7, 8),
    (6, 4, 5),
    (9, 5, 7),
    (11, 6, 9),
    (13, 7, 10),
    (15, 8, 12),
    (12, 8, 10),
    (14, 9, 11),
    (16, 10, 13),
    (18, 11, 15),
    (20, 12, 17),
];

/// The built-in presets as configurations.
pub fn presets() -> Vec<JugConfiguration> {
    PRESETS
        .iter()
        .filter_map(|(a, b, target)| JugConfiguration::new(*a, *b, *target).ok())
        .collect()
}

/// Picks a solvable puzzle uniformly from `catalog`.
///
/// Falls back to [`JugConfiguration::CLASSIC`] when nothing in the
/// catalog is solvable.
#[instrument(skip(catalog, rng), fields(catalog_len = catalog.len()))]
pub fn choose_solvable<R: Rng + ?Sized>(catalog: &[JugConfiguration], rng: &mut R) -> JugConfiguration {
    let solvable: Vec<JugConfiguration> = catalog
        .iter()
        .copied()
        .filter(JugConfiguration::is_solvable)
        .collect();
    debug!(solvable = solvable.len(), "Filtered catalog");

    match solvable.choose(rng) {
        Some(config) => *config,
        None => {
            warn!("No solvable preset, using the classic puzzle");
            JugConfiguration::CLASSIC
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_preset_solvability() {
        let unsolvable: Vec<(u32, u32, u32)> = presets()
            .into_iter()
            .filter(|c| !c.is_solvable())
            .map(|c| (c.capacity_a(), c.capacity_b(), c.target()))
            .collect();
        assert_eq!(
            unsolvable,
            vec![(9, 6, 7), (6, 4, 5), (12, 8, 10), (16, 10, 13), (20, 12, 17)]
        );
    }

    #[test]
    fn test_choice_is_always_solvable() {
        let catalog = presets();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            assert!(choose_solvable(&catalog, &mut rng).is_solvable());
        }
    }

    #[test]
    fn test_fallback_to_classic() {
        let catalog = vec![JugConfiguration::new(4, 2, 3).unwrap()];
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(choose_solvable(&catalog, &mut rng), JugConfiguration::CLASSIC);
        assert_eq!(choose_solvable(&[], &mut rng), JugConfiguration::CLASSIC);
    }
}
