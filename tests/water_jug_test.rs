//! Tests for the water jug GCD criterion against explicit search.

use pocket_games::{
    apply_jug_operation, choose_solvable, is_jug_puzzle_solvable, JugConfiguration, JugError,
    JugOperation, JugOutcome, JugSession, JugState,
};
use pocket_games::pocket_water_jug::presets;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{HashSet, VecDeque};
use strum::IntoEnumIterator;

/// Every level pair reachable from empty jugs.
fn reachable(config: &JugConfiguration) -> HashSet<JugState> {
    let mut seen = HashSet::from([JugState::default()]);
    let mut queue = VecDeque::from([JugState::default()]);
    while let Some(state) = queue.pop_front() {
        for operation in JugOperation::iter() {
            let next = apply_jug_operation(config, state, operation);
            assert!(next.fits(config), "{} overflowed from {}", operation, state);
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

/// Level pairs reachable from empty jugs in at most `depth` operations.
fn within(config: &JugConfiguration, depth: usize) -> HashSet<JugState> {
    let mut seen = HashSet::from([JugState::default()]);
    let mut frontier = vec![JugState::default()];
    for _ in 0..depth {
        frontier = frontier
            .into_iter()
            .flat_map(|state| JugOperation::iter().map(move |op| apply_jug_operation(config, state, op)))
            .filter(|next| seen.insert(*next))
            .collect();
    }
    seen
}

#[test]
fn test_pour_there_and_back_from_full_or_empty_jugs() {
    for a in 1..=10 {
        for b in 1..=10 {
            let config = JugConfiguration::new(a, b, 0).unwrap();
            let near = within(&config, 2);
            for start in [
                JugState::new(0, 0),
                JugState::new(a, 0),
                JugState::new(0, b),
                JugState::new(a, b),
            ] {
                let there = apply_jug_operation(&config, start, JugOperation::PourAToB);
                let back = apply_jug_operation(&config, there, JugOperation::PourBToA);
                assert!(there.fits(&config) && back.fits(&config));
                assert!(
                    near.contains(&back),
                    "capacities {} and {}: {} -> {} is more than two operations from empty",
                    a,
                    b,
                    start,
                    back
                );
            }
        }
    }
}

#[test]
fn test_gcd_criterion_matches_search() {
    for a in 1..=10 {
        for b in 1..=10 {
            let states = reachable(&JugConfiguration::new(a, b, 0).unwrap());
            for target in 0..=a.max(b) {
                let searched = states.iter().any(|s| s.reaches(target));
                assert_eq!(
                    is_jug_puzzle_solvable(a, b, target),
                    searched,
                    "capacities {} and {}, target {}",
                    a,
                    b,
                    target
                );
            }
        }
    }
}

#[test]
fn test_classic_puzzle_in_a_session() {
    use JugOperation::*;

    let mut session = JugSession::new(JugConfiguration::CLASSIC);
    for operation in [FillB, PourBToA, FillB, PourBToA, EmptyA, PourBToA, FillB] {
        assert!(matches!(session.perform(operation), Ok(JugOutcome::Moved(_))));
    }
    assert_eq!(
        session.perform(PourBToA),
        Ok(JugOutcome::Solved {
            state: JugState::new(4, 0),
            moves: 8
        })
    );
    assert_eq!(session.perform(FillA), Err(JugError::AlreadySolved));
}

#[test]
fn test_unsolvable_targets() {
    assert!(!is_jug_puzzle_solvable(4, 2, 3));
    assert!(!is_jug_puzzle_solvable(5, 3, 6));
    assert!(is_jug_puzzle_solvable(5, 3, 4));
}

#[test]
fn test_random_preset_is_solvable() {
    let catalog = presets();
    for seed in 0..50 {
        let chosen = choose_solvable(&catalog, &mut StdRng::seed_from_u64(seed));
        assert!(catalog.contains(&chosen));
        assert!(chosen.is_solvable());
    }
}

#[test]
fn test_zero_capacity_is_rejected() {
    assert_eq!(JugConfiguration::new(0, 3, 1), Err(JugError::ZeroCapacity));
}
