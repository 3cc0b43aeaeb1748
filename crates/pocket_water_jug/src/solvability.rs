//! GCD reachability for two jugs.
//!
//! Every fill, empty or pour keeps both levels in the set of integer
//! combinations of the two capacities, which are exactly the multiples of
//! their greatest common divisor. The target also has to fit in the larger
//! jug.

/// Greatest common divisor by the Euclidean algorithm.
pub fn gcd(a: u32, b: u32) -> u32 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Decides whether `target` litres can be measured with the two jugs.
///
/// # Panics
///
/// Panics if either capacity is zero.
pub fn is_solvable(capacity_a: u32, capacity_b: u32, target: u32) -> bool {
    assert!(
        capacity_a > 0 && capacity_b > 0,
        "jug capacities must be positive, got {} and {}",
        capacity_a,
        capacity_b
    );
    target % gcd(capacity_a, capacity_b) == 0 && target <= capacity_a.max(capacity_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(5, 3), 1);
        assert_eq!(gcd(4, 2), 2);
        assert_eq!(gcd(12, 8), 4);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 7), 7);
    }

    #[test]
    fn test_classic_puzzles() {
        assert!(is_solvable(5, 3, 4));
        assert!(!is_solvable(4, 2, 3));
    }

    #[test]
    fn test_target_must_fit() {
        assert!(is_solvable(5, 3, 5));
        assert!(!is_solvable(5, 3, 6));
        assert!(is_solvable(5, 3, 0));
    }

    #[test]
    #[should_panic(expected = "positive")]
    fn test_zero_capacity_panics() {
        is_solvable(0, 3, 1);
    }
}
