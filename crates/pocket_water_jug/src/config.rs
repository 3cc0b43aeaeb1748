//! Jug capacities and target.

use super::solvability::is_solvable;
use serde::{Deserialize, Serialize};

/// Two jug capacities and the amount to measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawConfiguration")]
pub struct JugConfiguration {
    capacity_a: u32,
    capacity_b: u32,
    target: u32,
}

impl JugConfiguration {
    /// The classic 5 and 3 litre jugs measuring 4 litres.
    pub const CLASSIC: Self = Self {
        capacity_a: 5,
        capacity_b: 3,
        target: 4,
    };

    /// Creates a configuration; both capacities must be positive.
    pub fn new(capacity_a: u32, capacity_b: u32, target: u32) -> Result<Self, JugError> {
        if capacity_a == 0 || capacity_b == 0 {
            return Err(JugError::ZeroCapacity);
        }
        Ok(Self {
            capacity_a,
            capacity_b,
            target,
        })
    }

    /// Capacity of jug A.
    pub fn capacity_a(&self) -> u32 {
        self.capacity_a
    }

    /// Capacity of jug B.
    pub fn capacity_b(&self) -> u32 {
        self.capacity_b
    }

    /// Amount to measure.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// True iff the target is reachable.
    pub fn is_solvable(&self) -> bool {
        is_solvable(self.capacity_a, self.capacity_b, self.target)
    }
}

impl std::fmt::Display for JugConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}L and {}L jugs, measure {}L",
            self.capacity_a, self.capacity_b, self.target
        )
    }
}

#[derive(Deserialize)]
struct RawConfiguration {
    capacity_a: u32,
    capacity_b: u32,
    target: u32,
}

impl TryFrom<RawConfiguration> for JugConfiguration {
    type Error = JugError;

    fn try_from(raw: RawConfiguration) -> Result<Self, Self::Error> {
        Self::new(raw.capacity_a, raw.capacity_b, raw.target)
    }
}

/// Error raised by jug configurations and sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum JugError {
    /// A jug with no capacity.
    #[display("Jug capacities must be positive")]
    ZeroCapacity,
    /// The session's target has already been measured.
    #[display("Puzzle is already solved")]
    AlreadySolved,
}

impl std::error::Error for JugError {}
