//! Jug operations as pure state transitions.

use super::config::JugConfiguration;
use serde::{Deserialize, Serialize};

/// Current fill levels of both jugs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct JugState {
    /// Litres in jug A.
    pub a: u32,
    /// Litres in jug B.
    pub b: u32,
}

impl JugState {
    /// True iff either jug holds exactly the target.
    pub fn reaches(&self, target: u32) -> bool {
        self.a == target || self.b == target
    }

    /// True iff both levels are within their capacities.
    pub fn fits(&self, config: &JugConfiguration) -> bool {
        self.a <= config.capacity_a() && self.b <= config.capacity_b()
    }
}

impl std::fmt::Display for JugState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "A={}L B={}L", self.a, self.b)
    }
}

/// The six moves available to the player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum JugOperation {
    /// Fill jug A to the brim.
    FillA,
    /// Pour jug A away.
    EmptyA,
    /// Fill jug B to the brim.
    FillB,
    /// Pour jug B away.
    EmptyB,
    /// Pour from A into B until A is empty or B is full.
    PourAToB,
    /// Pour from B into A until B is empty or A is full.
    PourBToA,
}

/// Applies `operation` to `state` and returns the new levels.
///
/// Levels stay within the capacities of `config` when `state` starts
/// within them.
pub fn apply(config: &JugConfiguration, state: JugState, operation: JugOperation) -> JugState {
    let JugState { a, b } = state;
    let next = match operation {
        JugOperation::FillA => JugState::new(config.capacity_a(), b),
        JugOperation::EmptyA => JugState::new(0, b),
        JugOperation::FillB => JugState::new(a, config.capacity_b()),
        JugOperation::EmptyB => JugState::new(a, 0),
        JugOperation::PourAToB => {
            let amount = a.min(config.capacity_b().saturating_sub(b));
            JugState::new(a - amount, b + amount)
        }
        JugOperation::PourBToA => {
            let amount = b.min(config.capacity_a().saturating_sub(a));
            JugState::new(a + amount, b - amount)
        }
    };
    debug_assert!(!state.fits(config) || next.fits(config));
    next
}
