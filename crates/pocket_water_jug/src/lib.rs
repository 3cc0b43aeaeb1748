//! The water jug puzzle: measure a target amount with two unmarked jugs.
//!
//! - [`is_solvable`] decides reachability with the GCD criterion.
//! - [`apply`] performs one [`JugOperation`] as a pure transition.
//! - [`JugSession`] counts moves and detects the win.
//! - [`choose_solvable`] picks a round from a preset catalog.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod catalog;
mod config;
mod operation;
mod session;
mod solvability;

pub use catalog::{choose_solvable, presets, PRESETS};
pub use config::{JugConfiguration, JugError};
pub use operation::{apply, JugOperation, JugState};
pub use session::{JugOutcome, JugSession};
pub use solvability::{gcd, is_solvable};
