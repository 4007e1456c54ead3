//! Gait sequencer
//!
//! Maneuvers are fixed, hand-authored choreographies. Each one is a table
//! of [`Step`]s played by a single interpreter ([`executor::perform`]) on a
//! [`GaitTarget`](crate::traits::GaitTarget).

pub mod executor;
pub mod maneuver;
pub mod step;
pub mod tables;

pub use executor::{perform, play};
pub use maneuver::{Maneuver, UnknownManeuver};
pub use step::Step;
pub use tables::PHASE_PAUSE_MS;
