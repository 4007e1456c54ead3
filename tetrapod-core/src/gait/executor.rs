//! Step interpreter
//!
//! Plays a choreography table on a [`GaitTarget`]. A failed joint write
//! aborts the maneuver at that step: no later write or pause is issued,
//! since a half-applied phase leaves the legs out of sync and continuing
//! would compound it.

use super::maneuver::Maneuver;
use super::step::Step;
use super::tables;
use crate::traits::GaitTarget;

/// Perform a maneuver from the beginning
///
/// Calls [`GaitTarget::prepare`] once, then plays the maneuver's table.
pub fn perform<T: GaitTarget>(maneuver: Maneuver, target: &mut T) -> Result<(), T::Error> {
    target.prepare()?;
    play(maneuver.steps(), target)
}

/// Play a step table in order
pub fn play<T: GaitTarget>(steps: &[Step], target: &mut T) -> Result<(), T::Error> {
    for step in steps {
        match *step {
            Step::Set { joint, angle } => target.set_joint(joint, angle)?,
            Step::Pause { ms } => target.pause(ms),
            Step::Rest => play(tables::REST, target)?,
        }
    }
    Ok(())
}
