//! Choreography steps

use crate::limb::{Joint, Limb, Segment};
use crate::servo::Angle;

/// One entry of a maneuver table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Drive a joint to an angle
    Set { joint: Joint, angle: Angle },
    /// Hold the current pose
    Pause { ms: u16 },
    /// Apply the rest pose (every joint to neutral)
    Rest,
}

impl Step {
    /// Table shorthand for [`Step::Set`]
    pub const fn set(limb: Limb, segment: Segment, angle: Angle) -> Self {
        Step::Set {
            joint: Joint::new(limb, segment),
            angle,
        }
    }

    /// Table shorthand for [`Step::Pause`]
    pub const fn pause(ms: u16) -> Self {
        Step::Pause { ms }
    }
}
