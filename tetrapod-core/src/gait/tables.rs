//! Maneuver choreography tables
//!
//! These tables are the gaits. They were tuned by hand on the robot and are
//! reproduced literally; reordering two lines changes how the robot walks.

use super::step::Step;
use crate::limb::Limb::{BackLeft, BackRight, FrontLeft, FrontRight};
use crate::limb::Segment::{Lower, Upper};
use crate::servo::Angle;

/// Pause between phase groups
pub const PHASE_PAUSE_MS: u16 = 100;

const P: Step = Step::pause(PHASE_PAUSE_MS);

/// Every joint to neutral, lower segments first, no pauses
pub const REST: &[Step] = &[
    Step::set(BackLeft, Lower, Angle::DEG90),
    Step::set(BackRight, Lower, Angle::DEG90),
    Step::set(FrontLeft, Lower, Angle::DEG90),
    Step::set(FrontRight, Lower, Angle::DEG90),
    Step::set(BackLeft, Upper, Angle::DEG90),
    Step::set(BackRight, Upper, Angle::DEG90),
    Step::set(FrontLeft, Upper, Angle::DEG90),
    Step::set(FrontRight, Upper, Angle::DEG90),
];

/// One forward step
///
/// Right legs swing forward one at a time, the body shifts, then the left
/// legs swing. Ends in a forward-shifted stance.
pub const STEP_FORWARD: &[Step] = &[
    // Back right swing
    Step::set(BackRight, Lower, Angle::DEG150),
    Step::set(BackRight, Upper, Angle::DEG150),
    P,
    Step::set(BackRight, Lower, Angle::DEG90),
    P,
    // Front right swing
    Step::set(FrontRight, Lower, Angle::DEG150),
    Step::set(FrontRight, Upper, Angle::DEG150),
    P,
    Step::set(FrontRight, Lower, Angle::DEG90),
    P,
    // Body shift
    Step::set(BackLeft, Upper, Angle::DEG150),
    Step::set(BackRight, Upper, Angle::DEG90),
    Step::set(FrontLeft, Upper, Angle::DEG150),
    Step::set(FrontRight, Upper, Angle::DEG90),
    P,
    // Back left swing
    Step::set(BackLeft, Lower, Angle::DEG150),
    Step::set(BackLeft, Upper, Angle::DEG30),
    P,
    Step::set(BackLeft, Lower, Angle::DEG90),
    P,
    // Front left swing
    Step::set(FrontLeft, Lower, Angle::DEG150),
    Step::set(FrontLeft, Upper, Angle::DEG30),
    P,
    Step::set(FrontLeft, Lower, Angle::DEG90),
    P,
    // Body shift
    Step::set(BackLeft, Upper, Angle::DEG90),
    Step::set(FrontLeft, Upper, Angle::DEG90),
    Step::set(BackRight, Upper, Angle::DEG30),
    Step::set(FrontRight, Upper, Angle::DEG30),
    P,
];

/// Counter-clockwise pivot: back-left, back-right, front-right, front-left
pub const TURN_LEFT: &[Step] = &[
    Step::set(BackLeft, Lower, Angle::DEG120),
    Step::set(BackLeft, Upper, Angle::DEG135),
    P,
    Step::set(BackLeft, Lower, Angle::DEG90),
    P,
    Step::set(BackRight, Lower, Angle::DEG120),
    Step::set(BackRight, Upper, Angle::DEG135),
    P,
    Step::set(BackRight, Lower, Angle::DEG90),
    P,
    Step::set(FrontRight, Lower, Angle::DEG120),
    Step::set(FrontRight, Upper, Angle::DEG135),
    P,
    Step::set(FrontRight, Lower, Angle::DEG90),
    P,
    Step::set(FrontLeft, Lower, Angle::DEG120),
    Step::set(FrontLeft, Upper, Angle::DEG135),
    P,
    Step::set(FrontLeft, Lower, Angle::DEG90),
    P,
    Step::Rest,
    P,
];

/// Clockwise pivot: back-right, back-left, front-left, front-right
pub const TURN_RIGHT: &[Step] = &[
    Step::set(BackRight, Lower, Angle::DEG120),
    Step::set(BackRight, Upper, Angle::DEG45),
    P,
    Step::set(BackRight, Lower, Angle::DEG90),
    P,
    Step::set(BackLeft, Lower, Angle::DEG120),
    Step::set(BackLeft, Upper, Angle::DEG45),
    P,
    Step::set(BackLeft, Lower, Angle::DEG90),
    P,
    Step::set(FrontLeft, Lower, Angle::DEG120),
    Step::set(FrontLeft, Upper, Angle::DEG45),
    P,
    Step::set(FrontLeft, Lower, Angle::DEG90),
    P,
    Step::set(FrontRight, Lower, Angle::DEG120),
    Step::set(FrontRight, Upper, Angle::DEG45),
    P,
    Step::set(FrontRight, Lower, Angle::DEG90),
    P,
    Step::Rest,
    P,
];
