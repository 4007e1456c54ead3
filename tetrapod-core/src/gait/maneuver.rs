//! Named maneuvers

use core::fmt;
use core::str::FromStr;

use super::step::Step;
use super::tables;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named, fixed choreography
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Maneuver {
    /// Stand with every joint at neutral
    Rest,
    /// Walk one step forward
    StepForward,
    /// Pivot counter-clockwise, then stand
    TurnLeft,
    /// Pivot clockwise, then stand
    TurnRight,
}

/// Name that does not match any maneuver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownManeuver;

impl Maneuver {
    /// All maneuvers
    pub const ALL: [Maneuver; 4] = [
        Maneuver::Rest,
        Maneuver::StepForward,
        Maneuver::TurnLeft,
        Maneuver::TurnRight,
    ];

    /// Choreography table
    pub const fn steps(self) -> &'static [Step] {
        match self {
            Maneuver::Rest => tables::REST,
            Maneuver::StepForward => tables::STEP_FORWARD,
            Maneuver::TurnLeft => tables::TURN_LEFT,
            Maneuver::TurnRight => tables::TURN_RIGHT,
        }
    }

    /// Configuration name
    pub const fn name(self) -> &'static str {
        match self {
            Maneuver::Rest => "rest",
            Maneuver::StepForward => "step_forward",
            Maneuver::TurnLeft => "turn_left",
            Maneuver::TurnRight => "turn_right",
        }
    }

    /// Total time spent in pauses, in ms
    pub fn duration_ms(self) -> u32 {
        self.steps()
            .iter()
            .map(|step| match step {
                Step::Pause { ms } => *ms as u32,
                Step::Rest => Maneuver::Rest.duration_ms(),
                Step::Set { .. } => 0,
            })
            .sum()
    }

    /// Number of joint writes issued, rest poses expanded
    pub fn set_count(self) -> usize {
        self.steps()
            .iter()
            .map(|step| match step {
                Step::Set { .. } => 1,
                Step::Rest => Maneuver::Rest.set_count(),
                Step::Pause { .. } => 0,
            })
            .sum()
    }
}

impl FromStr for Maneuver {
    type Err = UnknownManeuver;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rest" | "stand" => Ok(Maneuver::Rest),
            "step_forward" | "forward" => Ok(Maneuver::StepForward),
            "turn_left" | "left" => Ok(Maneuver::TurnLeft),
            "turn_right" | "right" => Ok(Maneuver::TurnRight),
            _ => Err(UnknownManeuver),
        }
    }
}

impl fmt::Display for Maneuver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
