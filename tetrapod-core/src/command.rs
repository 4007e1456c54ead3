//! Public command surface
//!
//! One variant per operation a host can request. Raw numbers are validated
//! before a command exists, so dispatch never sees an out-of-range value.

use crate::config::BusAddress;
use crate::error::{InvalidAngle, InvalidChannel};
use crate::gait::Maneuver;
use crate::limb::{Limb, Segment};
use crate::servo::{Angle, Channel};

/// A request for the servo board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Retarget subsequent writes at another board
    SetAddress(BusAddress),
    /// Drive one channel to an angle
    SetServo { channel: Channel, angle: Angle },
    /// Stop driving one channel
    ReleaseServo(Channel),
    /// Stop driving every channel
    ReleaseAll,
    /// Drive one joint to an angle
    SetLegPart {
        limb: Limb,
        segment: Segment,
        angle: Angle,
    },
    /// Run a maneuver to completion
    Perform(Maneuver),
}

/// Raw command argument out of range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Degrees outside 0-180
    Angle(InvalidAngle),
    /// Channel number outside 1-8
    Channel(InvalidChannel),
}

impl From<InvalidAngle> for CommandError {
    fn from(e: InvalidAngle) -> Self {
        CommandError::Angle(e)
    }
}

impl From<InvalidChannel> for CommandError {
    fn from(e: InvalidChannel) -> Self {
        CommandError::Channel(e)
    }
}

impl Command {
    /// Build a servo command from a 1-based channel number and raw degrees
    pub fn set_servo(channel: u8, degrees: u16) -> Result<Self, CommandError> {
        Ok(Command::SetServo {
            channel: Channel::from_number(channel)?,
            angle: Angle::new(degrees)?,
        })
    }

    /// Build a joint command from raw degrees
    pub fn set_leg_part(limb: Limb, segment: Segment, degrees: u16) -> Result<Self, CommandError> {
        Ok(Command::SetLegPart {
            limb,
            segment,
            angle: Angle::new(degrees)?,
        })
    }

    /// Build a release command from a 1-based channel number
    pub fn release_servo(channel: u8) -> Result<Self, CommandError> {
        Ok(Command::ReleaseServo(Channel::from_number(channel)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_constructors_validate() {
        assert_eq!(
            Command::set_servo(3, 45),
            Ok(Command::SetServo {
                channel: Channel::Sv3,
                angle: Angle::DEG45
            })
        );
        assert_eq!(
            Command::set_servo(9, 45),
            Err(CommandError::Channel(InvalidChannel(9)))
        );
        assert_eq!(
            Command::set_servo(1, 200),
            Err(CommandError::Angle(InvalidAngle(200)))
        );
        assert_eq!(
            Command::set_leg_part(Limb::BackLeft, Segment::Upper, 181),
            Err(CommandError::Angle(InvalidAngle(181)))
        );
        assert_eq!(
            Command::release_servo(0),
            Err(CommandError::Channel(InvalidChannel(0)))
        );
    }
}
