//! Gait target trait

use crate::limb::Joint;
use crate::servo::Angle;

/// Something a gait can be played on
///
/// Implemented by the robot driver over a real bus, and by recorders in
/// tests. Writes and pauses must take effect in call order.
pub trait GaitTarget {
    /// Error returned by a failed joint command
    type Error;

    /// Called once before the first step of a maneuver
    ///
    /// The servo board uses this to run its lazy init sequence.
    fn prepare(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Drive one joint to an angle
    fn set_joint(&mut self, joint: Joint, angle: Angle) -> Result<(), Self::Error>;

    /// Block for `ms` milliseconds
    fn pause(&mut self, ms: u16);
}

impl<T: GaitTarget + ?Sized> GaitTarget for &mut T {
    type Error = T::Error;

    fn prepare(&mut self) -> Result<(), Self::Error> {
        T::prepare(self)
    }

    fn set_joint(&mut self, joint: Joint, angle: Angle) -> Result<(), Self::Error> {
        T::set_joint(self, joint, angle)
    }

    fn pause(&mut self, ms: u16) {
        T::pause(self, ms)
    }
}
