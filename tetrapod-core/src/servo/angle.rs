//! Validated servo angles

use crate::error::InvalidAngle;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Servo angle in whole degrees, always within 0-180
///
/// Construct with [`Angle::new`] at the boundary; everything downstream can
/// rely on the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u16", into = "u16"))]
pub struct Angle(u8);

impl Angle {
    /// Largest legal angle
    pub const MAX_DEGREES: u16 = 180;

    pub const DEG0: Self = Self(0);
    pub const DEG30: Self = Self(30);
    pub const DEG45: Self = Self(45);
    pub const DEG60: Self = Self(60);
    pub const DEG75: Self = Self(75);
    pub const DEG90: Self = Self(90);
    pub const DEG105: Self = Self(105);
    pub const DEG120: Self = Self(120);
    pub const DEG135: Self = Self(135);
    pub const DEG150: Self = Self(150);
    pub const DEG180: Self = Self(180);

    /// Rest position of every joint
    pub const NEUTRAL: Self = Self::DEG90;

    /// Named angles offered to callers (multiples of 15 from 30 to 150)
    pub const PRESETS: [Self; 9] = [
        Self::DEG30,
        Self::DEG45,
        Self::DEG60,
        Self::DEG75,
        Self::DEG90,
        Self::DEG105,
        Self::DEG120,
        Self::DEG135,
        Self::DEG150,
    ];

    /// Validate a raw degree value
    pub const fn new(degrees: u16) -> Result<Self, InvalidAngle> {
        if degrees > Self::MAX_DEGREES {
            Err(InvalidAngle(degrees))
        } else {
            Ok(Self(degrees as u8))
        }
    }

    /// Get the angle in degrees
    pub const fn degrees(self) -> u16 {
        self.0 as u16
    }
}

impl Default for Angle {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl TryFrom<u16> for Angle {
    type Error = InvalidAngle;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        Self::new(degrees)
    }
}

impl From<Angle> for u16 {
    fn from(angle: Angle) -> Self {
        angle.degrees()
    }
}
