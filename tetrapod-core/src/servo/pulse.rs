//! Angle to PWM count quantization
//!
//! The pulse is the OFF count of a channel, in 4096ths of the PWM period:
//!
//! ```text
//! pulse = floor(degrees * 100 * multiplier / 10000) + zero_offset
//! ```
//!
//! Integer arithmetic throughout. The count is written as two registers:
//! the low byte, and an overflow register holding bit 8. Calibrations are
//! rejected unless the 180° pulse fits in nine bits, so the pair is always
//! an exact encoding of the count.

use core::fmt;

use super::angle::Angle;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest count representable by low byte plus one overflow bit
pub const MAX_PULSE: u16 = 0x1FF;

/// Servo model calibration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "CalibrationParams", into = "CalibrationParams")
)]
pub struct ServoCalibration {
    multiplier: u16,
    zero_offset: u16,
}

/// Calibration rejected because it cannot be encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationError {
    /// The 180° pulse exceeds [`MAX_PULSE`]
    PulseOutOfRange(u32),
}

impl fmt::Display for CalibrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalibrationError::PulseOutOfRange(p) => {
                write!(f, "full-scale pulse {} exceeds {}", p, MAX_PULSE)
            }
        }
    }
}

impl ServoCalibration {
    /// Board default, matches most 9g servos shipped with the kit
    pub const DEFAULT: Self = Self {
        multiplier: 189,
        zero_offset: 0x66,
    };

    /// TowerPro SG90
    pub const SG90: Self = Self {
        multiplier: 188,
        zero_offset: 0x66,
    };

    /// FeeTech FS90
    pub const FS90: Self = Self {
        multiplier: 226,
        zero_offset: 0x66,
    };

    /// Create a calibration, rejecting constants whose full-scale pulse
    /// does not fit the register pair
    pub const fn new(multiplier: u16, zero_offset: u16) -> Result<Self, CalibrationError> {
        let full_scale = raw_pulse(Angle::MAX_DEGREES, multiplier, zero_offset);
        if full_scale > MAX_PULSE as u32 {
            return Err(CalibrationError::PulseOutOfRange(full_scale));
        }
        Ok(Self {
            multiplier,
            zero_offset,
        })
    }

    /// Multiplier (count per degree, x100)
    pub const fn multiplier(&self) -> u16 {
        self.multiplier
    }

    /// Count at 0°
    pub const fn zero_offset(&self) -> u16 {
        self.zero_offset
    }

    /// Quantize an angle into a PWM count
    pub const fn pulse(&self, angle: Angle) -> Pulse {
        // Bounded by MAX_PULSE via `new`
        Pulse(raw_pulse(angle.degrees(), self.multiplier, self.zero_offset) as u16)
    }
}

impl Default for ServoCalibration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

const fn raw_pulse(degrees: u16, multiplier: u16, zero_offset: u16) -> u32 {
    let deg100 = degrees as u32 * 100;
    let scaled = deg100 * multiplier as u32 / 10_000;
    scaled + zero_offset as u32
}

/// Unvalidated calibration constants, as stored in configuration
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CalibrationParams {
    pub multiplier: u16,
    pub zero_offset: u16,
}

#[cfg(feature = "serde")]
impl TryFrom<CalibrationParams> for ServoCalibration {
    type Error = CalibrationError;

    fn try_from(p: CalibrationParams) -> Result<Self, Self::Error> {
        Self::new(p.multiplier, p.zero_offset)
    }
}

#[cfg(feature = "serde")]
impl From<ServoCalibration> for CalibrationParams {
    fn from(c: ServoCalibration) -> Self {
        Self {
            multiplier: c.multiplier,
            zero_offset: c.zero_offset,
        }
    }
}

/// Quantized PWM count for one channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pulse(u16);

impl Pulse {
    /// Released output (no pulse)
    pub const OFF: Self = Self(0);

    /// Raw count
    pub const fn count(self) -> u16 {
        self.0
    }

    /// Whether the count needs the overflow register
    pub const fn overflows(self) -> bool {
        self.0 > 0xFF
    }

    /// Byte written to the channel register
    ///
    /// Masked explicitly; the overflow register carries bit 8.
    pub const fn low_byte(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Byte written to the overflow register (`1` if the count exceeds 255)
    pub const fn overflow_byte(self) -> u8 {
        if self.overflows() {
            0x01
        } else {
            0x00
        }
    }
}
