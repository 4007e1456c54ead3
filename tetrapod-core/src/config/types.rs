//! Robot configuration types

use heapless::Vec;

use crate::gait::Maneuver;
use crate::servo::ServoCalibration;
use crate::state::InitPolicy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum maneuvers in the startup routine
pub const MAX_ROUTINE: usize = 16;

/// Highest 7-bit I2C address
pub const MAX_BUS_ADDRESS: u8 = 0x7F;

/// 7-bit I2C address of the servo board
///
/// The board's address jumpers select one of four presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct BusAddress(u8);

/// Address above the 7-bit range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidAddress(pub u8);

impl core::fmt::Display for InvalidAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:#04x} is not a 7-bit I2C address", self.0)
    }
}

impl BusAddress {
    /// Factory default (no jumpers)
    pub const BOARD_1: Self = Self(0x6C);
    pub const BOARD_2: Self = Self(0x6D);
    pub const BOARD_3: Self = Self(0x6E);
    pub const BOARD_4: Self = Self(0x6F);

    /// Jumper-selectable presets
    pub const PRESETS: [Self; 4] = [Self::BOARD_1, Self::BOARD_2, Self::BOARD_3, Self::BOARD_4];

    /// Validate a raw 7-bit address
    pub const fn new(address: u8) -> Result<Self, InvalidAddress> {
        if address > MAX_BUS_ADDRESS {
            Err(InvalidAddress(address))
        } else {
            Ok(Self(address))
        }
    }

    /// Raw address
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for BusAddress {
    fn default() -> Self {
        Self::BOARD_1
    }
}

impl TryFrom<u8> for BusAddress {
    type Error = InvalidAddress;

    fn try_from(address: u8) -> Result<Self, Self::Error> {
        Self::new(address)
    }
}

impl From<BusAddress> for u8 {
    fn from(address: BusAddress) -> Self {
        address.0
    }
}

/// Complete robot configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RobotConfig {
    /// Servo board address
    pub address: BusAddress,
    /// Servo model calibration
    pub calibration: ServoCalibration,
    /// When the PWM chip is initialized
    pub init: InitPolicy,
    /// Maneuvers played at startup, in order
    pub routine: Vec<Maneuver, MAX_ROUTINE>,
    /// Pause between routine maneuvers
    pub routine_pause_ms: u16,
    /// Number of routine passes (0 = forever)
    pub routine_repeat: u8,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            address: BusAddress::default(),
            calibration: ServoCalibration::default(),
            init: InitPolicy::default(),
            routine: Vec::new(),
            routine_pause_ms: 500,
            routine_repeat: 1,
        }
    }
}

impl RobotConfig {
    /// Create a default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the routine runs until power-off
    pub fn repeats_forever(&self) -> bool {
        self.routine_repeat == 0
    }
}
