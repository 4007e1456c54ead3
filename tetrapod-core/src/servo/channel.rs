//! PWM output channels
//!
//! Each servo header on the board is wired to one LED output of the
//! PCA9685. The enum discriminant is the register of the output's
//! OFF count low byte; the next register holds the high byte.

use crate::error::InvalidChannel;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Register of the first servo channel (LED0_OFF_L)
pub const REGISTER_BASE: u8 = 0x08;

/// Address distance between consecutive channels
pub const REGISTER_STRIDE: u8 = 4;

/// Number of servo channels on the board
pub const CHANNEL_COUNT: usize = 8;

/// Servo channel, SV1 to SV8 as silkscreened on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Channel {
    Sv1 = 0x08,
    Sv2 = 0x0C,
    Sv3 = 0x10,
    Sv4 = 0x14,
    Sv5 = 0x18,
    Sv6 = 0x1C,
    Sv7 = 0x20,
    Sv8 = 0x24,
}

impl Channel {
    /// All channels in ascending register order
    pub const ALL: [Channel; CHANNEL_COUNT] = [
        Channel::Sv1,
        Channel::Sv2,
        Channel::Sv3,
        Channel::Sv4,
        Channel::Sv5,
        Channel::Sv6,
        Channel::Sv7,
        Channel::Sv8,
    ];

    /// Look up a channel by its 1-based number
    pub const fn from_number(number: u8) -> Result<Self, InvalidChannel> {
        if number == 0 || number as usize > CHANNEL_COUNT {
            return Err(InvalidChannel(number));
        }
        Ok(Self::ALL[(number - 1) as usize])
    }

    /// Look up a channel by its low-byte register offset
    pub const fn from_register(register: u8) -> Result<Self, InvalidChannel> {
        if register < REGISTER_BASE || (register - REGISTER_BASE) % REGISTER_STRIDE != 0 {
            return Err(InvalidChannel(register));
        }
        let index = ((register - REGISTER_BASE) / REGISTER_STRIDE) as usize;
        if index >= CHANNEL_COUNT {
            return Err(InvalidChannel(register));
        }
        Ok(Self::ALL[index])
    }

    /// 1-based channel number
    pub const fn number(self) -> u8 {
        (self.register() - REGISTER_BASE) / REGISTER_STRIDE + 1
    }

    /// Register receiving the pulse low byte
    pub const fn register(self) -> u8 {
        self as u8
    }

    /// Register receiving the overflow flag (bit 8 of the pulse)
    pub const fn overflow_register(self) -> u8 {
        self as u8 + 1
    }
}

impl TryFrom<u8> for Channel {
    type Error = InvalidChannel;

    /// Converts a 1-based channel number
    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::from_number(number)
    }
}
