//! Error kinds shared by every layer of the servo stack
//!
//! Bus failures carry the transport's own error. Range failures carry the
//! rejected raw value so it can be logged.

use core::fmt;

/// Errors raised while driving the servo board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The bus transport rejected a register write
    BusWriteFailure(E),
    /// Requested degrees outside 0-180
    InvalidAngle(u16),
    /// Raw channel number or register offset is not a servo channel
    InvalidChannel(u8),
    /// Command issued before `initialize()` with the explicit init policy
    NotInitialized,
}

/// Payload-free error discriminant, for logging and matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    /// Bus transport failure
    BusWriteFailure,
    /// Angle out of range
    InvalidAngle,
    /// Not a servo channel
    InvalidChannel,
    /// Board not initialized
    NotInitialized,
}

impl<E> Error<E> {
    /// Get the error kind without the payload
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::BusWriteFailure(_) => ErrorKind::BusWriteFailure,
            Error::InvalidAngle(_) => ErrorKind::InvalidAngle,
            Error::InvalidChannel(_) => ErrorKind::InvalidChannel,
            Error::NotInitialized => ErrorKind::NotInitialized,
        }
    }
}

/// Degrees outside the servo range 0-180
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidAngle(pub u16);

/// Raw value that does not name one of the eight servo channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidChannel(pub u8);

impl<E> From<InvalidAngle> for Error<E> {
    fn from(e: InvalidAngle) -> Self {
        Error::InvalidAngle(e.0)
    }
}

impl<E> From<InvalidChannel> for Error<E> {
    fn from(e: InvalidChannel) -> Self {
        Error::InvalidChannel(e.0)
    }
}

impl fmt::Display for InvalidAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "angle {} outside 0-180 degrees", self.0)
    }
}

impl fmt::Display for InvalidChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x} is not a servo channel", self.0)
    }
}
