//! PCA9685 16-channel PWM driver (I2C)
//!
//! The servo board uses eight of the chip's sixteen outputs. Every access is
//! a two-byte write: register address, then value. The chip is never read.
//!
//! # Bring-up
//!
//! The chip powers up asleep with outputs off. Initialization is:
//! 1. PRE_SCALE = 0x85 for the servo frame rate (only writable while asleep)
//! 2. ALL_LED_ON/OFF registers cleared, turning every output off
//! 3. MODE1 = 0x01 (ALLCALL, SLEEP cleared) to start the oscillator
//!
//! The driver itself does not guard against repeating the sequence; the
//! servo board tracks whether it has run.

use tetrapod_core::config::BusAddress;
use tetrapod_hal::I2cBus;

/// PCA9685 register addresses
pub mod reg {
    /// Mode register 1
    pub const MODE1: u8 = 0x00;
    /// All outputs, ON count low byte
    pub const ALL_LED_ON_L: u8 = 0xFA;
    /// All outputs, ON count high byte
    pub const ALL_LED_ON_H: u8 = 0xFB;
    /// All outputs, OFF count low byte
    pub const ALL_LED_OFF_L: u8 = 0xFC;
    /// All outputs, OFF count high byte
    pub const ALL_LED_OFF_H: u8 = 0xFD;
    /// Oscillator prescaler
    pub const PRE_SCALE: u8 = 0xFE;
}

/// Prescaler for the servo frame (nominally 50 Hz)
///
/// The servo calibration constants were measured against this value.
pub const PRESCALE_SERVO: u8 = 0x85;

/// MODE1 value: ALLCALL enabled, SLEEP cleared
pub const MODE1_WAKE: u8 = 0x01;

/// Register writes performed by [`Pca9685::initialize`], in order
pub const INIT_SEQUENCE: [(u8, u8); 6] = [
    (reg::PRE_SCALE, PRESCALE_SERVO),
    (reg::ALL_LED_ON_L, 0x00),
    (reg::ALL_LED_ON_H, 0x00),
    (reg::ALL_LED_OFF_L, 0x00),
    (reg::ALL_LED_OFF_H, 0x00),
    (reg::MODE1, MODE1_WAKE),
];

/// PCA9685 on an I2C bus
pub struct Pca9685<B> {
    bus: B,
    address: BusAddress,
}

impl<B: I2cBus> Pca9685<B> {
    /// Create a driver for the chip at `address`
    pub fn new(bus: B, address: BusAddress) -> Self {
        Self { bus, address }
    }

    /// Get the configured bus address
    pub fn address(&self) -> BusAddress {
        self.address
    }

    /// Direct subsequent writes at another chip
    pub fn set_address(&mut self, address: BusAddress) {
        self.address = address;
    }

    /// Send the bring-up sequence
    ///
    /// Stops at the first failed write.
    pub fn initialize(&mut self) -> Result<(), B::Error> {
        for (register, value) in INIT_SEQUENCE {
            self.write_register(register, value)?;
        }
        Ok(())
    }

    /// Write one register
    pub fn write_register(&mut self, register: u8, value: u8) -> Result<(), B::Error> {
        self.bus.write(self.address.get(), &[register, value])
    }

    /// Release the underlying bus
    pub fn release(self) -> B {
        self.bus
    }
}
