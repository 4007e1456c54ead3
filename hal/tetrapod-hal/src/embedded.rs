//! Adapters from `embedded-hal` 1.0
//!
//! Wraps any blocking `embedded_hal::i2c::I2c` or
//! `embedded_hal::delay::DelayNs` implementation so it can drive the
//! servo stack. On the RP2040 this is `embassy_rp::i2c::I2c<Blocking>` and
//! `embassy_time::Delay`.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::{Delay, I2cBus};

/// [`I2cBus`] backed by an `embedded-hal` I2C master
#[derive(Debug)]
pub struct EmbeddedI2c<T> {
    inner: T,
}

impl<T> EmbeddedI2c<T> {
    /// Wrap an `embedded-hal` I2C master
    pub const fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Get the wrapped bus back
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: I2c<SevenBitAddress>> I2cBus for EmbeddedI2c<T> {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.inner.write(address, data)
    }
}

/// [`Delay`] backed by an `embedded-hal` delay provider
#[derive(Debug, Default)]
pub struct EmbeddedDelay<D> {
    inner: D,
}

impl<D> EmbeddedDelay<D> {
    /// Wrap an `embedded-hal` delay provider
    pub const fn new(inner: D) -> Self {
        Self { inner }
    }
}

impl<D: DelayNs> Delay for EmbeddedDelay<D> {
    fn delay_ms(&mut self, ms: u32) {
        self.inner.delay_ms(ms);
    }
}
