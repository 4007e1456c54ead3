//! Tetrapod Hardware Abstraction Layer
//!
//! This crate defines the two capabilities the servo stack consumes from
//! the platform: a register bus to write bytes to the PWM chip, and a
//! blocking delay used between gait phases.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  tetrapod-drivers (board, robot)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tetrapod-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  embedded-hal 1.0 implementations       │
//! │  (embassy-rp, linux-embedded-hal, ...)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cBus`] - I2C master writes
//! - [`delay::Delay`] - Blocking millisecond delay
//!
//! Any `embedded-hal` 1.0 bus or delay can be used through the adapters in
//! [`embedded`].

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod embedded;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use delay::Delay;
pub use embedded::{EmbeddedDelay, EmbeddedI2c};
pub use i2c::{I2cBus, I2cConfig};
