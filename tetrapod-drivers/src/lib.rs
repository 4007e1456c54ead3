//! Hardware driver implementations
//!
//! This crate provides the three layers that turn angle commands into
//! register writes on the servo board:
//!
//! - PWM chip driver (PCA9685 init sequence and register writes)
//! - Servo board (channel angles, releases, joint mapping, lazy init)
//! - Robot (maneuver playback and command dispatch)

#![no_std]
#![deny(unsafe_code)]

pub mod pwm;
pub mod robot;
pub mod servo;

#[cfg(test)]
mod fake;

pub use pwm::Pca9685;
pub use robot::Robot;
pub use servo::ServoBoard;
