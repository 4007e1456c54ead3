//! PWM driver chips
//!
//! Only the PCA9685 is fitted to the servo board.

pub mod pca9685;

pub use pca9685::{Pca9685, INIT_SEQUENCE};
