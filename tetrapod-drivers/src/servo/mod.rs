//! Servo abstraction over the PWM chip

pub mod board;

pub use board::ServoBoard;
