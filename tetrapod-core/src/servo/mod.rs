//! Servo channels and angle quantization
//!
//! Maps a logical angle onto the PWM count written to a channel's register
//! pair on the driver chip.

pub mod angle;
pub mod channel;
pub mod pulse;

pub use angle::Angle;
pub use channel::{Channel, CHANNEL_COUNT, REGISTER_BASE, REGISTER_STRIDE};
pub use pulse::{CalibrationError, Pulse, ServoCalibration};
