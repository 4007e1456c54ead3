//! Board-agnostic core logic for the quadruped servo firmware
//!
//! This crate contains all logic that does not depend on a specific bus
//! or timer implementation:
//!
//! - Servo channels and angle-to-pulse quantization
//! - Limb/segment to channel mapping
//! - Gait choreography tables and the step interpreter
//! - Command surface and error kinds
//! - Configuration types and parsing

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod config;
pub mod error;
pub mod gait;
pub mod limb;
pub mod servo;
pub mod state;
pub mod traits;

pub use command::Command;
pub use error::{Error, ErrorKind};
pub use gait::{Maneuver, Step};
pub use limb::{Joint, Limb, Segment};
pub use servo::{Angle, Channel, Pulse, ServoCalibration};
pub use state::{Admission, InitPolicy, InitState};
