//! Hardware abstraction traits
//!
//! These traits define the interface between the gait logic and the
//! servo board implementation.

pub mod gait;

pub use gait::GaitTarget;
