//! Driver initialization state
//!
//! The PWM chip powers up asleep with an unknown prescaler. It must be
//! brought up once before any pulse is meaningful. The state lives in the
//! servo board that owns the bus, never in a global.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether the chip has been brought up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitState {
    /// Power-on state; prescaler and mode not yet written
    #[default]
    Uninitialized,
    /// Init sequence completed successfully
    Ready,
}

impl InitState {
    /// Check if the chip is ready for pulse writes
    pub fn is_ready(self) -> bool {
        self == InitState::Ready
    }
}

/// When the init sequence is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InitPolicy {
    /// First pose command initializes the chip
    #[default]
    Lazy,
    /// Pose commands fail with `NotInitialized` until `initialize()` runs
    Explicit,
}

/// What a pose command has to do before writing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Admission {
    /// Chip is ready, write directly
    Proceed,
    /// Run the init sequence first
    Initialize,
    /// Refuse the command
    Refuse,
}

impl InitPolicy {
    /// Decide how a pose command is admitted in the given state
    pub fn admit(self, state: InitState) -> Admission {
        match (state, self) {
            (InitState::Ready, _) => Admission::Proceed,
            (InitState::Uninitialized, InitPolicy::Lazy) => Admission::Initialize,
            (InitState::Uninitialized, InitPolicy::Explicit) => Admission::Refuse,
        }
    }
}
