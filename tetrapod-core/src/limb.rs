//! Limbs, segments and the joint wiring table
//!
//! Each leg has an upper (hip) and lower (knee) joint. The wiring of joints
//! to servo headers is fixed by the robot kit and the gait tables depend on
//! it, so it is encoded here as a total match rather than configuration.

use crate::servo::{Channel, CHANNEL_COUNT};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the four legs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Limb {
    FrontLeft,
    FrontRight,
    BackLeft,
    BackRight,
}

impl Limb {
    /// All limbs
    pub const ALL: [Limb; 4] = [
        Limb::FrontLeft,
        Limb::FrontRight,
        Limb::BackLeft,
        Limb::BackRight,
    ];
}

/// Joint position along a leg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Segment {
    /// Hip joint, swings the leg fore and aft
    Upper,
    /// Knee joint, lifts the foot
    Lower,
}

impl Segment {
    /// All segments
    pub const ALL: [Segment; 2] = [Segment::Upper, Segment::Lower];
}

/// A single joint, addressed by limb and segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Joint {
    pub limb: Limb,
    pub segment: Segment,
}

impl Joint {
    /// Every joint, lower segments first (the rest pose order)
    pub const ALL: [Joint; CHANNEL_COUNT] = [
        Joint::new(Limb::BackLeft, Segment::Lower),
        Joint::new(Limb::BackRight, Segment::Lower),
        Joint::new(Limb::FrontLeft, Segment::Lower),
        Joint::new(Limb::FrontRight, Segment::Lower),
        Joint::new(Limb::BackLeft, Segment::Upper),
        Joint::new(Limb::BackRight, Segment::Upper),
        Joint::new(Limb::FrontLeft, Segment::Upper),
        Joint::new(Limb::FrontRight, Segment::Upper),
    ];

    /// Create a joint
    pub const fn new(limb: Limb, segment: Segment) -> Self {
        Self { limb, segment }
    }

    /// Servo channel driving this joint
    ///
    /// | Limb        | Upper | Lower |
    /// |-------------|-------|-------|
    /// | front-left  | SV6   | SV5   |
    /// | front-right | SV7   | SV8   |
    /// | back-left   | SV2   | SV1   |
    /// | back-right  | SV3   | SV4   |
    pub const fn channel(self) -> Channel {
        match (self.limb, self.segment) {
            (Limb::FrontLeft, Segment::Upper) => Channel::Sv6,
            (Limb::FrontLeft, Segment::Lower) => Channel::Sv5,
            (Limb::FrontRight, Segment::Upper) => Channel::Sv7,
            (Limb::FrontRight, Segment::Lower) => Channel::Sv8,
            (Limb::BackLeft, Segment::Upper) => Channel::Sv2,
            (Limb::BackLeft, Segment::Lower) => Channel::Sv1,
            (Limb::BackRight, Segment::Upper) => Channel::Sv3,
            (Limb::BackRight, Segment::Lower) => Channel::Sv4,
        }
    }

    /// Joint wired to a channel (inverse of [`Joint::channel`])
    pub const fn for_channel(channel: Channel) -> Self {
        match channel {
            Channel::Sv1 => Self::new(Limb::BackLeft, Segment::Lower),
            Channel::Sv2 => Self::new(Limb::BackLeft, Segment::Upper),
            Channel::Sv3 => Self::new(Limb::BackRight, Segment::Upper),
            Channel::Sv4 => Self::new(Limb::BackRight, Segment::Lower),
            Channel::Sv5 => Self::new(Limb::FrontLeft, Segment::Lower),
            Channel::Sv6 => Self::new(Limb::FrontLeft, Segment::Upper),
            Channel::Sv7 => Self::new(Limb::FrontRight, Segment::Upper),
            Channel::Sv8 => Self::new(Limb::FrontRight, Segment::Lower),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_table() {
        let channel = |l, s| Joint::new(l, s).channel().number();

        assert_eq!(channel(Limb::FrontLeft, Segment::Upper), 6);
        assert_eq!(channel(Limb::FrontLeft, Segment::Lower), 5);
        assert_eq!(channel(Limb::FrontRight, Segment::Upper), 7);
        assert_eq!(channel(Limb::FrontRight, Segment::Lower), 8);
        assert_eq!(channel(Limb::BackLeft, Segment::Upper), 2);
        assert_eq!(channel(Limb::BackLeft, Segment::Lower), 1);
        assert_eq!(channel(Limb::BackRight, Segment::Upper), 3);
        assert_eq!(channel(Limb::BackRight, Segment::Lower), 4);
    }

    #[test]
    fn test_mapping_is_bijection() {
        let mut seen = [false; CHANNEL_COUNT];
        for limb in Limb::ALL {
            for segment in Segment::ALL {
                let n = Joint::new(limb, segment).channel().number() as usize;
                assert!(!seen[n - 1], "channel {} mapped twice", n);
                seen[n - 1] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_all_joints_distinct() {
        for (i, a) in Joint::ALL.iter().enumerate() {
            for b in &Joint::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_for_channel_inverts_mapping() {
        for channel in Channel::ALL {
            assert_eq!(Joint::for_channel(channel).channel(), channel);
        }
    }
}
