//! Quadruped robot: servo board plus a delay source
//!
//! Plays maneuvers through the generic gait interpreter and dispatches the
//! public [`Command`] surface. Everything blocks; a maneuver runs to
//! completion or stops at the first failed write.

use tetrapod_core::gait::{self, Maneuver};
use tetrapod_core::traits::GaitTarget;
use tetrapod_core::{Angle, Command, Error, Joint};
use tetrapod_hal::{Delay, I2cBus};

use crate::servo::ServoBoard;

/// Four-legged robot on one servo board
pub struct Robot<B, D> {
    board: ServoBoard<B>,
    delay: D,
}

impl<B: I2cBus, D: Delay> Robot<B, D> {
    pub fn new(board: ServoBoard<B>, delay: D) -> Self {
        Self { board, delay }
    }

    /// Every joint to neutral
    pub fn rest(&mut self) -> Result<(), Error<B::Error>> {
        self.perform(Maneuver::Rest)
    }

    pub fn step_forward(&mut self) -> Result<(), Error<B::Error>> {
        self.perform(Maneuver::StepForward)
    }

    pub fn turn_left(&mut self) -> Result<(), Error<B::Error>> {
        self.perform(Maneuver::TurnLeft)
    }

    pub fn turn_right(&mut self) -> Result<(), Error<B::Error>> {
        self.perform(Maneuver::TurnRight)
    }

    /// Run a maneuver to completion
    pub fn perform(&mut self, maneuver: Maneuver) -> Result<(), Error<B::Error>> {
        gait::perform(maneuver, self)
    }

    /// Dispatch one command
    pub fn execute(&mut self, command: Command) -> Result<(), Error<B::Error>> {
        match command {
            Command::SetAddress(address) => {
                self.board.set_address(address);
                Ok(())
            }
            Command::SetServo { channel, angle } => self.board.set_channel_angle(channel, angle),
            Command::ReleaseServo(channel) => self.board.stop_channel(channel),
            Command::ReleaseAll => self.board.stop_all_channels(),
            Command::SetLegPart {
                limb,
                segment,
                angle,
            } => self.board.set_joint_angle(limb, segment, angle),
            Command::Perform(maneuver) => self.perform(maneuver),
        }
    }

    pub fn board(&self) -> &ServoBoard<B> {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut ServoBoard<B> {
        &mut self.board
    }

    pub fn into_parts(self) -> (ServoBoard<B>, D) {
        (self.board, self.delay)
    }
}

impl<B: I2cBus, D: Delay> GaitTarget for Robot<B, D> {
    type Error = Error<B::Error>;

    fn prepare(&mut self) -> Result<(), Self::Error> {
        self.board.ensure_ready()
    }

    fn set_joint(&mut self, joint: Joint, angle: Angle) -> Result<(), Self::Error> {
        self.board.set_channel_angle(joint.channel(), angle)
    }

    fn pause(&mut self, ms: u16) {
        self.delay.delay_ms(u32::from(ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{BusFault, Event, FakeBus, FakeDelay, Log};
    use tetrapod_core::config::{BusAddress, RobotConfig};
    use tetrapod_core::{Channel, InitPolicy, Limb, Segment};

    fn robot(log: &Log) -> Robot<FakeBus<'_>, FakeDelay<'_>> {
        Robot::new(ServoBoard::with_defaults(FakeBus::new(log)), FakeDelay::new(log))
    }

    fn w(register: u8, value: u8) -> Event {
        Event::Write(0x6C, register, value)
    }

    #[test]
    fn test_turn_left_first_phase() {
        let log = Log::new();
        let mut robot = robot(&log);

        robot.turn_left().unwrap();

        let events = log.events();
        assert_eq!(
            &events[6..14],
            &[
                // Back-left lower (SV1) to 120: pulse 328
                w(0x08, 0x48),
                w(0x09, 0x01),
                // Back-left upper (SV2) to 135: pulse 357
                w(0x0C, 0x65),
                w(0x0D, 0x01),
                Event::Pause(100),
                w(0x08, 0x10),
                w(0x09, 0x01),
                Event::Pause(100),
            ]
        );
        // 12 phase sets, 8 rest sets
        assert_eq!(log.writes(), 6 + 2 * 20);
        assert_eq!(log.pauses().as_slice(), &[100; 9]);
        assert_eq!(events.last(), Some(&Event::Pause(100)));
    }

    #[test]
    fn test_step_forward_schedule() {
        let log = Log::new();
        let mut robot = robot(&log);

        robot.step_forward().unwrap();

        assert_eq!(log.writes(), 6 + 2 * 20);
        assert_eq!(log.pauses().as_slice(), &[100; 10]);
        // Ends in the forward-shifted stance: right uppers at 30 (pulse 158)
        assert_eq!(log.register(0x10), Some(0x9E));
        assert_eq!(log.register(0x11), Some(0x00));
        assert_eq!(log.register(0x20), Some(0x9E));
        // Left uppers back at neutral
        assert_eq!(log.register(0x0C), Some(0x10));
        assert_eq!(log.register(0x1C), Some(0x10));
    }

    #[test]
    fn test_rest_touches_each_channel_once() {
        let log = Log::new();
        let mut robot = robot(&log);

        robot.rest().unwrap();

        let events = log.events();
        assert_eq!(events.len(), 6 + 16);
        for channel in Channel::ALL {
            let low = events[6..]
                .iter()
                .filter(|e| **e == w(channel.register(), 0x10))
                .count();
            let high = events[6..]
                .iter()
                .filter(|e| **e == w(channel.overflow_register(), 0x01))
                .count();
            assert_eq!((low, high), (1, 1), "channel {}", channel.number());
        }
        // Lower segments first: back-left lower is SV1
        assert_eq!(events[6], w(0x08, 0x10));
    }

    #[test]
    fn test_turns_return_to_neutral() {
        let log = Log::new();
        let mut robot = robot(&log);

        robot.turn_left().unwrap();
        robot.turn_right().unwrap();

        for channel in Channel::ALL {
            assert_eq!(log.register(channel.register()), Some(0x10));
            assert_eq!(log.register(channel.overflow_register()), Some(0x01));
        }
    }

    #[test]
    fn test_single_init_across_maneuvers() {
        let log = Log::new();
        let mut robot = robot(&log);

        robot.rest().unwrap();
        robot.step_forward().unwrap();
        robot.rest().unwrap();

        let init_writes = log
            .events()
            .iter()
            .filter(|e| **e == w(0xFE, 0x85))
            .count();
        assert_eq!(init_writes, 1);
        assert_eq!(log.writes(), 6 + 16 + 40 + 16);
    }

    #[test]
    fn test_bus_failure_aborts_maneuver() {
        let log = Log::new();
        let mut robot = Robot::new(
            ServoBoard::with_defaults(FakeBus::failing_after(&log, 6 + 5)),
            FakeDelay::new(&log),
        );

        assert_eq!(robot.turn_left(), Err(Error::BusWriteFailure(BusFault)));

        let events = log.events();
        assert_eq!(log.writes(), 11);
        assert_eq!(log.pauses().as_slice(), &[100]);
        assert_eq!(events.last(), Some(&w(0x08, 0x10)));
    }

    #[test]
    fn test_explicit_policy_blocks_maneuver() {
        let log = Log::new();
        let config = RobotConfig {
            init: InitPolicy::Explicit,
            ..RobotConfig::new()
        };
        let mut robot = Robot::new(
            ServoBoard::new(FakeBus::new(&log), &config),
            FakeDelay::new(&log),
        );

        assert_eq!(robot.step_forward(), Err(Error::NotInitialized));
        assert!(log.events().is_empty());

        robot.board_mut().initialize().unwrap();
        robot.rest().unwrap();
        assert_eq!(log.writes(), 6 + 16);
    }

    #[test]
    fn test_execute_commands() {
        let log = Log::new();
        let mut robot = robot(&log);

        robot
            .execute(Command::SetAddress(BusAddress::BOARD_2))
            .unwrap();
        robot
            .execute(Command::set_leg_part(Limb::FrontRight, Segment::Lower, 90).unwrap())
            .unwrap();
        robot.execute(Command::release_servo(8).unwrap()).unwrap();

        let events = log.events();
        assert_eq!(events.len(), 6 + 2 + 2);
        assert_eq!(events[0], Event::Write(0x6D, 0xFE, 0x85));
        // Front-right lower is SV8
        assert_eq!(
            &events[6..],
            &[
                Event::Write(0x6D, 0x24, 0x10),
                Event::Write(0x6D, 0x25, 0x01),
                Event::Write(0x6D, 0x24, 0x00),
                Event::Write(0x6D, 0x25, 0x00),
            ]
        );
    }

    #[test]
    fn test_release_all_skips_init() {
        let log = Log::new();
        let mut robot = robot(&log);

        robot.execute(Command::ReleaseAll).unwrap();

        assert_eq!(log.writes(), 16);
        assert!(!robot.board().init_state().is_ready());
    }

    #[test]
    fn test_into_parts() {
        let log = Log::new();
        let mut robot = robot(&log);
        robot.perform(Maneuver::Rest).unwrap();

        let (board, _delay) = robot.into_parts();
        assert!(board.init_state().is_ready());
        assert_eq!(board.address(), BusAddress::BOARD_1);
    }
}
