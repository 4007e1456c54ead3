//! Eight-servo board
//!
//! Turns angles into register pairs on the PCA9685 and owns the chip's
//! initialization state. Every pose write goes through [`ServoBoard::ensure_ready`],
//! which applies the configured [`InitPolicy`]. Releasing servos never
//! initializes the chip.
//!
//! # Register pair
//!
//! Each channel owns two consecutive registers. The first takes the low
//! byte of the pulse count, the second takes the overflow flag (bit 8):
//!
//! ```text
//! pulse 272 on SV1: (0x08, 0x10) then (0x09, 0x01)
//! ```

use tetrapod_core::config::{BusAddress, RobotConfig};
use tetrapod_core::{
    Admission, Angle, Channel, Error, InitPolicy, InitState, Joint, Limb, Pulse, Segment,
    ServoCalibration,
};
use tetrapod_hal::I2cBus;

use crate::pwm::Pca9685;

/// PCA9685 servo board with eight hobby servos
pub struct ServoBoard<B> {
    chip: Pca9685<B>,
    calibration: ServoCalibration,
    policy: InitPolicy,
    state: InitState,
}

impl<B: I2cBus> ServoBoard<B> {
    /// Create a board from the robot configuration
    ///
    /// The chip is not touched until the first pose command (or an explicit
    /// [`initialize`](Self::initialize)).
    pub fn new(bus: B, config: &RobotConfig) -> Self {
        Self {
            chip: Pca9685::new(bus, config.address),
            calibration: config.calibration,
            policy: config.init,
            state: InitState::Uninitialized,
        }
    }

    /// Create a board at the default address with default calibration
    pub fn with_defaults(bus: B) -> Self {
        Self::new(bus, &RobotConfig::new())
    }

    pub fn address(&self) -> BusAddress {
        self.chip.address()
    }

    /// Direct subsequent writes at another board
    ///
    /// The init state is kept: the sequence runs once per board handle,
    /// whatever address it was sent to.
    pub fn set_address(&mut self, address: BusAddress) {
        self.chip.set_address(address);
    }

    pub fn calibration(&self) -> ServoCalibration {
        self.calibration
    }

    /// Use another servo model's calibration for subsequent writes
    pub fn set_calibration(&mut self, calibration: ServoCalibration) {
        self.calibration = calibration;
    }

    pub fn policy(&self) -> InitPolicy {
        self.policy
    }

    pub fn init_state(&self) -> InitState {
        self.state
    }

    /// Bring the chip up if it is not already
    ///
    /// The state only becomes `Ready` when the whole sequence was written.
    pub fn initialize(&mut self) -> Result<(), Error<B::Error>> {
        if self.state.is_ready() {
            return Ok(());
        }
        self.chip.initialize().map_err(Error::BusWriteFailure)?;
        self.state = InitState::Ready;
        Ok(())
    }

    /// Apply the init policy before a pose write
    pub fn ensure_ready(&mut self) -> Result<(), Error<B::Error>> {
        match self.policy.admit(self.state) {
            Admission::Proceed => Ok(()),
            Admission::Initialize => self.initialize(),
            Admission::Refuse => Err(Error::NotInitialized),
        }
    }

    /// Drive a channel to an angle
    pub fn set_channel_angle(
        &mut self,
        channel: Channel,
        angle: Angle,
    ) -> Result<(), Error<B::Error>> {
        self.ensure_ready()?;
        self.write_pulse(channel, self.calibration.pulse(angle))
    }

    /// Drive a channel from raw numbers (1-based channel, degrees)
    ///
    /// Both values are checked before anything is written.
    pub fn set_servo(&mut self, channel: u8, degrees: u16) -> Result<(), Error<B::Error>> {
        let channel = Channel::from_number(channel)?;
        let angle = Angle::new(degrees)?;
        self.set_channel_angle(channel, angle)
    }

    /// Drive one joint to an angle
    pub fn set_joint_angle(
        &mut self,
        limb: Limb,
        segment: Segment,
        angle: Angle,
    ) -> Result<(), Error<B::Error>> {
        self.set_channel_angle(Joint::new(limb, segment).channel(), angle)
    }

    /// Stop driving a channel
    pub fn stop_channel(&mut self, channel: Channel) -> Result<(), Error<B::Error>> {
        self.write_pulse(channel, Pulse::OFF)
    }

    /// Stop driving every channel, in ascending register order
    pub fn stop_all_channels(&mut self) -> Result<(), Error<B::Error>> {
        for channel in Channel::ALL {
            self.stop_channel(channel)?;
        }
        Ok(())
    }

    fn write_pulse(&mut self, channel: Channel, pulse: Pulse) -> Result<(), Error<B::Error>> {
        self.chip
            .write_register(channel.register(), pulse.low_byte())
            .map_err(Error::BusWriteFailure)?;
        self.chip
            .write_register(channel.overflow_register(), pulse.overflow_byte())
            .map_err(Error::BusWriteFailure)
    }

    /// Release the underlying bus
    pub fn release(self) -> B {
        self.chip.release()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{BusFault, Event, FakeBus, Log};

    const INIT: [Event; 6] = [
        Event::Write(0x6C, 0xFE, 0x85),
        Event::Write(0x6C, 0xFA, 0x00),
        Event::Write(0x6C, 0xFB, 0x00),
        Event::Write(0x6C, 0xFC, 0x00),
        Event::Write(0x6C, 0xFD, 0x00),
        Event::Write(0x6C, 0x00, 0x01),
    ];

    fn explicit() -> RobotConfig {
        RobotConfig {
            init: InitPolicy::Explicit,
            ..RobotConfig::new()
        }
    }

    #[test]
    fn test_first_pose_initializes_once() {
        let log = Log::new();
        let mut board = ServoBoard::with_defaults(FakeBus::new(&log));
        assert_eq!(board.init_state(), InitState::Uninitialized);

        board.set_channel_angle(Channel::Sv1, Angle::NEUTRAL).unwrap();
        board.set_channel_angle(Channel::Sv2, Angle::DEG45).unwrap();

        let events = log.events();
        assert_eq!(&events[..6], &INIT);
        assert_eq!(
            &events[6..],
            &[
                Event::Write(0x6C, 0x08, 0x10),
                Event::Write(0x6C, 0x09, 0x01),
                Event::Write(0x6C, 0x0C, 0xBB),
                Event::Write(0x6C, 0x0D, 0x00),
            ]
        );
        assert!(board.init_state().is_ready());
    }

    #[test]
    fn test_full_deflection_sets_overflow() {
        let log = Log::new();
        let mut board = ServoBoard::with_defaults(FakeBus::new(&log));
        board.initialize().unwrap();
        log.clear();

        board.set_channel_angle(Channel::Sv8, Angle::DEG180).unwrap();

        // 180 * 100 * 189 / 10000 + 0x66 = 442
        assert_eq!(
            log.events().as_slice(),
            &[Event::Write(0x6C, 0x24, 0xBA), Event::Write(0x6C, 0x25, 0x01)]
        );
    }

    #[test]
    fn test_joint_resolves_channel() {
        let log = Log::new();
        let mut board = ServoBoard::with_defaults(FakeBus::new(&log));
        board.initialize().unwrap();
        log.clear();

        board
            .set_joint_angle(Limb::FrontLeft, Segment::Upper, Angle::NEUTRAL)
            .unwrap();

        // Front-left upper is channel 6
        assert_eq!(
            log.events().as_slice(),
            &[Event::Write(0x6C, 0x1C, 0x10), Event::Write(0x6C, 0x1D, 0x01)]
        );
    }

    #[test]
    fn test_raw_values_checked_before_init() {
        let log = Log::new();
        let mut board = ServoBoard::with_defaults(FakeBus::new(&log));

        assert_eq!(board.set_servo(1, 181), Err(Error::InvalidAngle(181)));
        assert_eq!(board.set_servo(9, 90), Err(Error::InvalidChannel(9)));
        assert_eq!(log.writes(), 0);
        assert_eq!(board.init_state(), InitState::Uninitialized);

        board.set_servo(8, 90).unwrap();
        assert_eq!(log.writes(), 8);
    }

    #[test]
    fn test_stop_all_channels() {
        let log = Log::new();
        let mut board = ServoBoard::with_defaults(FakeBus::new(&log));

        board.stop_all_channels().unwrap();

        let events = log.events();
        assert_eq!(events.len(), 16);
        for (i, pair) in events.chunks(2).enumerate() {
            let register = 0x08 + 4 * i as u8;
            assert_eq!(
                pair,
                &[
                    Event::Write(0x6C, register, 0x00),
                    Event::Write(0x6C, register + 1, 0x00)
                ]
            );
        }
        // Releasing never brings the chip up
        assert_eq!(board.init_state(), InitState::Uninitialized);
    }

    #[test]
    fn test_explicit_policy_refuses_until_initialized() {
        let log = Log::new();
        let mut board = ServoBoard::new(FakeBus::new(&log), &explicit());

        assert_eq!(
            board.set_channel_angle(Channel::Sv3, Angle::DEG60),
            Err(Error::NotInitialized)
        );
        assert_eq!(log.writes(), 0);

        board.stop_channel(Channel::Sv3).unwrap();
        assert_eq!(log.writes(), 2);

        board.initialize().unwrap();
        board.set_channel_angle(Channel::Sv3, Angle::DEG60).unwrap();
        assert_eq!(log.writes(), 2 + 6 + 2);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let log = Log::new();
        let mut board = ServoBoard::with_defaults(FakeBus::new(&log));

        board.initialize().unwrap();
        board.initialize().unwrap();
        board.ensure_ready().unwrap();

        assert_eq!(log.writes(), 6);
    }

    #[test]
    fn test_failed_init_retries() {
        let log = Log::new();
        let mut board = ServoBoard::with_defaults(FakeBus::failing_after(&log, 3));

        assert_eq!(
            board.set_channel_angle(Channel::Sv1, Angle::NEUTRAL),
            Err(Error::BusWriteFailure(BusFault))
        );
        assert_eq!(board.init_state(), InitState::Uninitialized);
        assert_eq!(log.writes(), 3);

        log.heal();
        log.clear();
        board.set_channel_angle(Channel::Sv1, Angle::NEUTRAL).unwrap();

        assert_eq!(&log.events()[..6], &INIT);
        assert_eq!(log.writes(), 8);
    }

    #[test]
    fn test_address_change_keeps_init_state() {
        let log = Log::new();
        let mut board = ServoBoard::with_defaults(FakeBus::new(&log));
        board.set_channel_angle(Channel::Sv1, Angle::NEUTRAL).unwrap();

        board.set_address(BusAddress::BOARD_2);
        assert_eq!(board.address(), BusAddress::BOARD_2);
        assert!(board.init_state().is_ready());

        log.clear();
        board.set_channel_angle(Channel::Sv1, Angle::NEUTRAL).unwrap();

        // No second init sequence, just the pulse pair at the new address
        assert_eq!(
            log.events().as_slice(),
            &[Event::Write(0x6D, 0x08, 0x10), Event::Write(0x6D, 0x09, 0x01)]
        );
    }

    #[test]
    fn test_calibration_preset() {
        let log = Log::new();
        let mut board = ServoBoard::with_defaults(FakeBus::new(&log));
        board.set_calibration(ServoCalibration::FS90);
        board.initialize().unwrap();
        log.clear();

        board.set_channel_angle(Channel::Sv1, Angle::NEUTRAL).unwrap();

        // 90 * 100 * 226 / 10000 + 0x66 = 305
        assert_eq!(
            log.events().as_slice(),
            &[Event::Write(0x6C, 0x08, 0x31), Event::Write(0x6C, 0x09, 0x01)]
        );
    }
}
