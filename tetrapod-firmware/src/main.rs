//! Tetrapod - Quadruped Servo Firmware
//!
//! Drives an eight-servo walking robot through a PCA9685 board on the
//! RP2040's I2C0 (SDA GP4, SCL GP5). The robot plays the routine from the
//! embedded `robot.toml` and then holds its last pose.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::i2c::{self, I2c};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use tetrapod_core::InitPolicy;
use tetrapod_drivers::{Robot, ServoBoard};
use tetrapod_hal::{EmbeddedDelay, EmbeddedI2c, I2cConfig};

mod config;
mod routine;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Tetrapod firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();

    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2cConfig::STANDARD.frequency;
    let bus = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);

    let board = ServoBoard::new(EmbeddedI2c::new(bus), &config);
    let mut robot = Robot::new(board, EmbeddedDelay::new(Delay));

    if config.init == InitPolicy::Explicit {
        match robot.board_mut().initialize() {
            Ok(()) => info!("Servo board at {:#x} initialized", config.address.get()),
            Err(e) => {
                error!("Servo board init failed: {}", e);
                halt().await;
            }
        }
    }

    routine::run(&mut robot, &config).await;

    info!("Routine finished, holding pose");
    halt().await;
}

/// Park the executor forever
async fn halt() -> ! {
    loop {
        embassy_time::Timer::after_secs(3600).await;
    }
}
