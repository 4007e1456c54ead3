//! Embedded robot configuration
//!
//! `robot.toml` is compiled into the image and checked by the build
//! script, so parsing only fails if the two parsers disagree.

use defmt::*;

use tetrapod_core::config::{parse_config, RobotConfig};

const EMBEDDED_CONFIG: &str = include_str!("../robot.toml");

/// Parse the embedded configuration, falling back to defaults
pub fn load() -> RobotConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Config: board {:#x}, multiplier {}, zero offset {}, init {}",
                config.address.get(),
                config.calibration.multiplier(),
                config.calibration.zero_offset(),
                config.init
            );
            config
        }
        Err(e) => {
            warn!("robot.toml rejected ({}), using defaults", e);
            RobotConfig::new()
        }
    }
}
