//! Minimal TOML parser for robot configuration
//!
//! Handles only the subset used by `robot.toml`, without allocation.
//!
//! Supported features:
//! - `[section]` headers (`board`, `servo`, `routine`)
//! - Key = value pairs (integer, `0x` hex integer, boolean, string)
//! - Arrays of strings: `maneuvers = ["rest", "step_forward"]`
//! - Comments (# ...)
//!
//! Unknown sections and keys are errors, so a typo cannot silently fall
//! back to a default.

use core::str::FromStr;

use super::types::{BusAddress, RobotConfig};
use crate::gait::Maneuver;
use crate::servo::ServoCalibration;
use crate::state::InitPolicy;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown section header, or key outside a section
    InvalidSection,
    /// Key not valid in its section
    UnknownKey,
    /// Value has the wrong type or is out of range
    InvalidValue,
    /// Too many items (exceeded heapless capacity)
    TooManyItems,
    /// Servo constants produce a pulse that cannot be encoded
    CalibrationOutOfRange,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Board,
    Servo,
    Routine,
}

/// Parse TOML configuration into RobotConfig
pub fn parse_config(input: &str) -> Result<RobotConfig, ParseError> {
    let mut config = RobotConfig::new();
    let mut section = Section::Root;

    // Calibration is validated as a pair once the whole file is read
    let mut multiplier = config.calibration.multiplier();
    let mut zero_offset = config.calibration.zero_offset();

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Check for section header
        if line.starts_with('[') {
            let end = line.find(']').ok_or(ParseError::InvalidSection)?;
            section = parse_section_header(&line[1..end])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue)?;

        match (section, key) {
            (Section::Root, _) => return Err(ParseError::InvalidSection),

            (Section::Board, "address") => {
                let raw = parse_int::<u8>(value)?;
                config.address = BusAddress::new(raw).map_err(|_| ParseError::InvalidValue)?;
            }
            (Section::Board, "init") => {
                config.init = parse_init_policy(parse_string(value)?)?;
            }

            (Section::Servo, "model") => {
                let preset = parse_servo_model(parse_string(value)?)?;
                multiplier = preset.multiplier();
                zero_offset = preset.zero_offset();
            }
            (Section::Servo, "multiplier") => multiplier = parse_int(value)?,
            (Section::Servo, "zero_offset") => zero_offset = parse_int(value)?,

            (Section::Routine, "maneuvers") => parse_maneuvers(value, &mut config)?,
            (Section::Routine, "pause_ms") => config.routine_pause_ms = parse_int(value)?,
            (Section::Routine, "repeat") => config.routine_repeat = parse_int(value)?,
            (Section::Routine, "forever") => {
                if parse_bool(value)? {
                    config.routine_repeat = 0;
                }
            }

            _ => return Err(ParseError::UnknownKey),
        }
    }

    config.calibration = ServoCalibration::new(multiplier, zero_offset)
        .map_err(|_| ParseError::CalibrationOutOfRange)?;

    Ok(config)
}

/// Parse section header like "board" or "servo"
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "board" => Ok(Section::Board),
        "servo" => Ok(Section::Servo),
        "routine" => Ok(Section::Routine),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Split `key = value`, dropping any trailing comment
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = if let Some(hash_pos) = value.find('#') {
        // Make sure # is not inside a string
        let quote_count = value[..hash_pos].matches('"').count();
        if quote_count % 2 == 0 {
            value[..hash_pos].trim()
        } else {
            value
        }
    } else {
        value
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> Result<&str, ParseError> {
    if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
        Ok(&value[1..value.len() - 1])
    } else {
        // Allow unquoted strings for simple values
        Ok(value)
    }
}

/// Parse a decimal or `0x` hexadecimal integer
fn parse_int<T: TryFrom<u32>>(value: &str) -> Result<T, ParseError> {
    let raw = if let Some(hex) = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        u32::from_str_radix(hex, 16)
    } else {
        value.parse::<u32>()
    }
    .map_err(|_| ParseError::InvalidValue)?;

    T::try_from(raw).map_err(|_| ParseError::InvalidValue)
}

fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

fn parse_init_policy(value: &str) -> Result<InitPolicy, ParseError> {
    match value {
        "lazy" => Ok(InitPolicy::Lazy),
        "explicit" => Ok(InitPolicy::Explicit),
        _ => Err(ParseError::InvalidValue),
    }
}

fn parse_servo_model(value: &str) -> Result<ServoCalibration, ParseError> {
    match value {
        "default" => Ok(ServoCalibration::DEFAULT),
        "sg90" | "SG90" => Ok(ServoCalibration::SG90),
        "fs90" | "FS90" => Ok(ServoCalibration::FS90),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse `["rest", "step_forward", ...]` into the routine
fn parse_maneuvers(value: &str, config: &mut RobotConfig) -> Result<(), ParseError> {
    let value = value.trim();
    if !value.starts_with('[') || !value.ends_with(']') {
        return Err(ParseError::InvalidValue);
    }
    let inner = &value[1..value.len() - 1];

    config.routine.clear();
    for item in inner.split(',') {
        let item = item.trim();
        // Trailing comma
        if item.is_empty() {
            continue;
        }
        let name = parse_string(item)?;
        let maneuver = Maneuver::from_str(name).map_err(|_| ParseError::InvalidValue)?;
        config
            .routine
            .push(maneuver)
            .map_err(|_| ParseError::TooManyItems)?;
    }

    Ok(())
}
