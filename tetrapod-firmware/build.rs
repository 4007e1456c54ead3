//! Build script for tetrapod-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates robot.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Servo constants the firmware ships with, as (name, multiplier)
const SERVO_MODELS: [(&str, i64); 5] = [
    ("default", 189),
    ("sg90", 188),
    ("SG90", 188),
    ("fs90", 226),
    ("FS90", 226),
];

const DEFAULT_ZERO_OFFSET: i64 = 0x66;

/// Largest pulse count a channel register pair can hold
const MAX_PULSE: i64 = 0x1FF;

const MANEUVERS: [&str; 8] = [
    "rest",
    "stand",
    "step_forward",
    "forward",
    "turn_left",
    "left",
    "turn_right",
    "right",
];

const MAX_ROUTINE: usize = 16;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate robot.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=robot.toml");

    let config_path = Path::new("robot.toml");

    if !config_path.exists() {
        fail(
            "robot.toml not found",
            &[
                "The firmware embeds a robot.toml configuration file.".to_string(),
                "Create one in the tetrapod-firmware directory.".to_string(),
            ],
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read robot.toml", &[e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let lines: Vec<String> = e.to_string().lines().map(str::to_string).collect();
            fail("Invalid TOML syntax in robot.toml", &lines);
        }
    };

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_board(&config, &mut errors);
    validate_servo(&config, &mut errors);
    validate_routine(&config, &mut errors);

    if !errors.is_empty() {
        fail("Invalid configuration in robot.toml", &errors);
    }

    println!("cargo:warning=robot.toml validated successfully");
}

/// Abort the build with a boxed error report
fn fail(title: &str, lines: &[String]) -> ! {
    let body = lines
        .iter()
        .map(|line| {
            let truncated = if line.len() > 62 {
                format!("{}...", &line[..59])
            } else {
                line.clone()
            };
            format!("║  • {:<62} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}

/// Only [board], [servo] and [routine] are allowed, and nothing at the root
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(root) = config.as_table() else {
        return;
    };

    for (name, value) in root {
        if !["board", "servo", "routine"].contains(&name.as_str()) {
            errors.push(format!("unknown section or root key '{}'", name));
        } else if !value.is_table() {
            errors.push(format!("[{}] must be a table", name));
        }
    }
}

/// Reject keys the firmware parser does not know
fn check_keys(section: &str, table: &toml::Table, allowed: &[&str], errors: &mut Vec<String>) {
    for key in table.keys() {
        if !allowed.contains(&key.as_str()) {
            errors.push(format!("[{}] unknown key '{}'", section, key));
        }
    }
}

fn validate_board(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(board) = config.get("board").and_then(|b| b.as_table()) else {
        return;
    };
    check_keys("board", board, &["address", "init"], errors);

    match board.get("address") {
        Some(toml::Value::Integer(addr)) if !(0..=0x7F).contains(addr) => {
            errors.push(format!("[board] address {:#x} is not a 7-bit address", addr));
        }
        Some(toml::Value::Integer(_)) | None => {}
        Some(_) => errors.push("[board] address must be an integer".to_string()),
    }

    match board.get("init") {
        Some(toml::Value::String(policy)) if !["lazy", "explicit"].contains(&policy.as_str()) => {
            errors.push("[board] init must be 'lazy' or 'explicit'".to_string());
        }
        Some(toml::Value::String(_)) | None => {}
        Some(_) => errors.push("[board] init must be a string".to_string()),
    }
}

fn validate_servo(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(servo) = config.get("servo").and_then(|s| s.as_table()) else {
        return;
    };
    check_keys("servo", servo, &["model", "multiplier", "zero_offset"], errors);

    let mut multiplier = SERVO_MODELS[0].1;
    if let Some(model) = servo.get("model") {
        let name = model.as_str().unwrap_or_default();
        match SERVO_MODELS.iter().find(|(n, _)| *n == name) {
            Some((_, m)) => multiplier = *m,
            None => errors.push("[servo] model must be 'default', 'sg90' or 'fs90'".to_string()),
        }
    }

    let mut zero_offset = DEFAULT_ZERO_OFFSET;
    for (key, slot) in [("multiplier", &mut multiplier), ("zero_offset", &mut zero_offset)] {
        match servo.get(key) {
            Some(toml::Value::Integer(v)) if (0..=i64::from(u16::MAX)).contains(v) => *slot = *v,
            Some(_) => errors.push(format!("[servo] {} must be an integer 0-65535", key)),
            None => {}
        }
    }

    // Same formula the firmware applies at full deflection
    let full = 180 * 100 * multiplier / 10_000 + zero_offset;
    if full > MAX_PULSE {
        errors.push(format!(
            "[servo] pulse at 180 degrees is {}, above {}",
            full, MAX_PULSE
        ));
    }
}

fn validate_routine(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(routine) = config.get("routine").and_then(|r| r.as_table()) else {
        return;
    };
    check_keys(
        "routine",
        routine,
        &["maneuvers", "pause_ms", "repeat", "forever"],
        errors,
    );

    match routine.get("maneuvers") {
        Some(toml::Value::Array(items)) => {
            if items.len() > MAX_ROUTINE {
                errors.push(format!(
                    "[routine] at most {} maneuvers are supported",
                    MAX_ROUTINE
                ));
            }
            for (i, item) in items.iter().enumerate() {
                match item.as_str() {
                    Some(name) if MANEUVERS.contains(&name) => {}
                    Some(name) => errors.push(format!("[routine] unknown maneuver '{}'", name)),
                    None => errors.push(format!("[routine] maneuver {} must be a string", i)),
                }
            }
        }
        Some(_) => errors.push("[routine] maneuvers must be an array".to_string()),
        None => {}
    }

    if let Some(v) = routine.get("pause_ms") {
        if !matches!(v.as_integer(), Some(0..=65535)) {
            errors.push("[routine] pause_ms must be 0-65535".to_string());
        }
    }
    if let Some(v) = routine.get("repeat") {
        if !matches!(v.as_integer(), Some(0..=255)) {
            errors.push("[routine] repeat must be 0-255".to_string());
        }
    }
    if let Some(v) = routine.get("forever") {
        if !v.is_bool() {
            errors.push("[routine] forever must be a boolean".to_string());
        }
    }
}
