//! Startup routine playback

use defmt::*;
use embassy_time::Timer;

use tetrapod_core::config::RobotConfig;
use tetrapod_core::Command;
use tetrapod_drivers::Robot;
use tetrapod_hal::{Delay, I2cBus};

/// Play the configured maneuvers `routine_repeat` times (0 = forever)
///
/// A failed maneuver ends the routine and releases every servo so the
/// legs do not hold a half-finished phase.
pub async fn run<B, D>(robot: &mut Robot<B, D>, config: &RobotConfig)
where
    B: I2cBus,
    B::Error: Format,
    D: Delay,
{
    if config.routine.is_empty() {
        info!("No routine configured");
        return;
    }

    let mut pass: u32 = 0;
    while config.repeats_forever() || pass < u32::from(config.routine_repeat) {
        pass += 1;
        debug!("Routine pass {}", pass);

        for &maneuver in &config.routine {
            info!(
                "Maneuver {} ({} sets, {} ms)",
                maneuver.name(),
                maneuver.set_count(),
                maneuver.duration_ms()
            );

            if let Err(e) = robot.perform(maneuver) {
                error!("Maneuver {} aborted: {} ({})", maneuver.name(), e.kind(), e);
                if let Err(e) = robot.execute(Command::ReleaseAll) {
                    warn!("Release after failure also failed: {}", e.kind());
                }
                return;
            }
            trace!("Maneuver {} complete", maneuver.name());

            Timer::after_millis(u64::from(config.routine_pause_ms)).await;
        }
    }
}
