//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{HomingConfig, MotionConfig, PlotterConfig};

/// Validate a plotter configuration.
///
/// Checks:
/// - Step delay is non-zero
/// - Homing over-travel is non-zero and at least as long as either back-off
///
/// Current percentages are range-checked when they are constructed.
pub fn validate_config(config: &PlotterConfig) -> Result<()> {
    validate_motion(&config.motion)?;
    validate_homing(&config.homing)?;
    Ok(())
}

fn validate_motion(config: &MotionConfig) -> Result<()> {
    if config.step_delay.value() == 0 {
        return Err(Error::Config(ConfigError::InvalidStepDelay(
            config.step_delay.value(),
        )));
    }

    Ok(())
}

fn validate_homing(config: &HomingConfig) -> Result<()> {
    if config.over_travel_steps == 0 {
        return Err(Error::Config(ConfigError::InvalidOverTravel(
            config.over_travel_steps,
        )));
    }

    // An axis parked further from its stop than the over-travel never reaches it
    let back_off = config.longest_back_off();
    if config.over_travel_steps < back_off {
        return Err(Error::Config(ConfigError::OverTravelTooShort {
            over_travel: config.over_travel_steps,
            back_off,
        }));
    }

    Ok(())
}
