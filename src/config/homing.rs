//! Homing calibration from TOML.

use serde::Deserialize;

use super::units::Microseconds;

/// Calibration for the homing pass.
///
/// Every field is rig geometry: the over-travel must exceed the longest possible
/// distance to the end-stop, and the back-offs place the work origin. None of them
/// have serde defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HomingConfig {
    /// Step pairs driven toward the end-stops (both axes together).
    pub over_travel_steps: u32,

    /// Steps X travels off its stop to reach the work origin.
    pub back_off_x_steps: u32,

    /// Steps Y travels off its stop to reach the work origin.
    pub back_off_y_steps: u32,

    /// Extra wait after each homing step (on top of the step delay).
    #[serde(rename = "slow_step_delay_us")]
    pub slow_step_delay: Microseconds,
}

impl HomingConfig {
    /// Longest back-off of the two axes.
    pub fn longest_back_off(&self) -> u32 {
        self.back_off_x_steps.max(self.back_off_y_steps)
    }
}
