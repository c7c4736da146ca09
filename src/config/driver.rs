//! Motor driver bring-up settings from TOML.

use serde::Deserialize;

use super::units::Percent;

/// Reduced-power settings applied before homing.
///
/// Low current keeps the motors from overheating while they stall against the stops.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverConfig {
    /// Run current as a percentage of the driver's full scale.
    #[serde(default = "default_run_current")]
    pub run_current_percent: Percent,

    /// Standstill hold current.
    #[serde(default = "default_hold_current")]
    pub hold_current_percent: Percent,

    /// Ramp time from run to hold current.
    #[serde(default = "default_hold_delay")]
    pub hold_delay_percent: Percent,

    /// Enable the driver's load-adaptive current reduction.
    #[serde(default = "default_power_saving")]
    pub power_saving: bool,

    /// Output power level (0-255).
    #[serde(default = "default_power_level")]
    pub power_level: u8,
}

fn default_run_current() -> Percent {
    Percent::saturating(20)
}

fn default_hold_current() -> Percent {
    Percent::saturating(10)
}

fn default_hold_delay() -> Percent {
    Percent::saturating(10)
}

fn default_power_saving() -> bool {
    true
}

fn default_power_level() -> u8 {
    120
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            run_current_percent: default_run_current(),
            hold_current_percent: default_hold_current(),
            hold_delay_percent: default_hold_delay(),
            power_saving: default_power_saving(),
            power_level: default_power_level(),
        }
    }
}
