//! Plotter configuration - root configuration structure.

use serde::Deserialize;

use super::axes::AxesConfig;
use super::driver::DriverConfig;
use super::homing::HomingConfig;
use super::units::Microseconds;

/// Run-time stepping settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionConfig {
    /// Busy-wait after every step; the only limit on step rate.
    #[serde(rename = "step_delay_us", default = "default_step_delay")]
    pub step_delay: Microseconds,
}

fn default_step_delay() -> Microseconds {
    Microseconds(100)
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            step_delay: default_step_delay(),
        }
    }
}

/// Root configuration structure from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlotterConfig {
    /// Step pacing.
    #[serde(default)]
    pub motion: MotionConfig,

    /// Homing calibration (required).
    pub homing: HomingConfig,

    /// Driver bring-up settings.
    #[serde(default)]
    pub driver: DriverConfig,

    /// Per-axis wiring.
    #[serde(default)]
    pub axes: AxesConfig,
}

impl PlotterConfig {
    /// Configuration with the given homing calibration and defaults elsewhere.
    pub fn with_homing(homing: HomingConfig) -> Self {
        Self {
            motion: MotionConfig::default(),
            homing,
            driver: DriverConfig::default(),
            axes: AxesConfig::default(),
        }
    }

    /// Calibration of the reference rig: 100 us step delay, 100000 over-travel pairs,
    /// X back-off 40000, Y back-off 10000, 50 us slow delay.
    ///
    /// Only meaningful for that mechanism; other rigs must measure their own.
    pub fn reference_rig() -> Self {
        Self::with_homing(HomingConfig {
            over_travel_steps: 100_000,
            back_off_x_steps: 40_000,
            back_off_y_steps: 10_000,
            slow_step_delay: Microseconds(50),
        })
    }

    /// Step delay in microseconds.
    #[inline]
    pub fn step_delay_us(&self) -> u32 {
        self.motion.step_delay.value()
    }
}
