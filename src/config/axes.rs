//! Per-axis wiring options.

use serde::Deserialize;

use crate::axis::AxisId;

/// Wiring options for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisConfig {
    /// Invert direction pin logic (Positive drives the line low).
    #[serde(default)]
    pub invert_direction: bool,
}

/// Wiring options for both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxesConfig {
    /// Horizontal axis.
    #[serde(default)]
    pub x: AxisConfig,

    /// Vertical axis.
    #[serde(default)]
    pub y: AxisConfig,
}

impl AxesConfig {
    /// Get the options for one axis.
    pub fn axis(&self, id: AxisId) -> &AxisConfig {
        match id {
            AxisId::X => &self.x,
            AxisId::Y => &self.y,
        }
    }
}
