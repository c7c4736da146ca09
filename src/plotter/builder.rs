//! Builder pattern for Plotter.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, StatefulOutputPin};

use crate::axis::{Axis, AxisDirection, AxisId};
use crate::config::{validate_config, PlotterConfig};
use crate::error::{ConfigError, Error, Result};

use super::controller::Plotter;
use super::state::Unhomed;

/// Builder for creating Plotter instances.
pub struct PlotterBuilder<STEP, DIR, DELAY>
where
    STEP: StatefulOutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    x_pins: Option<(STEP, DIR)>,
    y_pins: Option<(STEP, DIR)>,
    delay: Option<DELAY>,
    config: Option<PlotterConfig>,
}

impl<STEP, DIR, DELAY> Default for PlotterBuilder<STEP, DIR, DELAY>
where
    STEP: StatefulOutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<STEP, DIR, DELAY> PlotterBuilder<STEP, DIR, DELAY>
where
    STEP: StatefulOutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            x_pins: None,
            y_pins: None,
            delay: None,
            config: None,
        }
    }

    /// Set the X axis STEP and DIR pins.
    pub fn x_axis(mut self, step_pin: STEP, dir_pin: DIR) -> Self {
        self.x_pins = Some((step_pin, dir_pin));
        self
    }

    /// Set the Y axis STEP and DIR pins.
    pub fn y_axis(mut self, step_pin: STEP, dir_pin: DIR) -> Self {
        self.y_pins = Some((step_pin, dir_pin));
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the configuration.
    pub fn config(mut self, config: PlotterConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the Plotter.
    ///
    /// Both direction lines are driven to Positive, the power-on direction.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing, the configuration is invalid,
    /// or a direction line cannot be written.
    pub fn build(self) -> Result<Plotter<STEP, DIR, DELAY, Unhomed>> {
        let (x_step, x_dir) = self
            .x_pins
            .ok_or(Error::Config(ConfigError::MissingField("x_axis")))?;
        let (y_step, y_dir) = self
            .y_pins
            .ok_or(Error::Config(ConfigError::MissingField("y_axis")))?;
        let delay = self
            .delay
            .ok_or(Error::Config(ConfigError::MissingField("delay")))?;
        let config = self
            .config
            .ok_or(Error::Config(ConfigError::MissingField("config")))?;

        validate_config(&config)?;

        let mut x = Axis::new(
            AxisId::X,
            x_step,
            x_dir,
            config.axes.axis(AxisId::X).invert_direction,
        );
        let mut y = Axis::new(
            AxisId::Y,
            y_step,
            y_dir,
            config.axes.axis(AxisId::Y).invert_direction,
        );
        x.drive_direction(AxisDirection::Positive)?;
        y.drive_direction(AxisDirection::Positive)?;

        Ok(Plotter::from_parts(x, y, delay, config))
    }
}

impl<STEP, DIR, DELAY> Plotter<STEP, DIR, DELAY, Unhomed>
where
    STEP: StatefulOutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// Start building a plotter.
    pub fn builder() -> PlotterBuilder<STEP, DIR, DELAY> {
        PlotterBuilder::new()
    }
}
