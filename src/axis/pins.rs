//! Step/direction line pair for one axis.

use embedded_hal::digital::{OutputPin, StatefulOutputPin};

use crate::error::AxisError;

use super::direction::{AxisDirection, AxisId};
use super::state::AxisState;

/// One axis: its STEP and DIR lines plus the tracked [`AxisState`].
///
/// Generic over:
/// - `STEP`: STEP pin type (must implement `StatefulOutputPin`, steps toggle the read-back level)
/// - `DIR`: DIR pin type (must implement `OutputPin`)
pub struct Axis<STEP, DIR>
where
    STEP: StatefulOutputPin,
    DIR: OutputPin,
{
    /// Which axis this is.
    id: AxisId,

    /// STEP pin (toggled once per step).
    step_pin: STEP,

    /// DIR pin (high = Positive, or inverted).
    dir_pin: DIR,

    /// Whether direction pin logic is inverted.
    invert_direction: bool,

    /// Position and cached direction.
    state: AxisState,
}

impl<STEP, DIR> Axis<STEP, DIR>
where
    STEP: StatefulOutputPin,
    DIR: OutputPin,
{
    /// Create an axis. The direction line is not touched until [`Axis::drive_direction`].
    pub fn new(id: AxisId, step_pin: STEP, dir_pin: DIR, invert_direction: bool) -> Self {
        Self {
            id,
            step_pin,
            dir_pin,
            invert_direction,
            state: AxisState::new(),
        }
    }

    /// Get the tracked state.
    #[inline]
    pub fn state(&self) -> &AxisState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut AxisState {
        &mut self.state
    }

    /// Write the direction line unconditionally and record the direction.
    ///
    /// Used at power-on when the line's level is unknown.
    pub fn drive_direction(&mut self, direction: AxisDirection) -> Result<(), AxisError> {
        let result = if direction.pin_high(self.invert_direction) {
            self.dir_pin.set_high()
        } else {
            self.dir_pin.set_low()
        };
        result.map_err(|_| AxisError::DirectionPin(self.id))?;

        self.state.set_direction(direction);
        Ok(())
    }

    /// Change direction, writing the line only if `direction` differs from the current one.
    ///
    /// Returns `true` if the line was written.
    pub fn set_direction(&mut self, direction: AxisDirection) -> Result<bool, AxisError> {
        if self.state.direction() == direction {
            return Ok(false);
        }

        self.drive_direction(direction)?;
        log::trace!("{} direction -> {}", self.id, direction);
        Ok(true)
    }

    /// Toggle the step line and count the step.
    ///
    /// Does not wait; pacing belongs to the caller.
    pub fn pulse(&mut self) -> Result<(), AxisError> {
        self.step_pin
            .toggle()
            .map_err(|_| AxisError::StepPin(self.id))?;
        self.state.advance();
        Ok(())
    }

    /// Release the pins.
    pub fn release(self) -> (STEP, DIR) {
        (self.step_pin, self.dir_pin)
    }
}
