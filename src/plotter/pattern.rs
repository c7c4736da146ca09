//! Fixed drawing patterns.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, StatefulOutputPin};

use crate::axis::{AxisDirection, AxisId};
use crate::error::Result;

use super::controller::Plotter;
use super::state::Homed;

impl<STEP, DIR, DELAY> Plotter<STEP, DIR, DELAY, Homed>
where
    STEP: StatefulOutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// Trace one square outline of `side` steps, starting and ending at the current
    /// position: +X, +Y, -X, -Y.
    pub fn trace_rectangle(&mut self, side: u32) -> Result<()> {
        for direction in [AxisDirection::Positive, AxisDirection::Negative] {
            self.set_direction(AxisId::X, direction)?;
            self.set_direction(AxisId::Y, direction)?;
            self.step_n(AxisId::X, side)?;
            self.step_n(AxisId::Y, side)?;
        }
        Ok(())
    }
}
