//! Point-to-point moves and relative jogs on a homed plotter.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, StatefulOutputPin};

use crate::axis::{AxisDirection, AxisId};
use crate::config::units::Steps;
use crate::error::Result;

use super::controller::Plotter;
use super::state::Homed;

/// Step counts of a completed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MoveReport {
    /// Steps issued on X.
    pub x_steps: u32,
    /// Steps issued on Y.
    pub y_steps: u32,
    /// Loop passes; equals the longer of the two axis distances.
    pub iterations: u32,
}

impl<STEP, DIR, DELAY> Plotter<STEP, DIR, DELAY, Homed>
where
    STEP: StatefulOutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// Move to an absolute position (blocking).
    ///
    /// Each axis's direction is chosen once, before any step: Negative if it is past
    /// its target, otherwise Positive. Both axes then step in the same pass until each
    /// reaches its target; the shorter one simply stops early, so the path is not a
    /// straight line.
    pub fn move_to(&mut self, target_x: Steps, target_y: Steps) -> Result<MoveReport> {
        let (x, y) = self.position();
        log::debug!(
            "move_to(x: {}, y: {}) from ({}, {})",
            target_x.value(),
            target_y.value(),
            x.value(),
            y.value()
        );

        let x_direction = AxisDirection::toward(x.value(), target_x.value());
        let y_direction = AxisDirection::toward(y.value(), target_y.value());
        self.set_direction(AxisId::X, x_direction)?;
        self.set_direction(AxisId::Y, y_direction)?;
        log::debug!("x: {}", x_direction);

        let mut report = MoveReport::default();
        loop {
            let x_pending = !self.x.state().is_at(target_x);
            let y_pending = !self.y.state().is_at(target_y);
            if !x_pending && !y_pending {
                break;
            }

            if x_pending {
                self.step(AxisId::X)?;
                report.x_steps += 1;
            }
            if y_pending {
                self.step(AxisId::Y)?;
                report.y_steps += 1;
            }
            report.iterations += 1;
        }

        Ok(report)
    }

    /// Move one axis by `steps` in `direction` at the run step rate.
    pub fn jog(&mut self, id: AxisId, direction: AxisDirection, steps: u32) -> Result<()> {
        self.set_direction(id, direction)?;
        self.step_n(id, steps)
    }
}
