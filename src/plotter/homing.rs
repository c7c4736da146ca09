//! Homing: run both axes into their end-stops, then back off to the work origin.
//!
//! There is no stop sensing. The over-travel count must be long enough to reach the
//! stops from anywhere on the bed; the motors stall against them for the remainder,
//! which is why the driver is brought up at reduced current first.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, StatefulOutputPin};

use crate::axis::{AxisDirection, AxisId};
use crate::driver::{bring_up, MotorDriver};
use crate::error::{Error, Result};

use super::controller::Plotter;
use super::state::{Homed, PlotterState, StateName, Unhomed};

impl<STEP, DIR, DELAY, STATE> Plotter<STEP, DIR, DELAY, STATE>
where
    STEP: StatefulOutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
    STATE: PlotterState + StateName,
{
    /// Bring the driver up and home both axes.
    ///
    /// Available in every state; homing again is the only way to reset the origin.
    /// On success both positions are zero.
    ///
    /// # Errors
    ///
    /// On a driver or pin failure the plotter comes back `Unhomed` along with the error.
    #[allow(clippy::type_complexity)]
    pub fn home<D: MotorDriver>(
        self,
        driver: &mut D,
        channel: D::Channel,
    ) -> core::result::Result<Plotter<STEP, DIR, DELAY, Homed>, (Plotter<STEP, DIR, DELAY, Unhomed>, Error)>
    {
        let mut plotter: Plotter<STEP, DIR, DELAY, Unhomed> = self.into_state();

        if let Err(e) = bring_up(driver, channel, &plotter.config.driver) {
            return Err((plotter, e));
        }

        match plotter.run_homing() {
            Ok(()) => Ok(plotter.into_state()),
            Err(e) => Err((plotter, e)),
        }
    }
}

impl<STEP, DIR, DELAY> Plotter<STEP, DIR, DELAY, Unhomed>
where
    STEP: StatefulOutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    fn run_homing(&mut self) -> Result<()> {
        let homing = self.config.homing.clone();
        let slow_delay = homing.slow_step_delay.value();

        log::info!(
            "homing: {} step pairs toward the end-stops",
            homing.over_travel_steps
        );
        self.set_direction(AxisId::X, AxisDirection::Negative)?;
        self.set_direction(AxisId::Y, AxisDirection::Negative)?;

        for _ in 0..homing.over_travel_steps {
            self.step(AxisId::X)?;
            self.step(AxisId::Y)?;
            self.delay.delay_us(slow_delay);
        }

        self.set_direction(AxisId::X, AxisDirection::Positive)?;
        self.set_direction(AxisId::Y, AxisDirection::Positive)?;

        log::info!(
            "homing: backing off Y {} steps, X {} steps",
            homing.back_off_y_steps,
            homing.back_off_x_steps
        );
        self.step_slowly(AxisId::Y, homing.back_off_y_steps, slow_delay)?;
        self.step_slowly(AxisId::X, homing.back_off_x_steps, slow_delay)?;

        self.x.state_mut().set_origin();
        self.y.state_mut().set_origin();
        log::info!("homing complete");
        Ok(())
    }

    fn step_slowly(&mut self, id: AxisId, count: u32, slow_delay: u32) -> Result<()> {
        for _ in 0..count {
            self.step(id)?;
            self.delay.delay_us(slow_delay);
        }
        Ok(())
    }
}
