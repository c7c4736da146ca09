//! Two-axis plotter: shared pacing, step actuation and direction control.

use core::marker::PhantomData;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, StatefulOutputPin};

use crate::axis::{Axis, AxisDirection, AxisId, AxisState};
use crate::config::units::Steps;
use crate::config::PlotterConfig;
use crate::error::Result;

use super::state::{PlotterState, StateName, Unhomed};

/// Two-axis stepper plotter with type-state safety.
///
/// Generic over:
/// - `STEP`: STEP pin type for both axes (must implement `StatefulOutputPin`)
/// - `DIR`: DIR pin type for both axes (must implement `OutputPin`)
/// - `DELAY`: Delay provider shared by both axes (must implement `DelayNs`)
/// - `STATE`: Type-state marker (defaults to `Unhomed`)
///
/// The plotter owns all axis state, so every stepping operation takes `&mut self`
/// and runs to completion on the calling thread.
pub struct Plotter<STEP, DIR, DELAY, STATE = Unhomed>
where
    STEP: StatefulOutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
    STATE: PlotterState,
{
    /// Horizontal axis.
    pub(super) x: Axis<STEP, DIR>,

    /// Vertical axis.
    pub(super) y: Axis<STEP, DIR>,

    /// Busy-wait provider for step pacing.
    pub(super) delay: DELAY,

    /// Timing, calibration and driver settings.
    pub(super) config: PlotterConfig,

    /// Type-state marker.
    _state: PhantomData<STATE>,
}

impl<STEP, DIR, DELAY, STATE> Plotter<STEP, DIR, DELAY, STATE>
where
    STEP: StatefulOutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
    STATE: PlotterState + StateName,
{
    pub(super) fn from_parts(
        x: Axis<STEP, DIR>,
        y: Axis<STEP, DIR>,
        delay: DELAY,
        config: PlotterConfig,
    ) -> Self {
        Self {
            x,
            y,
            delay,
            config,
            _state: PhantomData,
        }
    }

    pub(super) fn into_state<NEXT>(self) -> Plotter<STEP, DIR, DELAY, NEXT>
    where
        NEXT: PlotterState + StateName,
    {
        Plotter::from_parts(self.x, self.y, self.delay, self.config)
    }

    /// Get the configuration.
    #[inline]
    pub fn config(&self) -> &PlotterConfig {
        &self.config
    }

    /// Get the current state name.
    #[inline]
    pub fn state_name(&self) -> &'static str {
        STATE::name()
    }

    /// Get the tracked state of one axis.
    #[inline]
    pub fn axis(&self, id: AxisId) -> &AxisState {
        match id {
            AxisId::X => self.x.state(),
            AxisId::Y => self.y.state(),
        }
    }

    /// Current `(x, y)` position in steps.
    #[inline]
    pub fn position(&self) -> (Steps, Steps) {
        (self.x.state().position(), self.y.state().position())
    }

    pub(super) fn axis_mut(&mut self, id: AxisId) -> &mut Axis<STEP, DIR> {
        match id {
            AxisId::X => &mut self.x,
            AxisId::Y => &mut self.y,
        }
    }

    /// Set an axis's direction.
    ///
    /// The direction line is written only when `direction` differs from the current one;
    /// repeated requests are free. Returns `true` if the line was written.
    pub fn set_direction(&mut self, id: AxisId, direction: AxisDirection) -> Result<bool> {
        Ok(self.axis_mut(id).set_direction(direction)?)
    }

    /// Step one axis once in its current direction.
    ///
    /// Toggles the step line, moves the position by ±1, then busy-waits the configured
    /// step delay.
    pub fn step(&mut self, id: AxisId) -> Result<()> {
        self.axis_mut(id).pulse()?;
        let step_delay = self.config.step_delay_us();
        self.delay.delay_us(step_delay);
        Ok(())
    }

    /// Step one axis `count` times.
    pub(super) fn step_n(&mut self, id: AxisId, count: u32) -> Result<()> {
        for _ in 0..count {
            self.step(id)?;
        }
        Ok(())
    }

    /// Busy-wait for `ms` milliseconds on the plotter's delay provider.
    #[inline]
    pub fn wait_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Release the pins and delay provider: `(x, y, delay)`.
    pub fn release(self) -> (Axis<STEP, DIR>, Axis<STEP, DIR>, DELAY) {
        (self.x, self.y, self.delay)
    }
}
