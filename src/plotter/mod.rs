//! Plotter module for plotter-motion.
//!
//! Two-axis controller with type-state safety: homing, point-to-point moves and
//! fixed patterns.

mod builder;
mod controller;
mod homing;
mod mover;
mod pattern;
pub mod state;

pub use self::builder::PlotterBuilder;
pub use self::controller::Plotter;
pub use self::mover::MoveReport;
pub use self::state::{Homed, PlotterState, StateName, Unhomed};

#[cfg(test)]
pub(crate) mod test_support {
    use core::convert::Infallible;

    use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};
    use embedded_hal_mock::eh1::delay::NoopDelay;

    use super::{Homed, Plotter};
    use crate::config::{HomingConfig, Microseconds, PlotterConfig};
    use crate::driver::MotorDriver;

    /// Pin that only remembers its level.
    #[derive(Debug, Default)]
    pub struct NullPin {
        high: bool,
    }

    impl NullPin {
        pub fn is_high(&self) -> bool {
            self.high
        }
    }

    impl ErrorType for NullPin {
        type Error = Infallible;
    }

    impl OutputPin for NullPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            Ok(())
        }
    }

    impl StatefulOutputPin for NullPin {
        fn is_set_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.high)
        }

        fn is_set_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.high)
        }
    }

    /// Driver that accepts every setting.
    pub struct NullDriver;

    impl MotorDriver for NullDriver {
        type Channel = ();
        type Error = Infallible;

        fn initialize(&mut self, _channel: ()) -> Result<(), Infallible> {
            Ok(())
        }

        fn set_current_limits(
            &mut self,
            _run: crate::config::Percent,
            _hold: crate::config::Percent,
            _hold_delay: crate::config::Percent,
        ) -> Result<(), Infallible> {
            Ok(())
        }

        fn enable_power_saving_mode(&mut self) -> Result<(), Infallible> {
            Ok(())
        }

        fn set_power(&mut self, _level: u8) -> Result<(), Infallible> {
            Ok(())
        }

        fn enable(&mut self) -> Result<(), Infallible> {
            Ok(())
        }
    }

    pub fn small_config() -> PlotterConfig {
        PlotterConfig::with_homing(HomingConfig {
            over_travel_steps: 50,
            back_off_x_steps: 20,
            back_off_y_steps: 5,
            slow_step_delay: Microseconds(50),
        })
    }

    pub fn homed_plotter() -> Plotter<NullPin, NullPin, NoopDelay, Homed> {
        let plotter = Plotter::builder()
            .x_axis(NullPin::default(), NullPin::default())
            .y_axis(NullPin::default(), NullPin::default())
            .delay(NoopDelay::new())
            .config(small_config())
            .build()
            .unwrap();

        match plotter.home(&mut NullDriver, ()) {
            Ok(homed) => homed,
            Err((_, e)) => panic!("homing failed: {}", e),
        }
    }
}
