//! Host stand-ins for the plotter's hardware, shared by the demos.

#![allow(dead_code)]

use std::convert::Infallible;

use plotter_motion::config::Percent;
use plotter_motion::MotorDriver;

/// Delay provider backed by `std::thread::sleep`.
pub struct SleepDelay;

impl embedded_hal::delay::DelayNs for SleepDelay {
    fn delay_ns(&mut self, ns: u32) {
        // In real code, this would spin on a hardware timer
        std::thread::sleep(std::time::Duration::from_nanos(ns as u64));
    }
}

/// Output pin that only remembers its level.
#[derive(Default)]
pub struct MockPin {
    state: bool,
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.state = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.state = false;
        Ok(())
    }
}

impl embedded_hal::digital::StatefulOutputPin for MockPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.state)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.state)
    }
}

/// Driver that prints the settings it is given.
pub struct PrintingDriver;

impl MotorDriver for PrintingDriver {
    type Channel = &'static str;
    type Error = Infallible;

    fn initialize(&mut self, channel: &'static str) -> Result<(), Infallible> {
        println!("driver: attached to {}", channel);
        Ok(())
    }

    fn set_current_limits(
        &mut self,
        run: Percent,
        hold: Percent,
        hold_delay: Percent,
    ) -> Result<(), Infallible> {
        println!(
            "driver: run {}%, hold {}%, hold delay {}%",
            run.value(),
            hold.value(),
            hold_delay.value()
        );
        Ok(())
    }

    fn enable_power_saving_mode(&mut self) -> Result<(), Infallible> {
        println!("driver: power saving on");
        Ok(())
    }

    fn set_power(&mut self, level: u8) -> Result<(), Infallible> {
        println!("driver: power level {}", level);
        Ok(())
    }

    fn enable(&mut self) -> Result<(), Infallible> {
        println!("driver: enabled");
        Ok(())
    }
}

/// Route the library's diagnostics to stderr; `RUST_LOG` overrides the level.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
}

/// A short calibration so the demos home in a few seconds on a host.
pub const DEMO_CONFIG: &str = r#"
[motion]
step_delay_us = 100

[homing]
over_travel_steps = 4000
back_off_x_steps = 1600
back_off_y_steps = 400
slow_step_delay_us = 50
"#;
