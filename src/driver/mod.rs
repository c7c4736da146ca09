//! Motor driver configuration interface.
//!
//! The plotter only needs the driver's current/power settings applied before homing;
//! step and direction go over plain GPIO. Any driver chip with a configuration link
//! implements [`MotorDriver`].

mod tmc2209;

pub use tmc2209::{crc8, reg, write_datagram, Tmc2209, Tmc2209Error};

use crate::config::units::Percent;
use crate::config::DriverConfig;
use crate::error::{DriverError, Result};

/// Configuration surface of a stepper driver chip.
pub trait MotorDriver {
    /// Link used to talk to the chip (UART, SPI, ...).
    type Channel;

    /// Error type for configuration writes.
    type Error;

    /// Attach the communication channel and put the chip in a known state.
    fn initialize(&mut self, channel: Self::Channel) -> core::result::Result<(), Self::Error>;

    /// Set run current, hold current and run-to-hold ramp delay.
    fn set_current_limits(
        &mut self,
        run: Percent,
        hold: Percent,
        hold_delay: Percent,
    ) -> core::result::Result<(), Self::Error>;

    /// Enable the chip's load-adaptive current reduction.
    fn enable_power_saving_mode(&mut self) -> core::result::Result<(), Self::Error>;

    /// Set the output power level.
    fn set_power(&mut self, level: u8) -> core::result::Result<(), Self::Error>;

    /// Enable the output stage.
    fn enable(&mut self) -> core::result::Result<(), Self::Error>;
}

/// Bring a driver up with the given settings, in initialize → currents → power-saving →
/// power → enable order.
///
/// # Errors
///
/// Returns the [`DriverError`] naming the first stage that failed.
pub fn bring_up<D: MotorDriver>(
    driver: &mut D,
    channel: D::Channel,
    config: &DriverConfig,
) -> Result<()> {
    driver
        .initialize(channel)
        .map_err(|_| DriverError::Initialize)?;
    driver
        .set_current_limits(
            config.run_current_percent,
            config.hold_current_percent,
            config.hold_delay_percent,
        )
        .map_err(|_| DriverError::CurrentLimits)?;
    if config.power_saving {
        driver
            .enable_power_saving_mode()
            .map_err(|_| DriverError::PowerSaving)?;
    }
    driver
        .set_power(config.power_level)
        .map_err(|_| DriverError::Power)?;
    driver.enable().map_err(|_| DriverError::Enable)?;

    log::info!(
        "driver up: run {}%, hold {}%, power {}",
        config.run_current_percent.value(),
        config.hold_current_percent.value(),
        config.power_level
    );
    Ok(())
}
