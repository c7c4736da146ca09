//! Configuration module for plotter-motion.
//!
//! Provides types for loading and validating step timing, homing calibration and
//! driver settings from TOML files (with `std` feature) or built in code.

mod axes;
mod driver;
mod homing;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use axes::{AxesConfig, AxisConfig};
pub use driver::DriverConfig;
pub use homing::HomingConfig;
pub use system::{MotionConfig, PlotterConfig};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Microseconds, Percent, Steps};
