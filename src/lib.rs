//! # plotter-motion
//!
//! Homing and point-to-point stepping for two-axis stepper plotters, with embedded-hal 1.0
//! support.
//!
//! ## Features
//!
//! - **Configuration-driven**: Step timing and homing calibration from TOML files
//! - **embedded-hal 1.0**: `StatefulOutputPin` for STEP, `OutputPin` for DIR, `DelayNs` for timing
//! - **no_std compatible**: Core library works without standard library
//! - **Toggle stepping**: Each step flips the STEP line from its read-back level
//! - **Position tracking**: Absolute position tracked on both axes
//! - **Type-state safety**: Absolute moves only compile on a homed plotter
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use plotter_motion::{Plotter, Steps, Tmc2209};
//!
//! // Load configuration from TOML
//! let config = plotter_motion::load_config("plotter.toml")?;
//!
//! // Create the plotter with embedded-hal pins
//! let plotter = Plotter::builder()
//!     .x_axis(x_step, x_dir)
//!     .y_axis(y_step, y_dir)
//!     .delay(delay)
//!     .config(config)
//!     .build()?;
//!
//! // Home against the end-stops, then move
//! let mut driver = Tmc2209::new(0);
//! let mut plotter = plotter.home(&mut driver, uart).map_err(|(_, e)| e)?;
//! plotter.move_to(Steps(10_000), Steps(0))?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Derives `defmt::Format` on public types for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// Core modules
pub mod axis;
pub mod config;
pub mod driver;
pub mod error;
pub mod plotter;

// Re-exports for ergonomic API
pub use axis::{AxisDirection, AxisId, AxisState};
pub use config::{validate_config, DriverConfig, HomingConfig, PlotterConfig};
pub use driver::{MotorDriver, Tmc2209};
pub use error::{Error, Result};
pub use plotter::{state, Homed, MoveReport, Plotter, PlotterBuilder, Unhomed};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Microseconds, Percent, Steps};
