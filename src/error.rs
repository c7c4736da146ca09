//! Error types for plotter-motion.
//!
//! The stepping and homing algorithms never fail on their own; errors here come from
//! configuration loading, the HAL pins, or the motor driver's configuration link.

use core::fmt;

use crate::axis::AxisId;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all plotter-motion operations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Step or direction pin error
    Axis(AxisError),
    /// Motor driver bring-up error
    Driver(DriverError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Step delay must be at least one microsecond
    InvalidStepDelay(u32),
    /// Homing over-travel must be at least one step
    InvalidOverTravel(u32),
    /// Homing over-travel shorter than a back-off distance
    OverTravelTooShort {
        /// Configured over-travel in steps
        over_travel: u32,
        /// Longest back-off in steps
        back_off: u32,
    },
    /// Current setting outside 0-100 percent
    InvalidCurrentPercent(u8),
    /// Required builder field not supplied
    MissingField(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Pin-level errors, tagged with the axis they happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisError {
    /// Step line read-back or write failed
    StepPin(AxisId),
    /// Direction line write failed
    DirectionPin(AxisId),
}

/// Motor driver bring-up errors, one per configuration stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError {
    /// Attaching the communication channel failed
    Initialize,
    /// Writing run/hold current limits failed
    CurrentLimits,
    /// Enabling the power-saving stepping mode failed
    PowerSaving,
    /// Writing the power level failed
    Power,
    /// Enabling the output stage failed
    Enable,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Axis(e) => write!(f, "Axis error: {}", e),
            Error::Driver(e) => write!(f, "Driver error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidStepDelay(v) => {
                write!(f, "Invalid step delay: {} us. Must be > 0", v)
            }
            ConfigError::InvalidOverTravel(v) => {
                write!(f, "Invalid homing over-travel: {} steps. Must be > 0", v)
            }
            ConfigError::OverTravelTooShort { over_travel, back_off } => write!(
                f,
                "Homing over-travel ({}) is shorter than back-off ({})",
                over_travel, back_off
            ),
            ConfigError::InvalidCurrentPercent(v) => {
                write!(f, "Invalid current percent: {}. Must be 0-100", v)
            }
            ConfigError::MissingField(name) => write!(f, "{} is required", name),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for AxisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisError::StepPin(axis) => write!(f, "{} step pin operation failed", axis),
            AxisError::DirectionPin(axis) => write!(f, "{} direction pin operation failed", axis),
        }
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Initialize => write!(f, "driver initialization failed"),
            DriverError::CurrentLimits => write!(f, "setting current limits failed"),
            DriverError::PowerSaving => write!(f, "enabling power-saving mode failed"),
            DriverError::Power => write!(f, "setting power level failed"),
            DriverError::Enable => write!(f, "enabling output stage failed"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<AxisError> for Error {
    fn from(e: AxisError) -> Self {
        Error::Axis(e)
    }
}

impl From<DriverError> for Error {
    fn from(e: DriverError) -> Self {
        Error::Driver(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for AxisError {}

#[cfg(feature = "std")]
impl std::error::Error for DriverError {}
