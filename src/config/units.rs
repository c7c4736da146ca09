//! Unit types for step counts, delays and driver settings.
//!
//! Newtypes keep step positions, microsecond delays and percentages from being mixed
//! up at call sites.

use serde::Deserialize;

use crate::error::ConfigError;

/// Axis position in steps (absolute from the work origin).
///
/// 32-bit signed, matching the range of the position counters on the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Steps(pub i32);

impl Steps {
    /// The work origin.
    pub const ZERO: Self = Self(0);

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Offset by a signed step delta, wrapping at the counter width.
    #[inline]
    pub fn offset(self, delta: i32) -> Self {
        Self(self.0.wrapping_add(delta))
    }
}

/// Busy-wait duration in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Microseconds(pub u32);

impl Microseconds {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

/// Driver setting expressed as a percentage of full scale (0-100).
///
/// Validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Percent(u8);

impl Percent {
    /// Zero percent.
    pub const ZERO: Self = Self(0);
    /// Full scale.
    pub const FULL: Self = Self(100);

    /// Create a new Percent value with validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidCurrentPercent` if the value is above 100.
    pub fn new(value: u8) -> Result<Self, ConfigError> {
        if value <= 100 {
            Ok(Self(value))
        } else {
            Err(ConfigError::InvalidCurrentPercent(value))
        }
    }

    /// Create a Percent, clamping values above 100.
    #[inline]
    pub const fn saturating(value: u8) -> Self {
        if value > 100 {
            Self(100)
        } else {
            Self(value)
        }
    }

    /// Get the raw percentage.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Scale onto `0..=max`, rounding down.
    #[inline]
    pub const fn scale_to(self, max: u8) -> u8 {
        ((self.0 as u16 * max as u16) / 100) as u8
    }
}

impl<'de> Deserialize<'de> for Percent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use core::fmt::Write;
        let value = u8::deserialize(deserializer)?;
        Percent::new(value).map_err(|e| {
            let mut buf = heapless::String::<128>::new();
            let _ = write!(buf, "{}", e);
            serde::de::Error::custom(buf.as_str())
        })
    }
}
