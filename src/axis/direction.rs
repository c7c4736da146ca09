//! Axis identity and travel direction.

use core::fmt;

/// One of the two linear axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisId {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl AxisId {
    /// Short label for logging.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            AxisId::X => "X",
            AxisId::Y => "Y",
        }
    }
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Direction of travel along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisDirection {
    /// Away from the end-stop (position counts up).
    #[default]
    Positive,
    /// Toward the end-stop (position counts down).
    Negative,
}

impl AxisDirection {
    /// Direction needed to travel from `current` to `target`.
    ///
    /// Only a strictly greater `current` yields `Negative`; equal positions give
    /// `Positive` even though no step will be taken.
    #[inline]
    pub fn toward(current: i32, target: i32) -> Self {
        if current > target {
            AxisDirection::Negative
        } else {
            AxisDirection::Positive
        }
    }

    /// Position delta of one step in this direction.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            AxisDirection::Positive => 1,
            AxisDirection::Negative => -1,
        }
    }

    /// Logic level of the direction line (Positive drives high unless inverted).
    #[inline]
    pub fn pin_high(self, invert: bool) -> bool {
        match self {
            AxisDirection::Positive => !invert,
            AxisDirection::Negative => invert,
        }
    }

    /// Label used in diagnostic output.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            AxisDirection::Positive => "POSITIVE",
            AxisDirection::Negative => "NEGATIVE",
        }
    }
}

impl fmt::Display for AxisDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
