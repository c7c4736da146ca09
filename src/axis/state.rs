//! Position and direction tracking for one axis.

use crate::config::units::Steps;

use super::direction::AxisDirection;

/// Absolute position and last-commanded direction of one axis.
///
/// Pure bookkeeping; the pins live in [`Axis`](super::Axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisState {
    /// Current position in steps (from origin)
    position: Steps,
    /// Direction the next step will travel
    direction: AxisDirection,
}

impl AxisState {
    /// State at the origin, travelling Positive.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current position in steps.
    #[inline]
    pub fn position(&self) -> Steps {
        self.position
    }

    /// Get current direction.
    #[inline]
    pub fn direction(&self) -> AxisDirection {
        self.direction
    }

    /// Record a new direction.
    ///
    /// Returns `false` when `direction` was already current.
    #[inline]
    pub fn set_direction(&mut self, direction: AxisDirection) -> bool {
        if self.direction == direction {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Account for one step in the current direction.
    #[inline]
    pub fn advance(&mut self) {
        self.position = self.position.offset(self.direction.sign());
    }

    /// Declare the current position to be the origin.
    #[inline]
    pub fn set_origin(&mut self) {
        self.position = Steps::ZERO;
    }

    /// Whether this axis sits exactly on `target`.
    #[inline]
    pub fn is_at(&self, target: Steps) -> bool {
        self.position == target
    }
}
