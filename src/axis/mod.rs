//! Axis module for plotter-motion.
//!
//! Per-axis direction control, step pulsing and position tracking.

mod direction;
mod pins;
mod state;

pub use direction::{AxisDirection, AxisId};
pub use pins::Axis;
pub use state::AxisState;
