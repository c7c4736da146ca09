//! Plotter type-state markers.
//!
//! Absolute moves are only meaningful once the origin is known, so they are only
//! available on a [`Homed`] plotter.

/// Origin not established; positions are meaningless.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unhomed;

/// Homing completed; positions are absolute from the work origin.
#[derive(Debug, Clone, Copy)]
pub struct Homed;

/// Trait for plotter states.
pub trait PlotterState: private::Sealed {}

impl PlotterState for Unhomed {}
impl PlotterState for Homed {}

mod private {
    pub trait Sealed {}
    impl Sealed for super::Unhomed {}
    impl Sealed for super::Homed {}
}

/// State name for display/debugging.
pub trait StateName {
    /// Get the state name as a static string.
    fn name() -> &'static str;
}

impl StateName for Unhomed {
    fn name() -> &'static str {
        "Unhomed"
    }
}

impl StateName for Homed {
    fn name() -> &'static str {
        "Homed"
    }
}
