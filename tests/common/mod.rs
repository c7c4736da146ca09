//! Shared test rig: recording pins, delay and driver for plotter tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin, StatefulOutputPin};

use plotter_motion::config::{HomingConfig, Microseconds, Percent, PlotterConfig};
use plotter_motion::{AxisId, Homed, MotorDriver, Plotter, Unhomed};

/// One observable I/O action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Step line written to the given level.
    Step(AxisId, bool),
    /// Direction line written to the given level.
    Direction(AxisId, bool),
}

/// Everything the rig saw, in order.
#[derive(Debug, Default)]
pub struct Log {
    pub events: Vec<Event>,
    pub delay_ns: u64,
}

impl Log {
    pub fn steps(&self, axis: AxisId) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Step(a, _) if *a == axis))
            .count()
    }

    pub fn direction_writes(&self, axis: AxisId) -> Vec<bool> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Direction(a, level) if *a == axis => Some(*level),
                _ => None,
            })
            .collect()
    }

    /// Axis of each step, in order.
    pub fn step_sequence(&self) -> Vec<AxisId> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Step(a, _) => Some(*a),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.delay_ns = 0;
    }
}

pub type SharedLog = Rc<RefCell<Log>>;

/// Step line that remembers its level and logs every write.
pub struct StepLine {
    axis: AxisId,
    high: bool,
    log: SharedLog,
}

impl StepLine {
    pub fn new(axis: AxisId, log: &SharedLog) -> Self {
        Self {
            axis,
            high: false,
            log: log.clone(),
        }
    }
}

impl ErrorType for StepLine {
    type Error = Infallible;
}

impl OutputPin for StepLine {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.high = false;
        self.log.borrow_mut().events.push(Event::Step(self.axis, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.high = true;
        self.log.borrow_mut().events.push(Event::Step(self.axis, true));
        Ok(())
    }
}

impl StatefulOutputPin for StepLine {
    fn is_set_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.high)
    }
}

/// Direction line that logs every write.
pub struct DirLine {
    axis: AxisId,
    log: SharedLog,
}

impl DirLine {
    pub fn new(axis: AxisId, log: &SharedLog) -> Self {
        Self {
            axis,
            log: log.clone(),
        }
    }
}

impl ErrorType for DirLine {
    type Error = Infallible;
}

impl OutputPin for DirLine {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.log
            .borrow_mut()
            .events
            .push(Event::Direction(self.axis, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.log
            .borrow_mut()
            .events
            .push(Event::Direction(self.axis, true));
        Ok(())
    }
}

/// Write failure reported by [`FlakyLine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFault;

impl embedded_hal::digital::Error for LineFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Line that accepts a fixed number of writes, then rejects every write after.
#[derive(Debug, Default)]
pub struct FlakyLine {
    high: bool,
    writes_left: Option<usize>,
}

impl FlakyLine {
    /// A line that never fails.
    pub fn reliable() -> Self {
        Self::default()
    }

    /// A line that fails from write number `writes + 1` onwards.
    pub fn failing_after(writes: usize) -> Self {
        Self {
            high: false,
            writes_left: Some(writes),
        }
    }

    fn write(&mut self, level: bool) -> Result<(), LineFault> {
        match self.writes_left.as_mut() {
            Some(0) => return Err(LineFault),
            Some(left) => *left -= 1,
            None => {}
        }
        self.high = level;
        Ok(())
    }
}

impl ErrorType for FlakyLine {
    type Error = LineFault;
}

impl OutputPin for FlakyLine {
    fn set_low(&mut self) -> Result<(), LineFault> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), LineFault> {
        self.write(true)
    }
}

impl StatefulOutputPin for FlakyLine {
    fn is_set_high(&mut self) -> Result<bool, LineFault> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, LineFault> {
        Ok(!self.high)
    }
}

/// Delay that adds up requested time instead of sleeping.
pub struct RecordingDelay {
    log: SharedLog,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().delay_ns += ns as u64;
    }
}

/// Driver bring-up call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverCall {
    Initialize,
    CurrentLimits(u8, u8, u8),
    PowerSaving,
    Power(u8),
    Enable,
}

/// Driver that records calls, optionally failing `enable`.
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub calls: Vec<DriverCall>,
    pub fail_enable: bool,
}

impl MotorDriver for RecordingDriver {
    type Channel = ();
    type Error = ();

    fn initialize(&mut self, _channel: ()) -> Result<(), ()> {
        self.calls.push(DriverCall::Initialize);
        Ok(())
    }

    fn set_current_limits(
        &mut self,
        run: Percent,
        hold: Percent,
        hold_delay: Percent,
    ) -> Result<(), ()> {
        self.calls.push(DriverCall::CurrentLimits(
            run.value(),
            hold.value(),
            hold_delay.value(),
        ));
        Ok(())
    }

    fn enable_power_saving_mode(&mut self) -> Result<(), ()> {
        self.calls.push(DriverCall::PowerSaving);
        Ok(())
    }

    fn set_power(&mut self, level: u8) -> Result<(), ()> {
        self.calls.push(DriverCall::Power(level));
        Ok(())
    }

    fn enable(&mut self) -> Result<(), ()> {
        self.calls.push(DriverCall::Enable);
        if self.fail_enable {
            return Err(());
        }
        Ok(())
    }
}

pub type RigPlotter<S> = Plotter<StepLine, DirLine, RecordingDelay, S>;

/// Homing calibration small enough to run quickly.
pub fn small_config() -> PlotterConfig {
    PlotterConfig::with_homing(HomingConfig {
        over_travel_steps: 300,
        back_off_x_steps: 120,
        back_off_y_steps: 40,
        slow_step_delay: Microseconds(50),
    })
}

/// Build an unhomed plotter on recording pins.
pub fn build(config: PlotterConfig) -> (RigPlotter<Unhomed>, SharedLog) {
    let log: SharedLog = Rc::new(RefCell::new(Log::default()));
    let plotter = Plotter::builder()
        .x_axis(StepLine::new(AxisId::X, &log), DirLine::new(AxisId::X, &log))
        .y_axis(StepLine::new(AxisId::Y, &log), DirLine::new(AxisId::Y, &log))
        .delay(RecordingDelay { log: log.clone() })
        .config(config)
        .build()
        .expect("plotter should build");
    (plotter, log)
}

/// Build and home a plotter, then clear the log.
pub fn homed(config: PlotterConfig) -> (RigPlotter<Homed>, SharedLog) {
    let (plotter, log) = build(config);
    let mut driver = RecordingDriver::default();
    let plotter = match plotter.home(&mut driver, ()) {
        Ok(p) => p,
        Err((_, e)) => panic!("homing failed: {}", e),
    };
    log.borrow_mut().clear();
    (plotter, log)
}
