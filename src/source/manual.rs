use std::cell::Cell;

use super::{ClockSource, Monotonic};
use crate::ticks::Nanoseconds;
use crate::units::Nano;

/// A clock whose time only changes when told to.
///
/// The reading is a plain nanosecond count, which makes stopwatch behaviour
/// exactly reproducible in tests.
#[derive(Debug, Clone, Default)]
pub struct ManualClock(Cell<Nanoseconds>);

impl ClockSource for ManualClock {
    type Period = Nano;
    type Time = Nanoseconds;
    fn now(&self) -> Self::Time {
        self.0.get()
    }
}

/// Only sound as long as callers move the clock forward; `set_time` does
/// not check.
impl Monotonic for ManualClock {}

impl ManualClock {
    pub fn new(t: i64) -> ManualClock {
        ManualClock(Cell::new(Nanoseconds::new(t)))
    }
    pub fn set_time(&self, t: i64) {
        self.0.set(Nanoseconds::new(t))
    }
    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Nanoseconds) {
        self.0.set(self.0.get() + by)
    }
}
