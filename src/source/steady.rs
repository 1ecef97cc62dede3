use std::ops::{Add, Sub};
use std::time::{Duration, Instant};

use super::{ClockSource, Monotonic};
use crate::ticks::{saturate, Nanoseconds};
use crate::units::Nano;

/// A clock source backed by the operating system's monotonic clock
/// (`std::time::Instant`), with nanosecond ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Steady;

/// A reading of the [`Steady`] clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SteadyT(Instant);

impl SteadyT {
    /// Returns the underlying `Instant`.
    pub fn as_instant(self) -> Instant {
        self.0
    }
}

impl From<Instant> for SteadyT {
    fn from(i: Instant) -> Self {
        SteadyT(i)
    }
}

fn nanos_of(d: Duration) -> Nanoseconds {
    Nanoseconds::new(saturate(d.as_nanos() as i128))
}

impl Sub for SteadyT {
    type Output = Nanoseconds;
    fn sub(self, rhs: Self) -> Self::Output {
        match self.0.checked_duration_since(rhs.0) {
            Some(d) => nanos_of(d),
            None => -nanos_of(rhs.0.duration_since(self.0)),
        }
    }
}

/// Falls back to the original reading if the result is not representable
/// by `Instant` on this platform.
impl Add<Nanoseconds> for SteadyT {
    type Output = SteadyT;
    fn add(self, rhs: Nanoseconds) -> Self::Output {
        let magnitude = Duration::from_nanos(rhs.count().unsigned_abs());
        let moved = if rhs.is_negative() {
            self.0.checked_sub(magnitude)
        } else {
            self.0.checked_add(magnitude)
        };
        SteadyT(moved.unwrap_or(self.0))
    }
}

impl ClockSource for Steady {
    type Period = Nano;
    type Time = SteadyT;
    fn now(&self) -> Self::Time {
        SteadyT(Instant::now())
    }
}

impl Monotonic for Steady {}
