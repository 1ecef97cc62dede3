use std::fmt;
use std::ops::{Add, Sub};

use crate::ticks::Ticks;
use crate::units::Period;

mod manual;
mod steady;
pub use self::manual::*;
pub use self::steady::*;

/// Describes the interface that a stopwatch's clock source must provide.
pub trait ClockSource {
    /// The length of one clock tick.
    type Period: Period;
    /// Represents the described clock time.
    type Time: Copy
        + Ord
        + fmt::Debug
        + Sub<Output = Ticks<Self::Period>>
        + Add<Ticks<Self::Period>, Output = Self::Time>;
    /// Returns the current clock time. Must not block or fail.
    fn now(&self) -> Self::Time;
}

/// Marks clock sources that never report a time earlier than one they have
/// already reported.
///
/// `Stopwatch` only accepts monotonic sources. Implementing this for a clock
/// that can go backwards does not cause memory unsafety, but elapsed times
/// may then come out negative.
pub trait Monotonic: ClockSource {}

impl<'a, C: ClockSource> ClockSource for &'a C {
    type Period = C::Period;
    type Time = C::Time;
    fn now(&self) -> Self::Time {
        (**self).now()
    }
}

impl<'a, C: Monotonic> Monotonic for &'a C {}
