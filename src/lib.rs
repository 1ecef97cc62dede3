//! A stopwatch over monotonic clocks, and signed duration decomposition.
//!
//! [`Stopwatch`] measures elapsed time against any [`Monotonic`] clock
//! source. It can be started, paused, resumed, lapped and reset, and can
//! report elapsed time in any representation that implements
//! [`FromTicks`], including a [`DurationComponents`] breakdown into days,
//! hours, minutes, seconds, milliseconds, microseconds and nanoseconds.
//!
//! ```
//! use stopwatch::{DurationComponents, Milliseconds, Stopwatch};
//!
//! let mut sw = Stopwatch::manual(0);
//! sw.start();
//! sw.advance(Milliseconds::new(90_500).convert());
//! let parts: DurationComponents = sw.elapsed_as();
//! assert_eq!((parts.minutes, parts.seconds, parts.milliseconds), (1, 30, 500));
//! ```
//!
//! A `Stopwatch` holds no locks. Sharing one between threads for mutation
//! needs external synchronisation, e.g. a `Mutex`.

#[cfg(feature = "serialization")]
extern crate serde;
#[cfg(feature = "serialization")]
#[macro_use]
extern crate serde_derive;
#[cfg(all(feature = "serialization", test))]
extern crate serde_json;

use log::trace;
use thiserror::Error;

mod components;
mod source;
mod ticks;
mod units;
pub use crate::components::*;
pub use crate::source::*;
pub use crate::ticks::*;
pub use crate::units::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Outside supported range: {0} ticks")]
    OutOfRange(i128),
    #[error("Negative duration: {0}ns")]
    NegativeDuration(i128),
    #[error("Integer conversion error")]
    FromInt(#[from] std::num::TryFromIntError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Elapsed time as measured by clock `C`.
pub type Elapsed<C> = Ticks<<C as ClockSource>::Period>;

/// Where a [`Stopwatch`] is in its lifecycle, with the clock readings that
/// matter in that state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State<T> {
    /// Never started, or reset since.
    Idle,
    /// Measuring; `start` is when the current interval began.
    Running { start: T },
    /// Stopped at `paused_at`, with `paused_at - start` already measured.
    Paused { start: T, paused_at: T },
}

/// The main stopwatch type.
///
/// Clones are independent: each carries its own state (and its own clock,
/// unless `C` is a shared reference).
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch<C: Monotonic> {
    src: C,
    state: State<C::Time>,
}

impl Stopwatch<Steady> {
    /// Returns a `Stopwatch` that uses the operating system's monotonic clock.
    pub fn steady() -> Stopwatch<Steady> {
        Stopwatch::new(Steady)
    }
}

impl Stopwatch<ManualClock> {
    /// Returns a `Stopwatch` whose clock reads `t` nanoseconds until moved.
    pub fn manual(t: i64) -> Stopwatch<ManualClock> {
        Stopwatch::new(ManualClock::new(t))
    }
    /// Sets the clock to `t` nanoseconds.
    pub fn set_time(&self, t: i64) {
        self.src.set_time(t)
    }
    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Nanoseconds) {
        self.src.advance(by)
    }
}

impl<C: Monotonic + Default> Default for Stopwatch<C> {
    fn default() -> Self {
        Stopwatch::new(C::default())
    }
}

impl<C: Monotonic> Stopwatch<C> {
    /// Creates an idle stopwatch with `src` as the time provider.
    pub fn new(src: C) -> Self {
        Stopwatch {
            src,
            state: State::Idle,
        }
    }

    /// Get a reference to the clock source.
    pub fn source(&self) -> &C {
        &self.src
    }

    /// Returns the current state and its clock readings.
    pub fn state(&self) -> State<C::Time> {
        self.state
    }

    /// Only reads `now` while running.
    fn measured(&self, now: impl FnOnce() -> C::Time) -> Elapsed<C> {
        match self.state {
            State::Idle => Ticks::ZERO,
            State::Running { start } => now() - start,
            State::Paused { start, paused_at } => paused_at - start,
        }
    }

    /// Starts the stopwatch and returns the time measured so far.
    ///
    /// * Idle: starts measuring and returns zero.
    /// * Paused: resumes, so that the paused interval is not counted, and
    ///   returns the time measured before the pause.
    /// * Running: returns the time since the last start and begins a new
    ///   interval from now (a lap).
    pub fn start(&mut self) -> Elapsed<C> {
        let now = self.src.now();
        let snapshot = self.measured(|| now);

        self.state = match self.state {
            State::Idle => {
                trace!("stopwatch started at {:?}", now);
                State::Running { start: now }
            }
            State::Running { .. } => {
                trace!("stopwatch lap of {:?}", snapshot);
                State::Running { start: now }
            }
            State::Paused { start, paused_at } => {
                let paused_for = now - paused_at;
                trace!("stopwatch resumed after {:?}", paused_for);
                State::Running {
                    start: start + paused_for,
                }
            }
        };

        snapshot
    }

    /// Like [`start`](Self::start), converting the returned time into `T`.
    pub fn start_as<T: FromTicks>(&mut self) -> T {
        T::from_ticks(self.start())
    }

    /// Pauses the stopwatch. Does nothing unless it is running.
    pub fn pause(&mut self) {
        if let State::Running { start } = self.state {
            let paused_at = self.src.now();
            trace!("stopwatch paused at {:?}", paused_at);
            self.state = State::Paused { start, paused_at };
        }
    }

    /// Resets the stopwatch. It has to be started again with
    /// [`start`](Self::start) after this.
    pub fn reset(&mut self) {
        self.state = State::Idle;
    }

    /// Indicates if the stopwatch is not measuring: true when paused, and
    /// also when it has not been started.
    pub fn is_paused(&self) -> bool {
        !self.is_running()
    }

    /// True only while measuring; unlike `is_paused`, false when idle.
    pub fn is_running(&self) -> bool {
        matches!(self.state, State::Running { .. })
    }

    /// True before the first `start` and after `reset`.
    pub fn is_idle(&self) -> bool {
        matches!(self.state, State::Idle)
    }

    /// Returns the elapsed time. This stays fixed while paused.
    pub fn elapsed(&self) -> Elapsed<C> {
        self.measured(|| self.src.now())
    }

    /// Like [`elapsed`](Self::elapsed), converted into `T`.
    pub fn elapsed_as<T: FromTicks>(&self) -> T {
        T::from_ticks(self.elapsed())
    }
}

#[cfg(feature = "time")]
mod time_impl;
