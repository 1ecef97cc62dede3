use std::convert::TryFrom;
use std::ops::Neg;

use crate::ticks::{
    self, Days, FromTicks, Hours, Microseconds, Milliseconds, Minutes, Nanoseconds, Scalar,
    Seconds, Ticks,
};
use crate::units::{self, Day, Hour, Micro, Milli, Minute, Nano, Period, Second};
use crate::{Error, Result};

/// A duration broken down into calendar-like components.
///
/// When produced by [`decompose`] every non-zero field carries the sign of
/// the source duration, and each field below `days` stays within the range
/// of its unit (e.g. `hours` is in `-23..=23`). Records built by hand are not
/// normalised: `{ hours: 25, .. }` is a perfectly good input to
/// [`recompose`] and simply means twenty-five hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct DurationComponents {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub milliseconds: i64,
    pub microseconds: i64,
    pub nanoseconds: i64,
}

/// Splits `t` into days, hours, minutes, seconds, milliseconds,
/// microseconds and nanoseconds.
///
/// Each unit, coarsest first, takes the whole number of itself out of what
/// remains, truncating toward zero, so every field keeps the sign of `t`.
/// Nothing is lost unless `P` is finer than a nanosecond.
pub fn decompose<P: Period>(t: Ticks<P>) -> DurationComponents {
    DurationComponents::from_nanos(t.rescaled::<Nano>())
}

/// Sums the components of `c` into `T`.
///
/// Every field is converted into `T` on its own, so a `T` coarser than a
/// field truncates that field's contribution.
pub fn recompose<T: Scalar>(c: &DurationComponents) -> T {
    c.recompose()
}

/// Takes the whole number of `U` out of `rest` (in nanoseconds).
fn extract<U: Period>(rest: &mut i128) -> i64 {
    let unit = units::rescale::<U, Nano>(1);
    let whole = *rest / unit;
    *rest -= whole * unit;
    ticks::saturate(whole)
}

impl DurationComponents {
    pub(crate) fn from_nanos(nanos: i128) -> Self {
        let mut rest = nanos;
        let days = extract::<Day>(&mut rest);
        let hours = extract::<Hour>(&mut rest);
        let minutes = extract::<Minute>(&mut rest);
        let seconds = extract::<Second>(&mut rest);
        let milliseconds = extract::<Milli>(&mut rest);
        let microseconds = extract::<Micro>(&mut rest);
        let nanoseconds = extract::<Nano>(&mut rest);
        debug_assert_eq!(rest, 0);

        DurationComponents {
            days,
            hours,
            minutes,
            seconds,
            milliseconds,
            microseconds,
            nanoseconds,
        }
    }

    fn fields(&self) -> [i128; 7] {
        [
            Days::new(self.days).rescaled::<Nano>(),
            Hours::new(self.hours).rescaled::<Nano>(),
            Minutes::new(self.minutes).rescaled::<Nano>(),
            Seconds::new(self.seconds).rescaled::<Nano>(),
            Milliseconds::new(self.milliseconds).rescaled::<Nano>(),
            Microseconds::new(self.microseconds).rescaled::<Nano>(),
            i128::from(self.nanoseconds),
        ]
    }

    /// The exact total, in nanoseconds.
    pub fn total_nanos(&self) -> i128 {
        self.fields().iter().sum()
    }

    pub fn is_zero(&self) -> bool {
        *self == DurationComponents::default()
    }

    /// Returns `-1`, `0` or `1` according to the sign of the total.
    pub fn signum(&self) -> i64 {
        self.total_nanos().signum() as i64
    }

    /// Sums the components into `T`. See [`recompose`].
    pub fn recompose<T: Scalar>(&self) -> T {
        T::from_ticks(Days::new(self.days))
            + T::from_ticks(Hours::new(self.hours))
            + T::from_ticks(Minutes::new(self.minutes))
            + T::from_ticks(Seconds::new(self.seconds))
            + T::from_ticks(Milliseconds::new(self.milliseconds))
            + T::from_ticks(Microseconds::new(self.microseconds))
            + T::from_ticks(Nanoseconds::new(self.nanoseconds))
    }

    /// Like [`recompose`](Self::recompose) into `Ticks<P>`, but reports a
    /// total that does not fit in `i64` ticks instead of saturating.
    pub fn checked_recompose<P: Period>(&self) -> Result<Ticks<P>> {
        let total: i128 = [
            Days::new(self.days).rescaled::<P>(),
            Hours::new(self.hours).rescaled::<P>(),
            Minutes::new(self.minutes).rescaled::<P>(),
            Seconds::new(self.seconds).rescaled::<P>(),
            Milliseconds::new(self.milliseconds).rescaled::<P>(),
            Microseconds::new(self.microseconds).rescaled::<P>(),
            Nanoseconds::new(self.nanoseconds).rescaled::<P>(),
        ]
        .iter()
        .sum();
        let count = i64::try_from(total).map_err(|_| Error::OutOfRange(total))?;
        Ok(Ticks::new(count))
    }
}

impl FromTicks for DurationComponents {
    fn from_ticks<P: Period>(t: Ticks<P>) -> Self {
        decompose(t)
    }
}

impl<P: Period> From<Ticks<P>> for DurationComponents {
    fn from(t: Ticks<P>) -> Self {
        decompose(t)
    }
}

impl From<std::time::Duration> for DurationComponents {
    fn from(d: std::time::Duration) -> Self {
        // `as_nanos` tops out near 2^94, well inside i128.
        DurationComponents::from_nanos(d.as_nanos() as i128)
    }
}

impl TryFrom<DurationComponents> for std::time::Duration {
    type Error = Error;
    fn try_from(c: DurationComponents) -> Result<Self> {
        ticks::std_from_nanos(c.total_nanos())
    }
}

impl Neg for DurationComponents {
    type Output = Self;
    fn neg(self) -> Self {
        DurationComponents {
            days: self.days.saturating_neg(),
            hours: self.hours.saturating_neg(),
            minutes: self.minutes.saturating_neg(),
            seconds: self.seconds.saturating_neg(),
            milliseconds: self.milliseconds.saturating_neg(),
            microseconds: self.microseconds.saturating_neg(),
            nanoseconds: self.nanoseconds.saturating_neg(),
        }
    }
}
