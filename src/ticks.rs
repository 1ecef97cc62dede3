use std::convert::TryFrom;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::units::{self, Day, Hour, Micro, Milli, Minute, Nano, Period, Second, NANOS_PER_SEC};
use crate::{Error, Result};

/// A signed count of `P` ticks.
///
/// This is the crate's integer duration type. Unlike `std::time::Duration`
/// it can be negative, and the tick length is part of the type, so
/// converting between units is always explicit (see [`convert`]).
///
/// Arithmetic saturates at the bounds of `i64` rather than wrapping or
/// panicking.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(transparent, bound = ""))]
pub struct Ticks<P> {
    count: i64,
    #[cfg_attr(feature = "serialization", serde(skip))]
    period: PhantomData<P>,
}

pub type Nanoseconds = Ticks<Nano>;
pub type Microseconds = Ticks<Micro>;
pub type Milliseconds = Ticks<Milli>;
pub type Seconds = Ticks<Second>;
pub type Minutes = Ticks<Minute>;
pub type Hours = Ticks<Hour>;
pub type Days = Ticks<Day>;

/// A fractional count of `P` ticks, for measurements that should not be
/// truncated to a whole unit.
#[derive(Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(transparent, bound = ""))]
pub struct Fractional<P> {
    count: f64,
    #[cfg_attr(feature = "serialization", serde(skip))]
    period: PhantomData<P>,
}

pub type FNanoseconds = Fractional<Nano>;
pub type FMicroseconds = Fractional<Micro>;
pub type FMilliseconds = Fractional<Milli>;
pub type FSeconds = Fractional<Second>;

/// Types that a duration can be converted into.
///
/// Integer targets truncate toward zero, floating targets keep the fraction.
pub trait FromTicks: Sized {
    /// Builds `Self` from a tick count of any period.
    fn from_ticks<P: Period>(t: Ticks<P>) -> Self;
}

/// Signed scalar durations that component records can be summed into.
pub trait Scalar: FromTicks + Add<Output = Self> + Default {}

/// Converts `t` into any [`FromTicks`] representation.
///
/// Converting to the type `t` already has is allowed and returns it
/// unchanged.
pub fn convert<T: FromTicks, P: Period>(t: Ticks<P>) -> T {
    T::from_ticks(t)
}

pub(crate) fn saturate(v: i128) -> i64 {
    i64::try_from(v).unwrap_or(if v < 0 { i64::MIN } else { i64::MAX })
}

impl<P: Period> Ticks<P> {
    pub const ZERO: Self = Ticks::new(0);
    pub const MAX: Self = Ticks::new(i64::MAX);
    pub const MIN: Self = Ticks::new(i64::MIN);

    /// Returns a duration of `count` ticks.
    pub const fn new(count: i64) -> Self {
        Ticks {
            count,
            period: PhantomData,
        }
    }

    /// Returns the number of ticks.
    pub const fn count(self) -> i64 {
        self.count
    }

    pub fn is_zero(self) -> bool {
        self.count == 0
    }

    pub fn is_negative(self) -> bool {
        self.count < 0
    }

    /// Returns `-1`, `0` or `1` according to the sign of the duration.
    pub fn signum(self) -> i64 {
        self.count.signum()
    }

    pub fn abs(self) -> Self {
        Ticks::new(self.count.saturating_abs())
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.count.checked_add(rhs.count).map(Ticks::new)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.count.checked_sub(rhs.count).map(Ticks::new)
    }

    /// Converts into another representation; see [`convert`].
    pub fn convert<T: FromTicks>(self) -> T {
        T::from_ticks(self)
    }

    /// Returns the tick count in `Q` as an exact `i128`, truncated toward
    /// zero.
    pub(crate) fn rescaled<Q: Period>(self) -> i128 {
        units::rescale::<P, Q>(i128::from(self.count))
    }
}

impl<P: Period> FromTicks for Ticks<P> {
    fn from_ticks<Q: Period>(t: Ticks<Q>) -> Self {
        Ticks::new(saturate(t.rescaled::<P>()))
    }
}

impl<P: Period> Scalar for Ticks<P> {}

impl<P: Period> fmt::Debug for Ticks<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_tuple("Ticks")
            .field(&self.count)
            .field(&P::default())
            .finish()
    }
}

impl<P: Period> Add for Ticks<P> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Ticks::new(self.count.saturating_add(rhs.count))
    }
}

impl<P: Period> Sub for Ticks<P> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Ticks::new(self.count.saturating_sub(rhs.count))
    }
}

impl<P: Period> Neg for Ticks<P> {
    type Output = Self;
    fn neg(self) -> Self {
        Ticks::new(self.count.saturating_neg())
    }
}

impl<P: Period> AddAssign for Ticks<P> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<P: Period> SubAssign for Ticks<P> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<P: Period> Fractional<P> {
    pub const ZERO: Self = Fractional::new(0.0);

    pub const fn new(count: f64) -> Self {
        Fractional {
            count,
            period: PhantomData,
        }
    }

    /// Returns the (possibly fractional) number of ticks.
    pub const fn count(self) -> f64 {
        self.count
    }

    /// Re-expresses the same duration in ticks of `Q`.
    pub fn cast<Q: Period>(self) -> Fractional<Q> {
        Fractional::new(units::rescale_f64::<P, Q>(self.count))
    }
}

impl<P: Period> FromTicks for Fractional<P> {
    fn from_ticks<Q: Period>(t: Ticks<Q>) -> Self {
        Fractional::new(units::rescale_f64::<Q, P>(t.count as f64))
    }
}

impl<P: Period> Scalar for Fractional<P> {}

impl<P: Period> fmt::Debug for Fractional<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_tuple("Fractional")
            .field(&self.count)
            .field(&P::default())
            .finish()
    }
}

impl<P: Period> Add for Fractional<P> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Fractional::new(self.count + rhs.count)
    }
}

impl<P: Period> Sub for Fractional<P> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Fractional::new(self.count - rhs.count)
    }
}

impl<P: Period> Neg for Fractional<P> {
    type Output = Self;
    fn neg(self) -> Self {
        Fractional::new(-self.count)
    }
}

/// Builds a `std::time::Duration` from a non-negative nanosecond count.
pub(crate) fn std_from_nanos(nanos: i128) -> Result<std::time::Duration> {
    if nanos < 0 {
        return Err(Error::NegativeDuration(nanos));
    }
    let per_sec = i128::from(NANOS_PER_SEC);
    let secs = u64::try_from(nanos / per_sec).map_err(|_| Error::OutOfRange(nanos))?;
    let subsec = u32::try_from(nanos % per_sec)?;
    Ok(std::time::Duration::new(secs, subsec))
}

/// Negative durations clamp to zero, since `std::time::Duration` is
/// unsigned. Use `TryFrom` to have that reported instead.
impl FromTicks for std::time::Duration {
    fn from_ticks<P: Period>(t: Ticks<P>) -> Self {
        match std_from_nanos(t.rescaled::<Nano>()) {
            Ok(d) => d,
            Err(_) if t.is_negative() => std::time::Duration::ZERO,
            Err(_) => std::time::Duration::MAX,
        }
    }
}

impl<P: Period> TryFrom<Ticks<P>> for std::time::Duration {
    type Error = Error;
    fn try_from(t: Ticks<P>) -> Result<Self> {
        std_from_nanos(t.rescaled::<Nano>())
    }
}

impl<P: Period> TryFrom<std::time::Duration> for Ticks<P> {
    type Error = Error;
    fn try_from(d: std::time::Duration) -> Result<Self> {
        let nanos = i128::try_from(d.as_nanos())?;
        let count = units::rescale::<Nano, P>(nanos);
        let count = i64::try_from(count).map_err(|_| Error::OutOfRange(count))?;
        Ok(Ticks::new(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryInto;
    use std::time::Duration;

    #[test]
    fn converts_to_coarser_by_truncating_toward_zero() {
        let s: Seconds = convert(Milliseconds::new(2_500));
        assert_eq!(s, Seconds::new(2));
        let s: Seconds = convert(Milliseconds::new(-2_500));
        assert_eq!(s, Seconds::new(-2));
    }

    #[test]
    fn converts_to_finer_exactly() {
        let ns: Nanoseconds = Days::new(7).convert();
        assert_eq!(ns.count(), 7 * 86_400 * NANOS_PER_SEC);
    }

    #[test]
    fn same_unit_conversion_is_identity() {
        let t = Minutes::new(-42);
        assert_eq!(convert::<Minutes, _>(t), t);
    }

    #[test]
    fn conversion_saturates_when_out_of_range() {
        let ns: Nanoseconds = Days::new(i64::MAX).convert();
        assert_eq!(ns, Nanoseconds::MAX);
        let ns: Nanoseconds = Days::new(i64::MIN).convert();
        assert_eq!(ns, Nanoseconds::MIN);
    }

    #[test]
    fn conversion_from_huge_periods_saturates() {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        struct Eon;
        impl Period for Eon {
            const NUM: i64 = i64::MAX;
            const DEN: i64 = 1;
        }

        assert_eq!(Ticks::<Eon>::new(i64::MAX).convert::<Nanoseconds>(), Nanoseconds::MAX);
        assert_eq!(Ticks::<Eon>::new(-3).convert::<Nanoseconds>(), Nanoseconds::MIN);
    }

    #[test]
    fn fractional_keeps_the_fraction() {
        let s: FSeconds = convert(Milliseconds::new(1_500));
        assert_eq!(s.count(), 1.5);
        let ms: FMilliseconds = s.cast();
        assert_eq!(ms.count(), 1_500.0);
        let s: FSeconds = convert(Milliseconds::new(-250));
        assert_eq!(s.count(), -0.25);
    }

    #[test]
    fn arithmetic_saturates() {
        assert_eq!(Seconds::MAX + Seconds::new(1), Seconds::MAX);
        assert_eq!(Seconds::MIN - Seconds::new(1), Seconds::MIN);
        assert_eq!(-Seconds::MIN, Seconds::MAX);
        assert_eq!(Seconds::MAX.checked_add(Seconds::new(1)), None);
    }

    #[test]
    fn std_duration_clamps_negative_values() {
        let d: Duration = convert(Milliseconds::new(-5));
        assert_eq!(d, Duration::ZERO);
        let d: Duration = convert(Milliseconds::new(1_005));
        assert_eq!(d, Duration::from_millis(1_005));
    }

    #[test]
    fn std_duration_try_from_reports_negative_values() {
        let res: Result<Duration> = Milliseconds::new(-5).try_into();
        match res {
            Err(Error::NegativeDuration(n)) => assert_eq!(n, -5_000_000),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn ticks_from_std_duration() -> Result<()> {
        let t: Microseconds = Duration::from_nanos(1_999).try_into()?;
        assert_eq!(t, Microseconds::new(1));
        let big: Result<Nanoseconds> = Duration::MAX.try_into();
        assert!(big.is_err());
        Ok(())
    }

    #[test]
    fn debug_names_the_period() {
        assert_eq!(format!("{:?}", Milliseconds::new(3)), "Ticks(3, Milli)");
    }
}
