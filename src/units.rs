use std::fmt;

/// Nanoseconds in one second.
pub const NANOS_PER_SEC: i64 = 1_000_000_000;
/// Seconds in one day.
pub const SECS_PER_DAY: i64 = 60 * 60 * 24;

/// A fixed tick length, expressed as `NUM / DEN` seconds per tick.
///
/// Periods are zero-sized markers; they only exist at the type level so that
/// `Ticks<Milli>` and `Ticks<Second>` can never be mixed up by accident. To
/// describe a clock with an unusual resolution, implement this trait for
/// your own marker type:
///
/// ```
/// use stopwatch::Period;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
/// struct Sixteenths;
///
/// impl Period for Sixteenths {
///     const NUM: i64 = 1;
///     const DEN: i64 = 1 << 16;
/// }
/// ```
pub trait Period: Copy + Eq + Ord + fmt::Debug + Default + 'static {
    /// Numerator of the seconds-per-tick ratio.
    const NUM: i64;
    /// Denominator of the seconds-per-tick ratio.
    const DEN: i64;
}

macro_rules! period {
    ($(#[$doc:meta])* $name:ident, $num:expr, $den:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name;

        impl Period for $name {
            const NUM: i64 = $num;
            const DEN: i64 = $den;
        }
    };
}

period!(
    /// One billionth of a second.
    Nano, 1, NANOS_PER_SEC
);
period!(
    /// One millionth of a second.
    Micro, 1, 1_000_000
);
period!(
    /// One thousandth of a second.
    Milli, 1, 1_000
);
period!(Second, 1, 1);
period!(Minute, 60, 1);
period!(Hour, 60 * 60, 1);
period!(Day, SECS_PER_DAY, 1);

/// Rescales `count` ticks of `From` into ticks of `To`, truncating toward
/// zero. The result is exact in `i128` for every `i64` input and every
/// period used by this crate; results beyond `i128` saturate.
pub(crate) fn rescale<From: Period, To: Period>(count: i128) -> i128 {
    let num = i128::from(From::NUM) * i128::from(To::DEN);
    let den = i128::from(From::DEN) * i128::from(To::NUM);
    if num == den {
        return count;
    }
    match count.checked_mul(num) {
        // Integer division in Rust already truncates toward zero.
        Some(scaled) => scaled / den,
        None => (count / den)
            .checked_mul(num)
            .unwrap_or(if count < 0 { i128::MIN } else { i128::MAX }),
    }
}

/// Rescales a fractional tick count of `From` into ticks of `To`.
pub(crate) fn rescale_f64<From: Period, To: Period>(count: f64) -> f64 {
    count * (From::NUM as f64 * To::DEN as f64) / (From::DEN as f64 * To::NUM as f64)
}
