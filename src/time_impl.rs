use std::convert::TryFrom;

use crate::ticks::{FromTicks, Ticks};
use crate::units::{Nano, Period, NANOS_PER_SEC};
use crate::{DurationComponents, Error, Result};

fn split_nanos(nanos: i128) -> (i128, i32) {
    let per_sec = i128::from(NANOS_PER_SEC);
    // Both parts keep the sign of `nanos`, which `time::Duration::new` accepts.
    (nanos / per_sec, (nanos % per_sec) as i32)
}

/// Saturates at the bounds of `time::Duration`.
impl FromTicks for time::Duration {
    fn from_ticks<P: Period>(t: Ticks<P>) -> Self {
        let (secs, subsec) = split_nanos(t.rescaled::<Nano>());
        match i64::try_from(secs) {
            Ok(secs) => time::Duration::new(secs, subsec),
            Err(_) if secs < 0 => time::Duration::MIN,
            Err(_) => time::Duration::MAX,
        }
    }
}

impl From<time::Duration> for DurationComponents {
    fn from(d: time::Duration) -> Self {
        DurationComponents::from_nanos(d.whole_nanoseconds())
    }
}

impl TryFrom<DurationComponents> for time::Duration {
    type Error = Error;
    fn try_from(c: DurationComponents) -> Result<Self> {
        let total = c.total_nanos();
        let (secs, subsec) = split_nanos(total);
        let secs = i64::try_from(secs).map_err(|_| Error::OutOfRange(total))?;
        Ok(time::Duration::new(secs, subsec))
    }
}
