use core::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

/// Default epoch: Friday, January 1, 2021 00:00:00 UTC
pub const DEFAULT_EPOCH: Duration = Duration::from_millis(1_609_459_200_000);

/// Milliseconds in one minute, the resolution of [`CompactId`].
///
/// [`CompactId`]: crate::CompactId
pub const MILLIS_PER_MINUTE: i64 = 60_000;

/// A trait for wall-clock sources.
///
/// This abstraction allows you to plug in the real system clock or a mocked
/// time source in tests. Unlike a monotonic ticker, the returned value may
/// move backward if the underlying clock is adjusted; generators do not
/// correct for this.
///
/// # Example
///
/// ```
/// use flakeid::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn unix_millis(&self) -> i64 {
///         1234
///     }
/// }
///
/// assert_eq!(FixedTime.unix_millis(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current time in milliseconds since 1970-01-01 UTC.
    ///
    /// Negative values denote instants before the Unix epoch.
    fn unix_millis(&self) -> i64;
}

/// Converts a point in time into signed milliseconds since the Unix epoch,
/// truncating sub-millisecond precision toward zero.
pub fn millis_since_unix(t: SystemTime) -> i64 {
    match t.duration_since(UNIX_EPOCH) {
        Ok(after) => saturating_millis(after),
        Err(before) => -saturating_millis(before.duration()),
    }
}

/// Converts signed milliseconds since the Unix epoch back into a
/// [`SystemTime`].
pub fn system_time_from_millis(millis: i64) -> SystemTime {
    let magnitude = Duration::from_millis(millis.unsigned_abs());
    if millis >= 0 {
        UNIX_EPOCH + magnitude
    } else {
        UNIX_EPOCH - magnitude
    }
}

pub(crate) fn saturating_millis(d: Duration) -> i64 {
    i64::try_from(d.as_millis()).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_epoch_is_start_of_2021() {
        assert_eq!(millis_since_unix(UNIX_EPOCH + DEFAULT_EPOCH), 1_609_459_200_000);
    }

    #[test]
    fn converts_instants_on_both_sides_of_unix_epoch() {
        for millis in [-86_400_000, -1, 0, 1, 1_609_459_200_000] {
            assert_eq!(millis_since_unix(system_time_from_millis(millis)), millis);
        }
    }

    #[test]
    fn truncates_sub_millisecond_precision() {
        let t = UNIX_EPOCH + Duration::from_micros(2_999);
        assert_eq!(millis_since_unix(t), 2);
    }
}
