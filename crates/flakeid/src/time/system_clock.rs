use crate::{TimeSource, millis_since_unix};
use std::time::SystemTime;

/// A [`TimeSource`] backed by [`SystemTime::now`].
///
/// Every call reads the wall clock, so values follow NTP steps and manual
/// adjustments in either direction.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn unix_millis(&self) -> i64 {
        millis_since_unix(SystemTime::now())
    }
}
