use core::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::time::saturating_millis;
use crate::{
    DEFAULT_EPOCH, FlakeGenerator, FlakeId, RandSource, StandardId, SystemClock, ThreadRandom,
    TimeSource, WrappingCounter, millis_since_unix, system_time_from_millis,
};

/// A thread-safe generator of 64-bit, millisecond-resolution
/// [`StandardId`]s.
///
/// Each ID packs the milliseconds elapsed since the epoch, a 16-bit random
/// discriminator and a 16-bit counter (see [`StandardId`] for the exact,
/// partially overlapping layout). There is no worker field: uniqueness across
/// independent generators is probabilistic.
///
/// ## Concurrency
/// - The counter is a lock-free atomic; no two concurrent [`get`] calls
///   receive the same counter value until it wraps after 65,536 IDs.
/// - The default [`ThreadRandom`] source keeps one RNG per thread, so
///   discriminator draws never race.
///
/// ## Caveats
/// - Wraparound within one millisecond can repeat an ID. This is not
///   detected or retried.
/// - The system clock is read as-is. If it moves behind the epoch the
///   elapsed value is negative and encoded in two's complement.
///
/// [`get`]: StandardGenerator::get
#[derive(Debug)]
pub struct StandardGenerator<T = SystemClock, R = ThreadRandom>
where
    T: TimeSource,
    R: RandSource<u32>,
{
    epoch: Duration,
    epoch_millis: i64,
    counter: WrappingCounter,
    time: T,
    rng: R,
}

impl StandardGenerator {
    /// Creates a generator reading the system clock and drawing
    /// discriminators from the thread-local RNG.
    ///
    /// # Example
    /// ```
    /// use flakeid::{DEFAULT_EPOCH, StandardGenerator};
    ///
    /// let generator = StandardGenerator::new(DEFAULT_EPOCH);
    /// let a = generator.get();
    /// let b = generator.get();
    /// assert_ne!(a, b);
    /// assert_eq!(b.counter(), a.counter().wrapping_add(1));
    /// ```
    pub fn new(epoch: Duration) -> Self {
        Self::with_sources(epoch, SystemClock, ThreadRandom)
    }
}

impl Default for StandardGenerator {
    /// Constructs a generator anchored at [`DEFAULT_EPOCH`].
    fn default() -> Self {
        Self::new(DEFAULT_EPOCH)
    }
}

impl<T, R> StandardGenerator<T, R>
where
    T: TimeSource,
    R: RandSource<u32>,
{
    /// Creates a generator with a custom clock and random source. The
    /// counter starts at zero.
    pub fn with_sources(epoch: Duration, time: T, rng: R) -> Self {
        Self::from_components(epoch, 0, time, rng)
    }

    /// Creates a generator whose counter starts at `counter`.
    ///
    /// Useful for continuing a sequence, and for exercising wraparound.
    pub fn from_components(epoch: Duration, counter: u16, time: T, rng: R) -> Self {
        Self {
            epoch,
            epoch_millis: saturating_millis(epoch),
            counter: WrappingCounter::new(counter),
            time,
            rng,
        }
    }

    /// Returns the epoch as a [`Duration`] since 1970-01-01 UTC.
    pub fn epoch(&self) -> Duration {
        self.epoch
    }

    /// Mints the next ID. Never fails.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn get(&self) -> StandardId {
        let elapsed = self.time.unix_millis().saturating_sub(self.epoch_millis);
        let discriminator = (self.rng.rand() >> 16) as u16;
        let counter = self.counter.next();
        StandardId::from_components(elapsed, discriminator, counter)
    }

    /// Builds an ID carrying only the timestamp of `t`, with discriminator
    /// and counter zero.
    ///
    /// Returns [`StandardId::ZERO`] if `t` is before the epoch, including
    /// when the epoch lies beyond what [`SystemTime`] can represent.
    ///
    /// [`StandardId::ZERO`]: crate::FlakeId::ZERO
    pub fn get_from_time(&self, t: SystemTime) -> StandardId {
        // An epoch past the representable range is later than every `t`.
        let Some(epoch) = UNIX_EPOCH.checked_add(self.epoch) else {
            return StandardId::ZERO;
        };
        match t.duration_since(epoch) {
            Ok(elapsed) => StandardId::from_components(saturating_millis(elapsed), 0, 0),
            Err(_) => StandardId::ZERO,
        }
    }

    /// Recovers the creation time of `id` to the millisecond.
    ///
    /// IDs whose discriminator has any of its top 10 bits set decode up to
    /// 1023 ms late; see [`StandardId`].
    pub fn parse(&self, id: StandardId) -> SystemTime {
        system_time_from_millis(id.elapsed_millis().saturating_add(self.epoch_millis))
    }

    /// Returns the number of milliseconds between the epoch and `t`.
    pub fn elapsed_millis_at(&self, t: SystemTime) -> i64 {
        millis_since_unix(t).saturating_sub(self.epoch_millis)
    }
}

impl<T, R> FlakeGenerator<StandardId> for StandardGenerator<T, R>
where
    T: TimeSource,
    R: RandSource<u32>,
{
    fn epoch(&self) -> Duration {
        self.epoch()
    }

    fn get(&self) -> StandardId {
        self.get()
    }

    fn get_from_time(&self, t: SystemTime) -> StandardId {
        self.get_from_time(t)
    }

    fn parse(&self, id: StandardId) -> SystemTime {
        self.parse(id)
    }
}
