use core::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::time::saturating_millis;
use crate::{
    CompactCounter, CompactId, DEFAULT_EPOCH, FlakeGenerator, FlakeId, MILLIS_PER_MINUTE,
    SystemClock, ThreadRandom, TimeSource, system_time_from_millis,
};

/// Upper bound (exclusive) of the randomly chosen starting counter.
const SEED_RANGE: u8 = 100;

/// A thread-safe generator of 32-bit, minute-resolution [`CompactId`]s.
///
/// Each ID packs the whole minutes elapsed since the epoch above a 7-bit
/// counter. The counter starts at a random value below 100 so generators
/// started in the same minute are unlikely to collide straight away, and it
/// resets to zero after issuing 126.
///
/// Sub-minute precision is always lost, and at most 127 distinct IDs exist
/// per minute per generator.
///
/// [`parse`] floors the epoch to a whole minute before adding the encoded
/// offset, while [`get`] and [`get_from_time`] measure from the exact epoch.
/// With an epoch that is not on a minute boundary, decoded times are
/// therefore up to two minutes early. Use a minute-aligned epoch (such as
/// [`DEFAULT_EPOCH`]) when exact round trips matter.
///
/// [`parse`]: CompactGenerator::parse
/// [`get`]: CompactGenerator::get
/// [`get_from_time`]: CompactGenerator::get_from_time
#[derive(Debug)]
pub struct CompactGenerator<T = SystemClock>
where
    T: TimeSource,
{
    epoch: Duration,
    epoch_millis: i64,
    counter: CompactCounter,
    time: T,
}

impl CompactGenerator {
    /// Creates a generator reading the system clock, with a random starting
    /// counter in `0..100`.
    ///
    /// # Example
    /// ```
    /// use flakeid::{CompactGenerator, DEFAULT_EPOCH};
    ///
    /// let generator = CompactGenerator::new(DEFAULT_EPOCH);
    /// let id = generator.get();
    /// assert!(id.counter() < 127);
    /// ```
    pub fn new(epoch: Duration) -> Self {
        Self::with_time(epoch, SystemClock)
    }
}

impl Default for CompactGenerator {
    /// Constructs a generator anchored at [`DEFAULT_EPOCH`].
    fn default() -> Self {
        Self::new(DEFAULT_EPOCH)
    }
}

impl<T> CompactGenerator<T>
where
    T: TimeSource,
{
    /// Creates a generator with a custom clock and a random starting counter
    /// in `0..100`.
    pub fn with_time(epoch: Duration, time: T) -> Self {
        Self::from_components(epoch, ThreadRandom::below(SEED_RANGE), time)
    }

    /// Creates a generator whose counter starts at `counter % 127`.
    pub fn from_components(epoch: Duration, counter: u8, time: T) -> Self {
        Self {
            epoch,
            epoch_millis: saturating_millis(epoch),
            counter: CompactCounter::new(counter),
            time,
        }
    }

    /// Returns the epoch as a [`Duration`] since 1970-01-01 UTC.
    pub fn epoch(&self) -> Duration {
        self.epoch
    }

    /// Mints the next ID. Never fails.
    ///
    /// A clock reading before the epoch encodes a zero timestamp.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn get(&self) -> CompactId {
        let elapsed = self.time.unix_millis().saturating_sub(self.epoch_millis);
        let minutes = if elapsed > 0 {
            elapsed / MILLIS_PER_MINUTE
        } else {
            0
        };
        let counter = self.counter.next();
        // Truncated to the 25-bit field.
        CompactId::from_components(minutes as u32, counter)
    }

    /// Builds an ID carrying only the minute of `t`, with the counter zero.
    ///
    /// Returns [`CompactId::ZERO`] if `t` is before the epoch, including
    /// when the epoch lies beyond what [`SystemTime`] can represent.
    ///
    /// [`CompactId::ZERO`]: crate::FlakeId::ZERO
    pub fn get_from_time(&self, t: SystemTime) -> CompactId {
        // An epoch past the representable range is later than every `t`.
        let Some(epoch) = UNIX_EPOCH.checked_add(self.epoch) else {
            return CompactId::ZERO;
        };
        match t.duration_since(epoch) {
            Ok(elapsed) => CompactId::from_components((elapsed.as_secs() / 60) as u32, 0),
            Err(_) => CompactId::ZERO,
        }
    }

    /// Recovers the minute `id` was minted in.
    ///
    /// The epoch is floored to a whole minute before the offset is added.
    pub fn parse(&self, id: CompactId) -> SystemTime {
        let epoch_minutes = self.epoch_millis.div_euclid(MILLIS_PER_MINUTE);
        let minutes = epoch_minutes + i64::from(id.elapsed_minutes());
        system_time_from_millis(minutes.saturating_mul(MILLIS_PER_MINUTE))
    }
}

impl<T> FlakeGenerator<CompactId> for CompactGenerator<T>
where
    T: TimeSource,
{
    fn epoch(&self) -> Duration {
        self.epoch()
    }

    fn get(&self) -> CompactId {
        self.get()
    }

    fn get_from_time(&self, t: SystemTime) -> CompactId {
        self.get_from_time(t)
    }

    fn parse(&self, id: CompactId) -> SystemTime {
        self.parse(id)
    }
}
