use crate::{Error, FlakeId};
use core::fmt;
use core::str::FromStr;

/// A 64-bit identifier with millisecond resolution.
///
/// - timestamp (ms since the generator's epoch), two's complement, from bit 22
/// - 16 bits random discriminator, from bit 16
/// - 16 bits counter
///
/// ```text
///  Bit Index:  63              32 31        22 21        16 15            0
///              +-----------------+------------+------------+--------------+
///  timestamp:  |      elapsed millis (42)     |            |              |
///  random:     |                 |  discriminator (16)     |              |
///  counter:    |                 |            |            | counter (16) |
///              +-----------------+------------+------------+--------------+
/// ```
///
/// The discriminator and the timestamp share bits 22 through 31 and are
/// combined with a bitwise OR. Decoding therefore cannot separate the top 10
/// bits of the discriminator from the low 10 bits of the timestamp: an ID
/// whose discriminator has any of those bits set parses to a time up to
/// 1023 ms later than it was minted. The layout is part of the stored format
/// and must not change.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StandardId {
    id: u64,
}

impl StandardId {
    /// Number of bits to shift the timestamp to its position (bit 22).
    pub const TIMESTAMP_SHIFT: u32 = 22;

    /// Number of bits to shift the discriminator to its position (bit 16).
    pub const DISCRIMINATOR_SHIFT: u32 = 16;

    /// Bitmask for the 16-bit discriminator field.
    pub const DISCRIMINATOR_MASK: u64 = (1 << 16) - 1;

    /// Bitmask for the 16-bit counter field. Occupies bits 0 through 15.
    pub const COUNTER_MASK: u64 = (1 << 16) - 1;

    /// Packs the three fields into one ID.
    ///
    /// `elapsed_millis` is reinterpreted as unsigned, so a negative offset
    /// (clock behind the epoch) sets the high bits and is recovered by
    /// [`Self::elapsed_millis`].
    pub const fn from_components(elapsed_millis: i64, discriminator: u16, counter: u16) -> Self {
        let timestamp = (elapsed_millis as u64) << Self::TIMESTAMP_SHIFT;
        let discriminator = (discriminator as u64) << Self::DISCRIMINATOR_SHIFT;
        Self {
            id: timestamp | discriminator | counter as u64,
        }
    }

    pub const fn from_raw(raw: u64) -> Self {
        Self { id: raw }
    }

    pub const fn to_raw(&self) -> u64 {
        self.id
    }

    /// Recovers the millisecond offset from the epoch using an arithmetic
    /// shift on the signed interpretation.
    ///
    /// Includes any discriminator bits that landed in bits 22 through 31.
    pub const fn elapsed_millis(&self) -> i64 {
        (self.id as i64) >> Self::TIMESTAMP_SHIFT
    }

    /// Extracts bits 16 through 31. The upper 10 bits also carry timestamp
    /// bits.
    pub const fn discriminator(&self) -> u16 {
        ((self.id >> Self::DISCRIMINATOR_SHIFT) & Self::DISCRIMINATOR_MASK) as u16
    }

    /// Extracts the counter from the low 16 bits.
    pub const fn counter(&self) -> u16 {
        (self.id & Self::COUNTER_MASK) as u16
    }

    /// Returns the ID as a zero-padded 20-digit decimal string, which sorts
    /// lexicographically in the same order as the integer.
    pub fn to_padded_string(&self) -> String {
        format!("{:020}", self.id)
    }
}

impl FlakeId for StandardId {
    type Ty = u64;

    const ZERO: Self = Self { id: 0 };
    const RESOLUTION_MILLIS: i64 = 1;
    const KIND: &'static str = "standard";

    fn to_raw(&self) -> Self::Ty {
        self.to_raw()
    }

    fn from_raw(raw: Self::Ty) -> Self {
        Self::from_raw(raw)
    }

    fn elapsed_units(&self) -> i64 {
        self.elapsed_millis()
    }
}

impl fmt::Display for StandardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.id, f)
    }
}

impl fmt::Debug for StandardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StandardId")
            .field("id", &self.id)
            .field("elapsed_millis", &self.elapsed_millis())
            .field("discriminator", &format_args!("{:#06x}", self.discriminator()))
            .field("counter", &self.counter())
            .finish()
    }
}

impl FromStr for StandardId {
    type Err = Error;

    /// Parses the decimal form produced by [`fmt::Display`]. Signs are
    /// rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Error::ensure_unsigned(<Self as FlakeId>::KIND, s)?;
        s.parse::<u64>()
            .map(Self::from_raw)
            .map_err(|e| Error::parse_id(<Self as FlakeId>::KIND, s, e))
    }
}

impl From<u64> for StandardId {
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<StandardId> for u64 {
    fn from(id: StandardId) -> Self {
        id.to_raw()
    }
}
