use crate::{Error, FlakeId};
use core::fmt;
use core::str::FromStr;

/// A 32-bit identifier with minute resolution.
///
/// - 25 bits timestamp (minutes since the generator's epoch)
/// - 7 bits counter
///
/// ```text
///  Bit Index:  31              7 6             0
///              +----------------+---------------+
///  Field:      | timestamp (25) |  counter (7)  |
///              +----------------+---------------+
///              |<-- MSB --- 32 bits --- LSB --->|
/// ```
///
/// The fields are disjoint, so decoding is exact up to the minute.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CompactId {
    id: u32,
}

impl CompactId {
    /// Bitmask for the 25-bit timestamp field. Occupies bits 7 through 31.
    pub const TIMESTAMP_MASK: u32 = (1 << 25) - 1;

    /// Bitmask for the 7-bit counter field. Occupies bits 0 through 6.
    pub const COUNTER_MASK: u32 = (1 << 7) - 1;

    /// Number of bits to shift the timestamp to its position (bit 7).
    pub const TIMESTAMP_SHIFT: u32 = 7;

    /// Packs the two fields into one ID. Minutes beyond the 25-bit field are
    /// truncated to their low bits.
    pub const fn from_components(elapsed_minutes: u32, counter: u8) -> Self {
        let timestamp = (elapsed_minutes & Self::TIMESTAMP_MASK) << Self::TIMESTAMP_SHIFT;
        let counter = counter as u32 & Self::COUNTER_MASK;
        Self {
            id: timestamp | counter,
        }
    }

    pub const fn from_raw(raw: u32) -> Self {
        Self { id: raw }
    }

    pub const fn to_raw(&self) -> u32 {
        self.id
    }

    /// Extracts the minute offset from the epoch.
    pub const fn elapsed_minutes(&self) -> u32 {
        self.id >> Self::TIMESTAMP_SHIFT
    }

    /// Extracts the counter from the low 7 bits.
    pub const fn counter(&self) -> u8 {
        (self.id & Self::COUNTER_MASK) as u8
    }
}

impl FlakeId for CompactId {
    type Ty = u32;

    const ZERO: Self = Self { id: 0 };
    const RESOLUTION_MILLIS: i64 = crate::MILLIS_PER_MINUTE;
    const KIND: &'static str = "compact";

    fn to_raw(&self) -> Self::Ty {
        self.to_raw()
    }

    fn from_raw(raw: Self::Ty) -> Self {
        Self::from_raw(raw)
    }

    fn elapsed_units(&self) -> i64 {
        i64::from(self.elapsed_minutes())
    }
}

impl fmt::Display for CompactId {
    /// Renders the unpadded lowercase hexadecimal form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.id, f)
    }
}

impl fmt::LowerHex for CompactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.id, f)
    }
}

impl fmt::UpperHex for CompactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.id, f)
    }
}

impl fmt::Debug for CompactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompactId")
            .field("id", &format_args!("{:#010x}", self.id))
            .field("elapsed_minutes", &self.elapsed_minutes())
            .field("counter", &self.counter())
            .finish()
    }
}

impl FromStr for CompactId {
    type Err = Error;

    /// Parses the hexadecimal form produced by [`fmt::Display`]. Either
    /// letter case is accepted; a `0x` prefix or a sign is not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Error::ensure_unsigned(<Self as FlakeId>::KIND, s)?;
        u32::from_str_radix(s, 16)
            .map(Self::from_raw)
            .map_err(|e| Error::parse_id(<Self as FlakeId>::KIND, s, e))
    }
}

impl From<u32> for CompactId {
    fn from(raw: u32) -> Self {
        Self::from_raw(raw)
    }
}

impl From<CompactId> for u32 {
    fn from(id: CompactId) -> Self {
        id.to_raw()
    }
}
