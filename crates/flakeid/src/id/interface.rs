use crate::Error;
use core::fmt;
use core::hash::Hash;
use core::str::FromStr;

/// A trait for fixed-width identifiers that pack an epoch-relative timestamp
/// into the high bits of an unsigned integer.
///
/// Both layouts in this crate implement it, which lets generic code (serde
/// adapters, test runners, benchmarks) treat them uniformly.
pub trait FlakeId:
    Copy
    + Clone
    + fmt::Display
    + fmt::Debug
    + FromStr<Err = Error>
    + PartialOrd
    + Ord
    + PartialEq
    + Eq
    + Hash
{
    /// Scalar type backing the ID (`u64` or `u32`).
    type Ty: Copy + Default + fmt::Debug + fmt::Display + Ord + Hash;

    /// The zero-value ID, used as the "before epoch" sentinel.
    const ZERO: Self;

    /// Width of one timestamp unit, in milliseconds.
    const RESOLUTION_MILLIS: i64;

    /// Short human readable name used in error messages.
    const KIND: &'static str;

    /// Converts this type into its raw integer representation.
    fn to_raw(&self) -> Self::Ty;

    /// Converts a raw integer into this type. Every bit pattern is accepted.
    fn from_raw(raw: Self::Ty) -> Self;

    /// Returns the number of timestamp units since the generator's epoch
    /// encoded in this ID.
    fn elapsed_units(&self) -> i64;

    /// Returns `true` if this is the zero-value sentinel.
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}
