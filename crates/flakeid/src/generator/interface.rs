use crate::{FlakeId, Result};
use core::time::Duration;
use std::time::SystemTime;

/// A minimal interface shared by the generators in this crate.
///
/// Every method except [`FlakeGenerator::parse_str`] is infallible so IDs can
/// be minted on hot paths without error handling at the call site.
pub trait FlakeGenerator<ID>
where
    ID: FlakeId,
{
    /// Returns the epoch all IDs from this generator are relative to, as a
    /// [`Duration`] since 1970-01-01 UTC.
    fn epoch(&self) -> Duration;

    /// Mints the next ID from the current time.
    fn get(&self) -> ID;

    /// Builds an ID with only the timestamp field set, for use as a range
    /// boundary ("every ID minted at or after `t`").
    ///
    /// Returns [`FlakeId::ZERO`] when `t` is earlier than the epoch.
    fn get_from_time(&self, t: SystemTime) -> ID;

    /// Recovers the approximate creation time of `id`, truncated to the ID's
    /// resolution.
    ///
    /// Only meaningful for IDs minted by a generator with the same epoch.
    fn parse(&self, id: ID) -> SystemTime;

    /// Parses the text form of an ID and recovers its creation time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseId`] if `s` is not a valid unsigned integer in
    /// the ID's text base.
    ///
    /// [`Error::ParseId`]: crate::Error::ParseId
    fn parse_str(&self, s: &str) -> Result<SystemTime> {
        let id: ID = s.parse()?;
        Ok(self.parse(id))
    }
}
