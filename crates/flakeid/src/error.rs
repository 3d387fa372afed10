use core::num::ParseIntError;

/// A result type defaulting to this crate's [`Error`].
///
/// Generation and decoding of already-typed IDs are infallible; only the
/// string boundary returns this type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `flakeid` can produce.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The input is not a valid unsigned integer in the base and width
    /// expected by the target ID type (decimal `u64` for [`StandardId`],
    /// hexadecimal `u32` for [`CompactId`]).
    ///
    /// [`StandardId`]: crate::StandardId
    /// [`CompactId`]: crate::CompactId
    #[error("invalid {kind} id {input:?}: {source}")]
    ParseId {
        /// Name of the ID type that was being parsed.
        kind: &'static str,
        /// The rejected input.
        input: String,
        #[source]
        source: ParseIntError,
    },

    /// The input starts with a `+` sign. Text forms are bare digits.
    #[error("invalid {kind} id {input:?}: unexpected sign")]
    SignedId {
        /// Name of the ID type that was being parsed.
        kind: &'static str,
        /// The rejected input.
        input: String,
    },
}

impl Error {
    pub(crate) fn parse_id(kind: &'static str, input: &str, source: ParseIntError) -> Self {
        Self::ParseId {
            kind,
            input: input.to_owned(),
            source,
        }
    }

    /// Rejects a leading `+`, which the integer parsers in `core` would
    /// otherwise accept. A leading `-` is already rejected for unsigned types.
    pub(crate) fn ensure_unsigned(kind: &'static str, input: &str) -> Result<()> {
        if input.starts_with('+') {
            return Err(Self::SignedId {
                kind,
                input: input.to_owned(),
            });
        }
        Ok(())
    }
}
