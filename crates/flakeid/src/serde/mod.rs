//! `#[serde(with = "...")]` adapters for [`StandardId`] and [`CompactId`].
//!
//! - [`as_native`] stores the raw integer, the format's whole payload.
//! - [`as_string`] stores the text form (decimal for [`StandardId`],
//!   hexadecimal for [`CompactId`]).
//!
//! [`StandardId`]: crate::StandardId
//! [`CompactId`]: crate::CompactId

mod native;
mod string;

pub use native::as_native;
pub use string::as_string;
