//! Coordination-free, roughly time-ordered unique identifiers.
//!
//! Two layouts are provided, both minted locally without any registry or
//! worker assignment:
//!
//! - [`StandardId`] (`u64`): milliseconds since the epoch, a 16-bit random
//!   discriminator and a 16-bit counter. Produced by [`StandardGenerator`].
//! - [`CompactId`] (`u32`): minutes since the epoch and a 7-bit counter.
//!   Produced by [`CompactGenerator`].
//!
//! ```
//! use flakeid::{CompactGenerator, DEFAULT_EPOCH, FlakeGenerator, StandardGenerator};
//! use std::time::{Duration, UNIX_EPOCH};
//!
//! let generator = StandardGenerator::new(DEFAULT_EPOCH);
//! let id = generator.get();
//! let text = id.to_string();
//! assert_eq!(generator.parse_str(&text)?, generator.parse(id));
//!
//! let small = CompactGenerator::new(DEFAULT_EPOCH);
//! let ten_minutes_in = UNIX_EPOCH + DEFAULT_EPOCH + Duration::from_secs(600);
//! assert_eq!(small.get_from_time(ten_minutes_in).to_raw(), 1280);
//! # Ok::<(), flakeid::Error>(())
//! ```
//!
//! ## Feature flags
//! - `global` (default): process-wide default generators ([`standard`],
//!   [`compact`]).
//! - `serde`: `#[serde(with = "...")]` adapters in [`serde`](crate::serde).
//! - `tracing`: trace-level spans on generation and counter wraparound events.
//! - `cache-padded`: pads counters to a cache line.
mod error;
mod generator;
#[cfg(feature = "global")]
mod global;
mod id;
mod rand;
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
#[cfg(feature = "serde")]
pub mod serde;
mod time;

pub use crate::error::*;
pub use crate::generator::*;
#[cfg_attr(docsrs, doc(cfg(feature = "global")))]
#[cfg(feature = "global")]
pub use crate::global::*;
pub use crate::id::*;
pub use crate::rand::*;
pub use crate::time::*;
