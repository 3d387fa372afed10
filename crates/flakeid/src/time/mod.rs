mod interface;
mod system_clock;

pub use interface::*;
pub use system_clock::*;
pub(crate) use interface::saturating_millis;
