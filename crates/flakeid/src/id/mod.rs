mod compact;
mod interface;
mod standard;

pub use compact::*;
pub use interface::*;
pub use standard::*;
