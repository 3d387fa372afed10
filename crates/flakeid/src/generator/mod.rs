mod compact;
mod counter;
mod interface;
mod standard;

pub use compact::*;
pub use counter::*;
pub use interface::*;
pub use standard::*;
