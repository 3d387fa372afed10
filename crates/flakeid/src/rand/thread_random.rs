use crate::RandSource;
use rand::{Rng, rng};

/// A `RandSource` that uses the thread-local RNG (`rand::rng()`).
///
/// Each OS thread has its own automatically seeded RNG, so concurrent draws
/// from many threads never touch shared state. This type does **not** store
/// the RNG itself; it is a zero-sized handle that may be freely shared.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource<u32> for ThreadRandom {
    fn rand(&self) -> u32 {
        rng().random()
    }
}

impl ThreadRandom {
    /// Returns a value uniformly drawn from `0..upper`.
    pub(crate) fn below(upper: u8) -> u8 {
        rng().random_range(0..upper)
    }
}
