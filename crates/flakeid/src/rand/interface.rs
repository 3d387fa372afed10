/// A trait for random sources that return random integers.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// random source in tests. Implementations are called through a shared
/// reference from any number of threads, so they must either be stateless or
/// synchronize internally.
///
/// The random type `T` is generic; generators in this crate draw `u32`.
///
/// # Example
/// ```
/// use flakeid::RandSource;
///
/// struct FixedRand;
/// impl RandSource<u32> for FixedRand {
///     fn rand(&self) -> u32 {
///         1234
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.rand(), 1234);
/// ```
pub trait RandSource<T> {
    /// Returns a random integer.
    fn rand(&self) -> T;
}
