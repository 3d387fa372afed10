use portable_atomic::{AtomicU8, AtomicU16, Ordering};

/// A 16-bit issuance counter that wraps silently from `u16::MAX` to zero.
///
/// Every call to [`WrappingCounter::next`] is a single atomic
/// fetch-and-increment, so concurrent callers never observe the same
/// pre-increment value until the counter has gone all the way around.
#[derive(Debug)]
pub struct WrappingCounter {
    #[cfg(feature = "cache-padded")]
    value: crossbeam_utils::CachePadded<AtomicU16>,
    #[cfg(not(feature = "cache-padded"))]
    value: AtomicU16,
}

impl WrappingCounter {
    pub fn new(start: u16) -> Self {
        Self {
            #[cfg(feature = "cache-padded")]
            value: crossbeam_utils::CachePadded::new(AtomicU16::new(start)),
            #[cfg(not(feature = "cache-padded"))]
            value: AtomicU16::new(start),
        }
    }

    /// Returns the current value and advances the counter.
    pub fn next(&self) -> u16 {
        let issued = self.value.fetch_add(1, Ordering::Relaxed);
        #[cfg(feature = "tracing")]
        if issued == u16::MAX {
            tracing::trace!("standard counter wrapped to zero");
        }
        issued
    }

    /// Returns the value the next call to [`WrappingCounter::next`] will
    /// issue, without advancing.
    pub fn peek(&self) -> u16 {
        self.value.load(Ordering::Relaxed)
    }
}

/// A 7-bit issuance counter that resets to zero once it reaches
/// [`CompactCounter::LIMIT`].
///
/// The largest value ever issued is `LIMIT - 1` (126), one short of what the
/// 7-bit field can hold. The top value is kept free.
#[derive(Debug)]
pub struct CompactCounter {
    #[cfg(feature = "cache-padded")]
    value: crossbeam_utils::CachePadded<AtomicU8>,
    #[cfg(not(feature = "cache-padded"))]
    value: AtomicU8,
}

impl CompactCounter {
    /// Exclusive upper bound of issued values.
    pub const LIMIT: u8 = 127;

    /// Creates a counter starting at `start % LIMIT`.
    pub fn new(start: u8) -> Self {
        let start = start % Self::LIMIT;
        Self {
            #[cfg(feature = "cache-padded")]
            value: crossbeam_utils::CachePadded::new(AtomicU8::new(start)),
            #[cfg(not(feature = "cache-padded"))]
            value: AtomicU8::new(start),
        }
    }

    /// Returns the current value and advances the counter, wrapping to zero
    /// at [`CompactCounter::LIMIT`].
    pub fn next(&self) -> u8 {
        let issued = match self.value.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |c| {
            Some(Self::successor(c))
        }) {
            Ok(c) | Err(c) => c,
        };
        #[cfg(feature = "tracing")]
        if issued == Self::LIMIT - 1 {
            tracing::trace!("compact counter wrapped to zero");
        }
        issued
    }

    /// Returns the value the next call to [`CompactCounter::next`] will
    /// issue, without advancing.
    pub fn peek(&self) -> u8 {
        self.value.load(Ordering::Relaxed)
    }

    const fn successor(current: u8) -> u8 {
        if current + 1 >= Self::LIMIT {
            0
        } else {
            current + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_counter_issues_pre_increment_values() {
        let counter = WrappingCounter::new(0);
        assert_eq!(counter.next(), 0);
        assert_eq!(counter.next(), 1);
        assert_eq!(counter.peek(), 2);
    }

    #[test]
    fn wrapping_counter_wraps_silently() {
        let counter = WrappingCounter::new(u16::MAX - 1);
        assert_eq!(counter.next(), u16::MAX - 1);
        assert_eq!(counter.next(), u16::MAX);
        assert_eq!(counter.next(), 0);
    }

    #[test]
    fn compact_counter_never_issues_127() {
        let counter = CompactCounter::new(0);
        let issued: Vec<u8> = (0..254).map(|_| counter.next()).collect();
        assert_eq!(issued.iter().copied().max(), Some(126));
        assert_eq!(issued[126], 126);
        assert_eq!(issued[127], 0);
        assert_eq!(issued[253], 126);
    }

    #[test]
    fn compact_counter_reduces_out_of_range_start() {
        assert_eq!(CompactCounter::new(127).peek(), 0);
        assert_eq!(CompactCounter::new(200).peek(), 73);
        assert_eq!(CompactCounter::new(99).peek(), 99);
    }
}
