use crate::{CompactGenerator, CompactId, StandardGenerator, StandardId};
use std::sync::OnceLock;

/// Returns the process-wide [`StandardGenerator`] anchored at
/// [`DEFAULT_EPOCH`].
///
/// The instance is created on first use and shared by every caller.
///
/// [`DEFAULT_EPOCH`]: crate::DEFAULT_EPOCH
pub fn standard() -> &'static StandardGenerator {
    static G: OnceLock<StandardGenerator> = OnceLock::new();
    G.get_or_init(StandardGenerator::default)
}

/// Returns the process-wide [`CompactGenerator`] anchored at
/// [`DEFAULT_EPOCH`].
///
/// [`DEFAULT_EPOCH`]: crate::DEFAULT_EPOCH
pub fn compact() -> &'static CompactGenerator {
    static G: OnceLock<CompactGenerator> = OnceLock::new();
    G.get_or_init(CompactGenerator::default)
}

/// Mints a [`StandardId`] from the default generator.
///
/// # Example
/// ```
/// let id = flakeid::next_standard();
/// let minted_at = flakeid::standard().parse(id);
/// assert!(minted_at > std::time::UNIX_EPOCH + flakeid::DEFAULT_EPOCH);
/// ```
pub fn next_standard() -> StandardId {
    standard().get()
}

/// Mints a [`CompactId`] from the default generator.
pub fn next_compact() -> CompactId {
    compact().get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEFAULT_EPOCH, MILLIS_PER_MINUTE, millis_since_unix};
    use std::{collections::HashSet, sync::mpsc, thread, time::SystemTime};

    #[test]
    fn defaults_are_shared_instances() {
        assert!(core::ptr::eq(standard(), standard()));
        assert!(core::ptr::eq(compact(), compact()));
        assert_eq!(standard().epoch(), DEFAULT_EPOCH);
        assert_eq!(compact().epoch(), DEFAULT_EPOCH);
    }

    #[test]
    fn default_standard_ids_are_unique_across_threads() {
        let (tx, rx) = mpsc::channel();
        for _ in 0..4 {
            let tx = tx.clone();
            thread::spawn(move || {
                for _ in 0..1000 {
                    tx.send(next_standard()).unwrap();
                }
            });
        }
        drop(tx);

        let mut s = HashSet::new();
        while let Ok(id) = rx.recv() {
            s.insert(id);
        }
        assert_eq!(s.len(), 4 * 1000);
    }

    #[test]
    fn default_compact_ids_parse_near_now() {
        let before = millis_since_unix(SystemTime::now());
        let id = next_compact();
        let after = millis_since_unix(SystemTime::now());
        let parsed = millis_since_unix(compact().parse(id));
        assert!(before - parsed < MILLIS_PER_MINUTE, "{parsed} vs {before}");
        assert!(parsed <= after, "{parsed} vs {after}");
    }
}
