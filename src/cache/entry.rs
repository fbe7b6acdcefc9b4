//! A single cached response body with its insertion time.

use std::time::{Duration, Instant};

/// One cached HTTP response body.
///
/// Entries are immutable once created; a later `put` on the same key
/// replaces the entry rather than mutating it. The creation time uses the
/// monotonic clock, so wall-clock adjustments cannot resurrect or
/// prematurely expire an entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The raw response body, exactly as read off the wire.
    pub body: Vec<u8>,
    /// When this entry was inserted.
    created_at: Instant,
}

impl CacheEntry {
    /// Creates an entry stamped with the current time.
    pub fn new(body: Vec<u8>) -> Self {
        Self {
            body,
            created_at: Instant::now(),
        }
    }

    /// How long ago this entry was inserted.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Whether this entry has outlived the given lifetime.
    ///
    /// The boundary is exclusive: an entry exactly `lifetime` old is not
    /// yet stale. Staleness only matters to the sweep; reads never consult
    /// it.
    pub fn is_older_than(&self, lifetime: Duration) -> bool {
        self.age() > lifetime
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_new_entry_is_fresh() {
        let entry = CacheEntry::new(vec![1, 2, 3]);

        assert_eq!(entry.body, vec![1, 2, 3]);
        assert!(!entry.is_older_than(Duration::from_secs(60)));
    }

    #[test]
    fn test_entry_becomes_stale() {
        let entry = CacheEntry::new(b"body".to_vec());

        sleep(Duration::from_millis(20));

        assert!(entry.is_older_than(Duration::from_millis(10)));
        assert!(!entry.is_older_than(Duration::from_secs(60)));
    }

    #[test]
    fn test_age_grows() {
        let entry = CacheEntry::new(Vec::new());
        let first = entry.age();

        sleep(Duration::from_millis(10));

        assert!(entry.age() > first);
    }

    #[test]
    fn test_empty_body_is_allowed() {
        let entry = CacheEntry::new(Vec::new());
        assert!(entry.body.is_empty());
    }
}
