//! The map behind the response cache.
//!
//! `ResponseStore` is a plain single-threaded container; `ResponseCache`
//! in `manager.rs` owns the one lock that guards it. Keeping the map logic
//! lock-free makes it directly unit-testable.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::CacheEntry;

/// Keyed storage for cached response bodies.
///
/// Keys are request URLs. Insertion order is irrelevant; keys are unique.
#[derive(Debug, Default)]
pub struct ResponseStore {
    entries: HashMap<String, CacheEntry>,
}

impl ResponseStore {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Inserts or overwrites the entry for `key` with a fresh timestamp.
    pub fn insert(&mut self, key: String, body: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(body));
    }

    /// Looks up an entry regardless of its age.
    pub fn lookup(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    /// Removes every entry older than `lifetime` and returns how many were
    /// dropped. One full-map scan, O(n) in the number of entries.
    pub fn remove_stale(&mut self, lifetime: Duration) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_older_than(lifetime));
        before - self.entries.len()
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_store_new_is_empty() {
        let store = ResponseStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_insert_and_lookup() {
        let mut store = ResponseStore::new();

        store.insert("https://example/a".to_string(), b"body-a".to_vec());

        let entry = store.lookup("https://example/a").expect("entry should exist");
        assert_eq!(entry.body, b"body-a");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_lookup_missing() {
        let store = ResponseStore::new();
        assert!(store.lookup("https://example/missing").is_none());
    }

    #[test]
    fn test_store_overwrite_replaces_body() {
        let mut store = ResponseStore::new();

        store.insert("k".to_string(), b"first".to_vec());
        store.insert("k".to_string(), b"second".to_vec());

        let entry = store.lookup("k").expect("entry should exist");
        assert_eq!(entry.body, b"second");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_overwrite_refreshes_timestamp() {
        let mut store = ResponseStore::new();

        store.insert("k".to_string(), b"first".to_vec());
        sleep(Duration::from_millis(20));
        store.insert("k".to_string(), b"second".to_vec());

        // The replacement entry is young again, so a sweep with a lifetime
        // between the two insert times must keep it.
        assert_eq!(store.remove_stale(Duration::from_millis(10)), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_empty_body_is_present() {
        let mut store = ResponseStore::new();

        store.insert("k".to_string(), Vec::new());

        let entry = store.lookup("k").expect("empty body is still a hit");
        assert!(entry.body.is_empty());
    }

    #[test]
    fn test_remove_stale_drops_only_old_entries() {
        let mut store = ResponseStore::new();

        store.insert("old".to_string(), b"1".to_vec());
        sleep(Duration::from_millis(30));
        store.insert("young".to_string(), b"2".to_vec());

        let removed = store.remove_stale(Duration::from_millis(15));

        assert_eq!(removed, 1);
        assert!(store.lookup("old").is_none());
        assert!(store.lookup("young").is_some());
    }

    #[test]
    fn test_remove_stale_on_empty_store() {
        let mut store = ResponseStore::new();
        assert_eq!(store.remove_stale(Duration::from_millis(1)), 0);
    }

    #[test]
    fn test_lookup_returns_stale_entries() {
        // Reads never check age; only the sweep removes entries.
        let mut store = ResponseStore::new();

        store.insert("k".to_string(), b"stale".to_vec());
        sleep(Duration::from_millis(20));

        let entry = store.lookup("k").expect("stale entry still present");
        assert!(entry.is_older_than(Duration::from_millis(10)));
        assert_eq!(entry.body, b"stale");
    }
}
