//! Cache Store Module
//!
//! Main cache engine: a reader/writer-locked HashMap with lazy expiration on
//! read and an explicit mark-then-remove sweep.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::cache::entry::CacheEntry;
use crate::cache::stats::{CacheStats, StatsCounters};
use crate::config::Config;

// == Expiring Store ==
/// Concurrent key-value storage where every entry carries its own TTL.
///
/// All operations take `&self`; share the store between threads with an
/// `Arc`. Expired entries are never returned, but they stay in the map until
/// a [`load`](Self::load) discovers them or a [`sweep`](Self::sweep) runs.
/// The store schedules nothing on its own.
///
/// # Example
/// ```
/// use expiry_cache::ExpiringStore;
/// use std::time::Duration;
///
/// let store = ExpiringStore::new();
/// store.store("session", 42u32, Duration::from_secs(60));
/// assert_eq!(store.load("session"), Some(42));
/// ```
#[derive(Debug)]
pub struct ExpiringStore<V> {
    /// Key-value storage
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
    /// Activity counters
    stats: StatsCounters,
}

impl<V> ExpiringStore<V> {
    // == Constructor ==
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new store with room for `capacity` entries before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(capacity)),
            stats: StatsCounters::default(),
        }
    }

    /// Creates a new store sized from the configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    // == Store ==
    /// Stores a value under `key` for `lifespan`.
    ///
    /// An existing entry is fully replaced, value and expiration alike.
    /// A zero lifespan stores an entry that is already expired.
    pub fn store(&self, key: impl Into<String>, value: V, lifespan: Duration) {
        self.insert(key.into(), CacheEntry::new(value, lifespan));
    }

    /// Stores a value under `key` that expires at `expires_at`.
    ///
    /// An instant in the past stores an entry that is already expired.
    pub fn store_until(&self, key: impl Into<String>, value: V, expires_at: Instant) {
        self.insert(key.into(), CacheEntry::until(value, expires_at));
    }

    fn insert(&self, key: String, entry: CacheEntry<V>) {
        self.entries.write().insert(key, entry);
    }

    // == Lookup ==
    /// Shared read path for `load` and `contains_key`.
    ///
    /// Applies `f` to a live value under the read lock. An expired entry is
    /// evicted under the write lock after the read lock is released.
    fn lookup<R>(&self, key: &str, f: impl FnOnce(&V) -> R) -> Option<R> {
        let now = Instant::now();
        {
            let entries = self.entries.read();
            match entries.get(key) {
                None => {
                    self.stats.record_miss();
                    return None;
                }
                Some(entry) if !entry.is_expired_at(now) => {
                    self.stats.record_hit();
                    return Some(f(&entry.value));
                }
                Some(_) => {}
            }
        }

        if self.remove_if_expired(key, now) {
            self.stats.record_expired_on_load();
            trace!(key, "evicted expired entry on load");
        }
        self.stats.record_miss();
        None
    }

    /// Removes `key` only if its current entry is expired as of `now`.
    ///
    /// Callers observe expiration under the read lock and come here after
    /// releasing it, so the entry may have been refreshed in between. A
    /// refreshed entry is left alone.
    fn remove_if_expired(&self, key: &str, now: Instant) -> bool {
        let mut entries = self.entries.write();
        match entries.get(key) {
            Some(entry) if entry.is_expired_at(now) => {
                entries.remove(key);
                true
            }
            _ => false,
        }
    }

    // == Contains Key ==
    /// Returns true if `key` holds a live entry.
    ///
    /// Behaves like [`load`](Self::load), eviction included, without cloning the value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.lookup(key, |_| ()).is_some()
    }

    // == Time To Live ==
    /// Returns the remaining lifespan of a live entry.
    pub fn ttl(&self, key: &str) -> Option<Duration> {
        let now = Instant::now();
        self.entries
            .read()
            .get(key)
            .filter(|entry| !entry.is_expired_at(now))
            .map(|entry| entry.expires_at.saturating_duration_since(now))
    }

    // == Delete ==
    /// Removes an entry by key.
    ///
    /// Returns whether an entry, live or expired, was present.
    pub fn delete(&self, key: &str) -> bool {
        self.entries.write().remove(key).is_some()
    }

    // == Clear ==
    /// Removes every entry, returning how many were held.
    pub fn clear(&self) -> usize {
        let mut entries = self.entries.write();
        let count = entries.len();
        entries.clear();
        count
    }

    // == Count ==
    /// Returns the number of entries in the map.
    ///
    /// Expired entries that no load or sweep has removed yet are included.
    pub fn count(&self) -> usize {
        self.entries.read().len()
    }

    // == Is Empty ==
    /// Returns true if the map holds no entries, expired ones included.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    // == Sweep ==
    /// Removes all entries that are expired as of the start of the sweep.
    ///
    /// Expired keys are marked under the read lock, then removed one at a
    /// time under the write lock. Entries that expire while the sweep runs
    /// are left for the next one.
    ///
    /// Returns the number of entries removed.
    pub fn sweep(&self) -> usize {
        let now = Instant::now();
        let marked: Vec<String> = self
            .entries
            .read()
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        let removed = marked
            .iter()
            .filter(|key| self.remove_if_expired(key, now))
            .count();

        if removed > 0 {
            self.stats.record_swept(removed);
            debug!(removed, marked = marked.len(), "sweep removed expired entries");
        }
        removed
    }

    // == Stats ==
    /// Returns a snapshot of store activity.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.count())
    }
}

impl<V: Clone> ExpiringStore<V> {
    // == Load ==
    /// Retrieves a copy of the live value stored under `key`.
    ///
    /// Returns `None` if the key is absent or expired. An expired entry is
    /// removed before returning.
    pub fn load(&self, key: &str) -> Option<V> {
        self.lookup(key, V::clone)
    }

    // == Load Typed ==
    /// Retrieves the value under `key` converted to `T`.
    ///
    /// Returns `None` if the key is absent, expired, or the conversion fails.
    /// A failed conversion leaves the entry in place.
    pub fn load_typed<T>(&self, key: &str) -> Option<T>
    where
        T: TryFrom<V>,
    {
        self.load(key).and_then(|value| T::try_from(value).ok())
    }

    /// Retrieves the value under `key` if it holds text.
    pub fn load_as_string(&self, key: &str) -> Option<String>
    where
        String: TryFrom<V>,
    {
        self.load_typed(key)
    }
}

impl<V> Default for ExpiringStore<V> {
    fn default() -> Self {
        Self::new()
    }
}
