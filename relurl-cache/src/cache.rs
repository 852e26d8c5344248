//! In-memory LRU cache for classification verdicts.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use relurl_core::constants::DEFAULT_CACHE_CAPACITY;
use relurl_core::error::{RelUrlError, Result};
use relurl_core::traits::VerdictCache;
use relurl_core::types::CacheKey;

/// Cache configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of distinct keys held at once
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl CacheConfig {
    /// Creates a config with the given capacity.
    pub fn with_capacity(max_entries: usize) -> Self {
        Self { max_entries }
    }

    /// Checks that the capacity is usable.
    pub fn validate(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.max_entries).ok_or(RelUrlError::InvalidCapacity(self.max_entries))
    }
}

struct Inner<K: Hash + Eq, V> {
    entries: LruCache<K, V>,
    hits: u64,
    misses: u64,
    insertions: u64,
    evictions: u64,
}

/// Fixed-capacity least-recently-used cache.
///
/// Reads and writes both refresh an entry's recency. Inserting a new key into
/// a full cache evicts exactly one entry, the least recently used. Updating
/// an existing key never evicts.
///
/// Thread-safe: every public operation runs under one lock, so a lookup and
/// the recency update it implies are a single step.
pub struct ResultCache<K: Hash + Eq = CacheKey, V = bool> {
    inner: Mutex<Inner<K, V>>,
    capacity: NonZeroUsize,
}

impl<K: Hash + Eq, V: Clone> ResultCache<K, V> {
    /// Creates a cache with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(NonZeroUsize::new(DEFAULT_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN))
    }

    /// Creates a cache from a configuration, rejecting a zero capacity.
    pub fn with_config(config: CacheConfig) -> Result<Self> {
        Ok(Self::with_capacity(config.validate()?))
    }

    /// Creates a cache holding at most `capacity` keys.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        debug!(capacity = capacity.get(), "creating result cache");
        Self {
            inner: Mutex::new(Inner {
                entries: LruCache::new(capacity),
                hits: 0,
                misses: 0,
                insertions: 0,
                evictions: 0,
            }),
            capacity,
        }
    }

    /// Gets a value and marks it most recently used.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut inner = self.inner.lock();
        match inner.entries.get(key).cloned() {
            Some(value) => {
                inner.hits += 1;
                Some(value)
            }
            None => {
                inner.misses += 1;
                None
            }
        }
    }

    /// Gets a value without touching its recency or the hit counters.
    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().entries.peek(key).cloned()
    }

    /// Returns true if `key` is present. Does not touch recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().entries.contains(key)
    }

    /// Stores a value as most recently used.
    ///
    /// A new key in a full cache evicts the least recently used entry first.
    pub fn set(&self, key: K, value: V) {
        let mut inner = self.inner.lock();

        if !inner.entries.contains(&key) {
            if inner.entries.len() >= self.capacity.get() {
                inner.entries.pop_lru();
                inner.evictions += 1;
                trace!(capacity = self.capacity.get(), "evicted least recently used entry");
            }
            inner.insertions += 1;
        }

        inner.entries.put(key, value);
    }

    /// Clears all entries and counters. Capacity is unchanged.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        let dropped = inner.entries.len();
        inner.entries.clear();
        inner.hits = 0;
        inner.misses = 0;
        inner.insertions = 0;
        inner.evictions = 0;
        debug!(dropped, "cleared result cache");
    }

    /// Zeroes the counters, keeping the entries.
    pub fn reset_stats(&self) {
        let mut inner = self.inner.lock();
        inner.hits = 0;
        inner.misses = 0;
        inner.insertions = 0;
        inner.evictions = 0;
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        CacheStats {
            entries: inner.entries.len(),
            capacity: self.capacity.get(),
            hits: inner.hits,
            misses: inner.misses,
            insertions: inner.insertions,
            evictions: inner.evictions,
        }
    }
}

impl<K: Hash + Eq + Clone, V: Clone> ResultCache<K, V> {
    /// Keys ordered from most to least recently used.
    pub fn keys_by_recency(&self) -> Vec<K> {
        self.inner.lock().entries.iter().map(|(k, _)| k.clone()).collect()
    }
}

impl<K: Hash + Eq, V: Clone> Default for ResultCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> fmt::Debug for ResultCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultCache")
            .field("len", &self.inner.lock().entries.len())
            .field("capacity", &self.capacity.get())
            .finish()
    }
}

impl VerdictCache for ResultCache<CacheKey, bool> {
    fn get(&self, key: &CacheKey) -> Option<bool> {
        let verdict = ResultCache::get(self, key);
        trace!(%key, hit = verdict.is_some(), "verdict cache lookup");
        verdict
    }

    fn set(&self, key: CacheKey, verdict: bool) {
        ResultCache::set(self, key, verdict);
    }

    fn clear(&self) {
        ResultCache::clear(self);
    }

    fn len(&self) -> usize {
        ResultCache::len(self)
    }
}

/// Cache statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Entries currently held
    pub entries: usize,
    /// Maximum capacity
    pub capacity: usize,
    /// Lookups that found an entry
    pub hits: u64,
    /// Lookups that found nothing
    pub misses: u64,
    /// New keys stored (updates excluded)
    pub insertions: u64,
    /// Entries dropped to make room
    pub evictions: u64,
}

impl CacheStats {
    /// Fraction of lookups that hit, or 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        }
    }
}
