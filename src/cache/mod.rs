//! Bounded in-memory lookup cache
//!
//! Key → record-set index with a fixed capacity and oldest-write-first
//! eviction. Reads are no-touch: only writes update recency, so the
//! eviction order is FIFO over inserts and LRU over updates.
//!
//! A cache entry exists only if the same key's records are already durably
//! stored; the pipeline enforces that ordering, the cache just holds what
//! it is given.

use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

/// Cache bookkeeping errors
///
/// Never surfaced to lookup callers: a failed read is a miss, a failed
/// populate is logged and the store remains the source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// A writer panicked while holding the lock
    #[error("cache lock poisoned")]
    Poisoned,
}

#[derive(Debug)]
struct CacheInner<V> {
    entries: HashMap<String, V>,
    /// Keys in write order, oldest first
    order: Vec<String>,
}

/// Bounded key → value cache with oldest-write-first eviction
///
/// All mutations run under one exclusive critical section; reads share a
/// lock and never observe a partially-written entry. Capacity 0 means
/// unbounded.
#[derive(Debug)]
pub struct LookupCache<V> {
    capacity: usize,
    inner: RwLock<CacheInner<V>>,
}

impl<V: Clone> LookupCache<V> {
    /// Create a cache holding at most `capacity` entries (0 = unbounded)
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: RwLock::new(CacheInner {
                entries: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }

    /// Point lookup; does not affect recency
    pub fn get(&self, key: &str) -> CacheResult<Option<V>> {
        let inner = self.inner.read().map_err(|_| CacheError::Poisoned)?;
        Ok(inner.entries.get(key).cloned())
    }

    /// Insert or replace the entry for `key`
    ///
    /// Replacing moves the key to the most-recently-written position. A
    /// new key inserted at capacity evicts exactly one victim, the oldest
    /// write, which is never the key being inserted. Returns the evicted
    /// key, if any.
    pub fn set(&self, key: &str, value: V) -> CacheResult<Option<String>> {
        let mut inner = self.inner.write().map_err(|_| CacheError::Poisoned)?;

        if inner.entries.contains_key(key) {
            inner.entries.insert(key.to_string(), value);
            inner.order.retain(|k| k != key);
            inner.order.push(key.to_string());
            return Ok(None);
        }

        let mut evicted = None;
        if self.capacity > 0 && inner.entries.len() >= self.capacity {
            let victim = inner.order.remove(0);
            inner.entries.remove(&victim);
            evicted = Some(victim);
        }

        inner.entries.insert(key.to_string(), value);
        inner.order.push(key.to_string());

        Ok(evicted)
    }

    /// Number of entries currently cached
    pub fn len(&self) -> CacheResult<usize> {
        let inner = self.inner.read().map_err(|_| CacheError::Poisoned)?;
        Ok(inner.entries.len())
    }

    /// True when no entries are cached
    pub fn is_empty(&self) -> CacheResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Keys currently cached, oldest write first
    pub fn keys(&self) -> CacheResult<Vec<String>> {
        let inner = self.inner.read().map_err(|_| CacheError::Poisoned)?;
        Ok(inner.order.clone())
    }

    /// Configured capacity (0 = unbounded)
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
