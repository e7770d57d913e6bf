//! Memoization of query results per snapshot.
//!
//! Results are stored as record positions, so a cached page is only
//! meaningful against the snapshot it was computed from. The cache tracks that
//! snapshot's id and empties itself as soon as it is asked about another.
//!
//! The cache holds at most `capacity` entries. Inserting past that evicts
//! the least recently used entry.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;
use uuid::Uuid;

use crate::error::EngineResult;

use super::paginate::Page;

/// Hit and miss counters for a [`QueryCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that ran the query.
    pub misses: u64,
}

/// Default number of queries a cache holds before evicting.
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
struct CacheEntry {
    page: Page<usize>,
    last_used: u64,
}

/// Query results keyed by query, valid for one snapshot.
#[derive(Debug, Clone)]
pub struct QueryCache<K> {
    snapshot_id: Option<Uuid>,
    entries: HashMap<K, CacheEntry>,
    capacity: usize,
    tick: u64,
    stats: CacheStats,
}

impl<K> Default for QueryCache<K> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

impl<K> QueryCache<K> {
    /// Creates an empty cache holding at most `capacity` queries.
    ///
    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            snapshot_id: None,
            entries: HashMap::new(),
            capacity: capacity.max(1),
            tick: 0,
            stats: CacheStats::default(),
        }
    }
}

impl<K> QueryCache<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty cache with [`DEFAULT_CACHE_CAPACITY`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached page for `key`, computing and storing it on a miss.
    ///
    /// If `snapshot_id` differs from the snapshot the cache was filled from,
    /// every entry is dropped first. Errors are returned as-is and never
    /// cached.
    pub fn get_or_try_insert_with<C>(
        &mut self,
        snapshot_id: Uuid,
        key: &K,
        compute: C,
    ) -> EngineResult<Page<usize>>
    where
        C: FnOnce() -> EngineResult<Page<usize>>,
    {
        if self.snapshot_id != Some(snapshot_id) {
            if !self.entries.is_empty() {
                debug!(
                    dropped = self.entries.len(),
                    snapshot_id = %snapshot_id,
                    "Snapshot changed, clearing query cache"
                );
            }
            self.entries.clear();
            self.snapshot_id = Some(snapshot_id);
        }

        self.tick += 1;
        if let Some(entry) = self.entries.get_mut(key) {
            entry.last_used = self.tick;
            self.stats.hits += 1;
            debug!(snapshot_id = %snapshot_id, "Query cache hit");
            return Ok(entry.page.clone());
        }

        self.stats.misses += 1;
        debug!(snapshot_id = %snapshot_id, "Query cache miss");
        let page = compute()?;

        while self.entries.len() >= self.capacity {
            let Some(oldest) = self
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_used)
                .map(|(key, _)| key.clone())
            else {
                break;
            };
            self.entries.remove(&oldest);
            debug!(capacity = self.capacity, "Evicted least recently used query");
        }

        self.entries.insert(
            key.clone(),
            CacheEntry {
                page: page.clone(),
                last_used: self.tick,
            },
        );
        Ok(page)
    }

    /// Drops every cached entry.
    pub fn invalidate(&mut self) {
        self.entries.clear();
        self.snapshot_id = None;
    }

    /// Number of cached queries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Maximum number of cached queries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the hit and miss counters.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
