//! Dashboard memoization using Moka.
//!
//! Analysis texts and export buffers are cached under content fingerprints,
//! so a changed ledger or income simply misses and stale entries age out.

use moka::sync::Cache;
use std::sync::Arc;
use std::time::Duration;
use tallyboard_shared::CacheConfig;

/// Default cache capacity (entries per kind).
const DEFAULT_CACHE_CAPACITY: u64 = 100;

/// Default time-to-live for cache entries (5 minutes).
const DEFAULT_TTL_SECS: u64 = 300;

/// A value together with whether it came from the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cached<T> {
    /// The value.
    pub value: T,
    /// True on a cache hit.
    pub cached: bool,
}

/// Memoizes analysis texts and export workbooks.
///
/// Only successful results are ever stored. Cloning is cheap and clones share
/// the same storage.
#[derive(Clone)]
pub struct DashboardCache {
    analyses: Cache<String, Arc<str>>,
    exports: Cache<String, Arc<[u8]>>,
}

impl DashboardCache {
    /// Creates a cache with 100 entries per kind and a 5 minute TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a cache with custom capacity and time-to-live.
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: u64) -> Self {
        Self {
            analyses: build_cache(max_capacity, ttl_secs),
            exports: build_cache(max_capacity, ttl_secs),
        }
    }

    /// Creates a cache from the `cache` config section.
    #[must_use]
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::with_config(config.capacity, config.ttl_secs)
    }

    /// Looks up a previously generated analysis.
    #[must_use]
    pub fn analysis(&self, key: &str) -> Option<Arc<str>> {
        self.analyses.get(key)
    }

    /// Stores a generated analysis.
    pub fn store_analysis(&self, key: String, text: &str) -> Arc<str> {
        let text: Arc<str> = Arc::from(text);
        self.analyses.insert(key, Arc::clone(&text));
        text
    }

    /// Returns the cached workbook for `key`, rendering and storing it on a miss.
    ///
    /// A failed render is returned as-is and leaves the cache untouched.
    pub fn export_with<E, F>(&self, key: String, render: F) -> Result<Cached<Arc<[u8]>>, E>
    where
        F: FnOnce() -> Result<Vec<u8>, E>,
    {
        if let Some(buffer) = self.exports.get(&key) {
            return Ok(Cached {
                value: buffer,
                cached: true,
            });
        }

        let buffer: Arc<[u8]> = Arc::from(render()?);
        self.exports.insert(key, Arc::clone(&buffer));
        Ok(Cached {
            value: buffer,
            cached: false,
        })
    }
}

fn build_cache<V>(max_capacity: u64, ttl_secs: u64) -> Cache<String, V>
where
    V: Clone + Send + Sync + 'static,
{
    Cache::builder()
        .max_capacity(max_capacity)
        .time_to_live(Duration::from_secs(ttl_secs))
        .build()
}

impl Default for DashboardCache {
    fn default() -> Self {
        Self::new()
    }
}
