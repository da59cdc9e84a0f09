//! Caching layer for edge lookups.
//!
//! Searches from the same station at the same time tend to ask the same
//! questions of the edge source, especially near the start of a route. We
//! cache each answer keyed by the full query (station, time, excluded set).
//!
//! Writes to the underlying departures make cached answers stale, so the
//! owner calls [`CachedEdgeSource::invalidate`] after every write. Each
//! invalidation starts a new generation; a lookup that was already in
//! flight when the write happened stores its answer under the old
//! generation, where nothing will read it.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::domain::{Station, Timestamp};
use crate::planner::{EdgeSource, NextEdge, SearchError};

/// Cache key: (generation, origin, not-before time, sorted excluded stations).
type EdgeKey = (u64, Station, Timestamp, Vec<Station>);

/// Cached lookup result.
type EdgeEntry = Arc<Vec<NextEdge>>;

/// Longest TTL moka accepts; anything above makes the builder panic.
pub const MAX_TTL: Duration = Duration::from_secs(1000 * 365 * 24 * 60 * 60);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_capacity: 10_000,
        }
    }
}

/// Edge source with caching.
///
/// Wraps any `EdgeSource` and caches its answers. Errors are passed through
/// and never cached.
pub struct CachedEdgeSource<E> {
    source: E,
    edges: MokaCache<EdgeKey, EdgeEntry>,
    generation: AtomicU64,
}

impl<E> CachedEdgeSource<E> {
    /// Create a new cached source.
    pub fn new(source: E, config: &CacheConfig) -> Self {
        let edges = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            source,
            edges,
            generation: AtomicU64::new(0),
        }
    }

    /// Access the wrapped source.
    pub fn inner(&self) -> &E {
        &self.source
    }

    /// Forget every cached answer.
    pub fn invalidate(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        trace!(
            generation,
            entries = self.edges.entry_count(),
            "invalidating edge cache"
        );
        self.edges.invalidate_all();
    }

    fn key(&self, from: &Station, excluded: &HashSet<Station>, not_before: Timestamp) -> EdgeKey {
        let mut excluded: Vec<Station> = excluded.iter().cloned().collect();
        excluded.sort();
        (
            self.generation.load(Ordering::SeqCst),
            from.clone(),
            not_before,
            excluded,
        )
    }
}

impl<E: EdgeSource + Sync> EdgeSource for CachedEdgeSource<E> {
    async fn next_edges(
        &self,
        from: &Station,
        excluded: &HashSet<Station>,
        not_before: Timestamp,
    ) -> Result<Vec<NextEdge>, SearchError> {
        let key = self.key(from, excluded, not_before);

        // Try cache first
        if let Some(cached) = self.edges.get(&key).await {
            trace!(%from, %not_before, "edge cache hit");
            return Ok(cached.as_ref().clone());
        }

        let edges = self.source.next_edges(from, excluded, not_before).await?;
        self.edges.insert(key, Arc::new(edges.clone())).await;

        Ok(edges)
    }
}
