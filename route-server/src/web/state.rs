//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CacheConfig, CachedEdgeSource};
use crate::planner::SearchConfig;
use crate::store::DepartureStore;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Departure records
    pub store: DepartureStore,

    /// Cached edge lookups over `store`, used by route search
    pub edges: Arc<CachedEdgeSource<DepartureStore>>,

    /// Route planner configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: DepartureStore, cache: &CacheConfig, config: SearchConfig) -> Self {
        Self {
            edges: Arc::new(CachedEdgeSource::new(store.clone(), cache)),
            store,
            config: Arc::new(config),
        }
    }
}
