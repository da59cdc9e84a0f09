//! In-memory departure store.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::trace;

use crate::domain::{Departure, DepartureId, NewDeparture, Station, Timestamp};
use crate::planner::{EdgeSource, NextEdge, SearchError};

use super::reduce::earliest_per_destination;

#[derive(Debug, Default)]
struct Inner {
    /// Last id handed out; ids start at 1.
    last_id: u64,

    departures: BTreeMap<DepartureId, Departure>,

    /// Ids of departures leaving each station.
    by_origin: HashMap<Station, BTreeSet<DepartureId>>,
}

/// Shared store of scheduled departures.
///
/// Cloning the store clones a handle; all clones see the same records.
#[derive(Debug, Clone, Default)]
pub struct DepartureStore {
    inner: Arc<RwLock<Inner>>,
}

impl DepartureStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new departure and return it with its assigned id.
    pub async fn create(&self, new: NewDeparture) -> Departure {
        let mut inner = self.inner.write().await;

        inner.last_id += 1;
        let departure = new.with_id(DepartureId::new(inner.last_id));

        inner
            .by_origin
            .entry(departure.from().clone())
            .or_default()
            .insert(departure.id());
        inner.departures.insert(departure.id(), departure.clone());

        trace!(id = %departure.id(), from = %departure.from(), to = %departure.to(), "created departure");
        departure
    }

    /// Look up a departure by id.
    pub async fn get(&self, id: DepartureId) -> Option<Departure> {
        self.inner.read().await.departures.get(&id).cloned()
    }

    /// Remove a departure. Returns `false` if there was nothing to remove.
    pub async fn delete(&self, id: DepartureId) -> bool {
        let mut inner = self.inner.write().await;

        let Some(departure) = inner.departures.remove(&id) else {
            return false;
        };

        if let Some(ids) = inner.by_origin.get_mut(departure.from()) {
            ids.remove(&id);
            if ids.is_empty() {
                inner.by_origin.remove(departure.from());
            }
        }

        trace!(%id, "deleted departure");
        true
    }

    /// All departures, oldest first.
    pub async fn all(&self) -> Vec<Departure> {
        self.inner.read().await.departures.values().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.departures.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.departures.is_empty()
    }
}

impl EdgeSource for DepartureStore {
    async fn next_edges(
        &self,
        from: &Station,
        excluded: &HashSet<Station>,
        not_before: Timestamp,
    ) -> Result<Vec<NextEdge>, SearchError> {
        let inner = self.inner.read().await;

        let Some(ids) = inner.by_origin.get(from) else {
            return Ok(Vec::new());
        };

        let qualifying = ids
            .iter()
            .filter_map(|id| inner.departures.get(id))
            .filter(|d| d.depart_time() >= not_before && !excluded.contains(d.to()));

        let edges = earliest_per_destination(qualifying);
        trace!(%from, %not_before, edges = edges.len(), "looked up next edges");
        Ok(edges)
    }
}
