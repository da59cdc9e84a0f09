//! Partial routes: the search state.

use std::collections::HashSet;

use crate::domain::{DepartureId, Price, Station, Timestamp};

use super::source::NextEdge;

/// A route from the start station that has not necessarily reached the
/// destination yet.
///
/// Routes are immutable: expanding one produces new routes and leaves the
/// original untouched.
///
/// Invariants:
/// - `path.len() == visited.len()`: each departure taken marks the station
///   it left from as visited.
/// - `cost` is the sum of the prices of the departures in `path`.
/// - `station` is only added to `visited` when the route leaves it.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialRoute {
    station: Station,
    cost: Price,
    time: Timestamp,
    visited: HashSet<Station>,
    path: Vec<DepartureId>,
}

impl PartialRoute {
    /// The route a search starts from: standing at `start` at `time`.
    pub fn seed(start: Station, time: Timestamp) -> Self {
        Self {
            station: start,
            cost: Price::ZERO,
            time,
            visited: HashSet::new(),
            path: Vec::new(),
        }
    }

    /// Build the route that takes `edge` from this route's current station.
    pub fn extend(&self, edge: &NextEdge) -> Self {
        let mut visited = self.visited.clone();
        visited.insert(self.station.clone());

        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(edge.departure);

        Self {
            station: edge.to.clone(),
            cost: self.cost + edge.price,
            time: edge.arrive_time,
            visited,
            path,
        }
    }

    /// Station the route has reached.
    pub fn station(&self) -> &Station {
        &self.station
    }

    /// Total price of the departures taken so far.
    pub fn cost(&self) -> Price {
        self.cost
    }

    /// Time of arrival at the current station.
    pub fn time(&self) -> Timestamp {
        self.time
    }

    /// Stations already left on this route.
    pub fn visited(&self) -> &HashSet<Station> {
        &self.visited
    }

    /// Departures taken, in travel order.
    pub fn path(&self) -> &[DepartureId] {
        &self.path
    }

    /// Consume the route, keeping only its departures.
    pub fn into_path(self) -> Vec<DepartureId> {
        self.path
    }
}
