//! Earliest-arrival routing strategy.
//!
//! Routes are ranked purely by the time they reach their current station.
//! Price is carried along and reported but never used to choose: a cheaper
//! route that arrives later always loses to a dearer one that arrives
//! earlier.

use std::cmp::Ordering;

use tracing::debug;

use crate::domain::Station;

use super::route::PartialRoute;
use super::search::SearchError;
use super::source::EdgeSource;
use super::strategy::SearchStrategy;

/// Expands partial routes through an [`EdgeSource`] towards `destination`.
pub struct EarliestArrival<'a, E> {
    source: &'a E,
    destination: Station,
}

impl<'a, E: EdgeSource> EarliestArrival<'a, E> {
    pub fn new(source: &'a E, destination: Station) -> Self {
        Self {
            source,
            destination,
        }
    }
}

impl<E: EdgeSource + Sync> SearchStrategy for EarliestArrival<'_, E> {
    type Node = PartialRoute;

    fn is_goal(&self, route: &PartialRoute) -> bool {
        route.station() == &self.destination
    }

    /// Ask the source for the earliest departure to every unvisited
    /// neighbour, and step along each.
    ///
    /// Later departures to the same neighbour are never seen, so they can
    /// never be picked up again further into the search.
    async fn expand(&self, route: &PartialRoute) -> Result<Vec<PartialRoute>, SearchError> {
        let edges = self
            .source
            .next_edges(route.station(), route.visited(), route.time())
            .await?;

        debug!(
            station = %route.station(),
            time = %route.time(),
            depth = route.path().len(),
            edges = edges.len(),
            "expanding route"
        );

        Ok(edges.iter().map(|edge| route.extend(edge)).collect())
    }

    fn compare(&self, a: &PartialRoute, b: &PartialRoute) -> Ordering {
        a.time().cmp(&b.time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DepartureId, Price, Timestamp};
    use crate::planner::source::NextEdge;
    use std::collections::HashSet;
    use std::sync::Mutex;

    fn station(s: &str) -> Station {
        Station::parse(s).unwrap()
    }

    /// Records the arguments of every query and answers with a fixed list.
    struct RecordingSource {
        edges: Vec<NextEdge>,
        queries: Mutex<Vec<(Station, HashSet<Station>, Timestamp)>>,
    }

    impl EdgeSource for RecordingSource {
        async fn next_edges(
            &self,
            from: &Station,
            excluded: &HashSet<Station>,
            not_before: Timestamp,
        ) -> Result<Vec<NextEdge>, SearchError> {
            self.queries
                .lock()
                .unwrap()
                .push((from.clone(), excluded.clone(), not_before));
            Ok(self.edges.clone())
        }
    }

    fn edge(to: &str, id: u64, price: f64, arrive: i64) -> NextEdge {
        NextEdge {
            to: station(to),
            departure: DepartureId::new(id),
            price: Price::new(price).unwrap(),
            arrive_time: Timestamp::from_millis(arrive),
        }
    }

    #[tokio::test]
    async fn expand_builds_one_route_per_edge() {
        let source = RecordingSource {
            edges: vec![edge("B", 1, 10.0, 10), edge("C", 2, 20.0, 30)],
            queries: Mutex::new(Vec::new()),
        };
        let strategy = EarliestArrival::new(&source, station("Z"));
        let seed = PartialRoute::seed(station("A"), Timestamp::EPOCH);

        let next = strategy.expand(&seed).await.unwrap();

        assert_eq!(next.len(), 2);
        assert_eq!(next[0].station(), &station("B"));
        assert_eq!(next[0].time(), Timestamp::from_millis(10));
        assert_eq!(next[1].station(), &station("C"));
        assert_eq!(next[1].cost().value(), 20.0);
    }

    #[tokio::test]
    async fn expand_queries_with_route_state() {
        let source = RecordingSource {
            edges: vec![],
            queries: Mutex::new(Vec::new()),
        };
        let strategy = EarliestArrival::new(&source, station("Z"));
        let route = PartialRoute::seed(station("A"), Timestamp::EPOCH).extend(&edge("B", 1, 1.0, 40));

        let next = strategy.expand(&route).await.unwrap();
        assert!(next.is_empty());

        let queries = source.queries.lock().unwrap();
        assert_eq!(queries.len(), 1);
        let (from, excluded, not_before) = &queries[0];
        assert_eq!(from, &station("B"));
        assert_eq!(*not_before, Timestamp::from_millis(40));
        assert_eq!(excluded, &HashSet::from([station("A")]));
    }

    #[test]
    fn compare_ignores_price() {
        let source = RecordingSource {
            edges: vec![],
            queries: Mutex::new(Vec::new()),
        };
        let strategy = EarliestArrival::new(&source, station("Z"));
        let seed = PartialRoute::seed(station("A"), Timestamp::EPOCH);

        let cheap_late = seed.extend(&edge("B", 1, 1.0, 100));
        let dear_early = seed.extend(&edge("C", 2, 500.0, 10));

        assert_eq!(strategy.compare(&dear_early, &cheap_late), Ordering::Less);
        assert_eq!(strategy.compare(&cheap_late, &dear_early), Ordering::Greater);
        assert_eq!(strategy.compare(&cheap_late, &cheap_late), Ordering::Equal);
    }

    #[test]
    fn goal_is_destination_station() {
        let source = RecordingSource {
            edges: vec![],
            queries: Mutex::new(Vec::new()),
        };
        let strategy = EarliestArrival::new(&source, station("B"));
        let seed = PartialRoute::seed(station("A"), Timestamp::EPOCH);

        assert!(!strategy.is_goal(&seed));
        assert!(strategy.is_goal(&seed.extend(&edge("B", 1, 1.0, 5))));
    }
}
