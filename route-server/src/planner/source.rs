//! The edge source seam between the planner and whatever stores departures.

use std::collections::HashSet;
use std::future::Future;

use crate::domain::{DepartureId, Price, Station, Timestamp};

use super::search::SearchError;

/// The earliest-arriving departure from one station to one neighbour.
#[derive(Debug, Clone, PartialEq)]
pub struct NextEdge {
    pub to: Station,
    pub departure: DepartureId,
    pub price: Price,
    pub arrive_time: Timestamp,
}

/// Trait for providing the next reachable edges from a station.
///
/// This abstraction allows the planner to be tested with mock data and
/// keeps storage concerns out of the search.
///
/// Implementations must return exactly one entry per distinct destination
/// reachable from `from` that is not in `excluded` and has a departure
/// leaving at or after `not_before`. The entry for each destination is the
/// qualifying departure with the smallest arrival time; capacity and other
/// record fields must not influence the choice.
pub trait EdgeSource {
    fn next_edges(
        &self,
        from: &Station,
        excluded: &HashSet<Station>,
        not_before: Timestamp,
    ) -> impl Future<Output = Result<Vec<NextEdge>, SearchError>> + Send;
}
