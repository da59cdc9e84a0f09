//! Earliest-arrival route search.
//!
//! Finds a chain of departures from a start station to a destination that
//! arrives as early as possible, given the time the traveller is ready to
//! leave.

use tracing::{debug, info};

use crate::domain::{DepartureId, Price, Station, Timestamp};

use super::config::SearchConfig;
use super::earliest::EarliestArrival;
use super::route::PartialRoute;
use super::source::EdgeSource;
use super::strategy::{Termination, run_search};

/// Error from route search.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// Failed to fetch departures
    #[error("failed to fetch departures from {station}: {message}")]
    FetchError { station: Station, message: String },

    /// Invalid search request
    #[error("invalid search request: {0}")]
    InvalidRequest(String),

    /// Search timed out
    #[error("search timed out")]
    Timeout,

    /// Search expanded too many routes without finishing
    #[error("search gave up after expanding {0} routes")]
    ExpansionLimit(usize),
}

/// Request for route search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    /// Where the traveller starts.
    pub start: Station,

    /// Where the traveller wants to end up.
    pub destination: Station,

    /// Earliest time the traveller can leave `start`.
    pub start_time: Timestamp,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(start: Station, destination: Station, start_time: Timestamp) -> Self {
        Self {
            start,
            destination,
            start_time,
        }
    }

    /// Build a request from raw client input.
    ///
    /// Missing or malformed stations are rejected here, before any
    /// departures are looked up.
    pub fn parse(
        start: Option<&str>,
        destination: Option<&str>,
        start_time: Timestamp,
    ) -> Result<Self, SearchError> {
        let start = parse_station("start", start)?;
        let destination = parse_station("destination", destination)?;
        Ok(Self::new(start, destination, start_time))
    }
}

fn parse_station(field: &str, value: Option<&str>) -> Result<Station, SearchError> {
    let value =
        value.ok_or_else(|| SearchError::InvalidRequest(format!("missing {field} station")))?;
    Station::parse(value).map_err(|e| SearchError::InvalidRequest(format!("{field}: {e}")))
}

/// A route that reaches the destination.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundRoute {
    /// Departures to take, in order.
    pub departures: Vec<DepartureId>,

    /// Sum of the departures' prices.
    pub total_cost: Price,

    /// Arrival time at the destination.
    pub final_arrival_time: Timestamp,
}

impl From<PartialRoute> for FoundRoute {
    fn from(route: PartialRoute) -> Self {
        let total_cost = route.cost();
        let final_arrival_time = route.time();
        Self {
            departures: route.into_path(),
            total_cost,
            final_arrival_time,
        }
    }
}

/// Outcome of a search that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    Found(FoundRoute),

    /// Every reachable route was explored without reaching the destination.
    NotFound,
}

/// Result of route search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub outcome: RouteOutcome,

    /// Number of routes expanded during search.
    pub routes_explored: usize,
}

/// Route planner over an edge source.
pub struct Planner<'a, E: EdgeSource> {
    source: &'a E,
    config: &'a SearchConfig,
}

impl<'a, E: EdgeSource + Sync> Planner<'a, E> {
    /// Create a new planner.
    pub fn new(source: &'a E, config: &'a SearchConfig) -> Self {
        Self { source, config }
    }

    /// Search for the earliest-arriving route for `request`.
    ///
    /// A failing edge source aborts the search with that error; it is never
    /// reported as `NotFound`.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        debug!(
            start = %request.start,
            destination = %request.destination,
            start_time = %request.start_time,
            "starting route search"
        );

        let strategy = EarliestArrival::new(self.source, request.destination.clone());
        let seed = PartialRoute::seed(request.start.clone(), request.start_time);

        let summary = run_search(&strategy, seed, self.config).await?;

        let outcome = match summary.termination {
            Termination::Found(route) => RouteOutcome::Found(route.into()),
            Termination::Exhausted => RouteOutcome::NotFound,
        };

        info!(
            start = %request.start,
            destination = %request.destination,
            found = matches!(outcome, RouteOutcome::Found(_)),
            routes_explored = summary.routes_explored,
            "route search finished"
        );

        Ok(SearchResult {
            outcome,
            routes_explored: summary.routes_explored,
        })
    }
}

/// Find the earliest-arriving route from `start` to `destination`.
pub async fn find_route<E: EdgeSource + Sync>(
    source: &E,
    start: Station,
    destination: Station,
    start_time: Timestamp,
    config: &SearchConfig,
) -> Result<RouteOutcome, SearchError> {
    let request = SearchRequest::new(start, destination, start_time);
    let result = Planner::new(source, config).search(&request).await?;
    Ok(result.outcome)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
