//! Route planner using asynchronous best-first search.
//!
//! This module implements the core algorithm that answers: "leaving this
//! station at this time, what is the earliest I can reach my destination?"
//!
//! A generic search loop ([`run_search`]) repeatedly expands the
//! best-ranked partial route until the best one is at the destination or
//! nothing is left. The routing decisions live in [`EarliestArrival`], and
//! departures come from an [`EdgeSource`] so storage stays out of the
//! algorithm.

mod config;
mod earliest;
mod frontier;
mod route;
mod search;
mod source;
mod strategy;

pub use config::SearchConfig;
pub use earliest::EarliestArrival;
pub use frontier::Frontier;
pub use route::PartialRoute;
pub use search::{
    FoundRoute, Planner, RouteOutcome, SearchError, SearchRequest, SearchResult, find_route,
};
pub use source::{EdgeSource, NextEdge};
pub use strategy::{SearchStrategy, SearchSummary, Termination, run_search};
