//! Departure storage.
//!
//! Holds the scheduled departures that make up the connection graph and
//! serves them to the planner through [`EdgeSource`](crate::planner::EdgeSource).
//! Record creation, lookup and deletion live here too; none of it is part of
//! the search itself.

mod error;
mod fixtures;
mod memory;
mod reduce;

pub use error::StoreError;
pub use memory::DepartureStore;
pub use reduce::earliest_per_destination;
