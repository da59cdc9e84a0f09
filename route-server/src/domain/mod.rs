//! Domain types for the route planner.
//!
//! This module contains the validated value types the rest of the crate
//! works with. All types enforce their invariants at construction time, so
//! code that receives these types can trust their validity.

mod departure;
mod error;
mod price;
mod station;
mod time;

pub use departure::{Departure, DepartureId, DepartureInput, InvalidDepartureId, NewDeparture};
pub use error::DomainError;
pub use price::{InvalidPrice, Price};
pub use station::{InvalidStation, Station};
pub use time::{TimeError, TimeInput, Timestamp};
