//! Train route planner server.
//!
//! Stores scheduled departures between stations and answers: "leaving this
//! station at this time, what is the earliest I can reach my destination,
//! and which departures do I take?"

pub mod cache;
pub mod domain;
pub mod planner;
pub mod settings;
pub mod store;
pub mod web;
