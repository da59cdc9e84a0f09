//! Web layer for the route planner.
//!
//! Provides HTTP endpoints for managing departures and searching routes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
