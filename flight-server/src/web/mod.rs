//! Web layer for the flight route planner.
//!
//! Provides the HTTP endpoint for planning routes, the api-key filter
//! and the error-code mapping to transport.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, CLIENT_API_KEY_HEADER, create_router};
pub use state::AppState;
