//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::Planner;

/// Shared application state.
///
/// The planner is built once at startup and shared read-only across all
/// request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Route planner over the loaded graph
    pub planner: Arc<Planner>,

    /// Expected client api key; `None` disables the api-key filter
    pub api_key: Option<Arc<str>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(planner: Planner, api_key: Option<String>) -> Self {
        Self {
            planner: Arc::new(planner),
            api_key: api_key.map(Arc::from),
        }
    }
}
