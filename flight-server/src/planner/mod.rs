//! Route planning service.
//!
//! Sits between the boundary and the graph: validates a raw search
//! request, resolves airport codes, and assembles the direct and
//! cheapest multi-hop routes into a [`Plan`].

mod service;

pub use service::{Plan, PlanError, Planner, SearchRequest};
