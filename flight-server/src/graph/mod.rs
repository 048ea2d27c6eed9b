//! In-memory flight graph and route search.
//!
//! Airports are nodes and scheduled flights are edges. The graph is
//! built once by the data loader and never mutated afterwards, so it is
//! safely shared across concurrent searches without locking. The top-K
//! search lives in `search`; cost arithmetic in `layover`.

mod config;
mod layover;
mod route;
mod search;

pub use config::SearchConfig;
pub use route::Route;

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{Airport, Flight};

/// Error from graph construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An edge referenced an origin that was never registered as a node.
    #[error("node {code} not present in graph")]
    UnknownNode { code: String },
}

/// An outgoing edge: the destination airport and the flight that covers it.
#[derive(Debug, Clone)]
pub(crate) struct Edge {
    pub(crate) destination: Arc<Airport>,
    pub(crate) flight: Arc<Flight>,
}

/// Adjacency-list flight graph.
///
/// Edges are appended in insertion order and never deduplicated:
/// registering the same connection twice yields two parallel edges.
/// Cycles across edges are permitted; the search keeps each candidate
/// path acyclic, the graph itself does not.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<Arc<Airport>, Vec<Edge>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an airport as a node. Idempotent: re-adding an existing
    /// node leaves its edges untouched.
    pub fn add_node(&mut self, airport: Arc<Airport>) {
        self.adjacency.entry(airport).or_default();
    }

    /// Add an edge from `origin` to `destination` covered by `flight`.
    ///
    /// Fails if `origin` was never registered via [`Graph::add_node`].
    /// No duplicate check is performed.
    pub fn add_edge(
        &mut self,
        origin: &Airport,
        destination: Arc<Airport>,
        flight: Arc<Flight>,
    ) -> Result<(), GraphError> {
        let edges = self
            .adjacency
            .get_mut(origin)
            .ok_or_else(|| GraphError::UnknownNode {
                code: origin.code().to_string(),
            })?;
        edges.push(Edge {
            destination,
            flight,
        });
        Ok(())
    }

    /// Number of registered nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Every single-hop flight from `start` to `destination`, each as a
    /// one-flight route costed at its flight duration.
    ///
    /// Returns an empty vec for an unregistered start or when no edge
    /// matches; never an error.
    pub fn direct_connections(&self, start: &Airport, destination: &Airport) -> Vec<Route> {
        let Some(edges) = self.adjacency.get(start) else {
            return Vec::new();
        };

        edges
            .iter()
            .filter(|edge| edge.destination.as_ref() == destination)
            .map(|edge| Route::new(edge.flight.duration_mins(), vec![Arc::clone(&edge.flight)]))
            .collect()
    }

    /// Outgoing edges of an airport, in insertion order.
    fn edges(&self, airport: &Airport) -> &[Edge] {
        self.adjacency
            .get(airport)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
