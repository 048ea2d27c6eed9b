//! Route result type.

use std::sync::Arc;

use crate::domain::Flight;

/// A complete itinerary from a start airport to a destination.
///
/// Produced only as a terminal search result and immutable once
/// returned. Cost is the total travel time in minutes, flight time plus
/// any layovers.
#[derive(Debug, Clone)]
pub struct Route {
    cost: u32,
    flights: Vec<Arc<Flight>>,
}

impl Route {
    /// Create a route from its total cost and the flights taken, in order.
    pub fn new(cost: u32, flights: Vec<Arc<Flight>>) -> Self {
        Self { cost, flights }
    }

    /// Total travel time in minutes.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// The flights taken, in order.
    pub fn flights(&self) -> &[Arc<Flight>] {
        &self.flights
    }

    /// Number of hops in the route.
    pub fn hops(&self) -> usize {
        self.flights.len()
    }
}
