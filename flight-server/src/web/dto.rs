//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Flight;
use crate::graph::Route;
use crate::planner::Plan;

/// Query parameters for a route plan request.
///
/// Everything is optional here; the planner reports which mandatory
/// field is missing.
#[derive(Debug, Deserialize)]
pub struct PlanQuery {
    /// Start airport code
    pub start: Option<String>,

    /// Destination airport code
    pub destination: Option<String>,

    /// How many cheapest routes to return
    pub k: Option<i64>,
}

/// A planned set of routes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    /// Single-hop routes
    pub direct_flights: Vec<RouteResult>,

    /// Multi-hop routes, ascending by cost
    pub cheapest_flights: Vec<RouteResult>,
}

impl PlanResponse {
    /// Build the response body from a plan.
    pub fn from_plan(plan: &Plan) -> Self {
        Self {
            direct_flights: plan.direct_flights.iter().map(RouteResult::from_route).collect(),
            cheapest_flights: plan
                .cheapest_flights
                .iter()
                .map(RouteResult::from_route)
                .collect(),
        }
    }
}

/// One route in a plan.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Total travel time in minutes
    pub cost: u32,

    /// Flights taken, in order
    pub flights: Vec<FlightResult>,
}

impl RouteResult {
    fn from_route(route: &Route) -> Self {
        Self {
            cost: route.cost(),
            flights: route.flights().iter().map(|f| FlightResult::from_flight(f)).collect(),
        }
    }
}

/// One flight within a route.
#[derive(Debug, Serialize)]
pub struct FlightResult {
    /// Flight code
    pub code: String,

    /// Origin airport code
    pub from: String,

    /// Destination airport code
    pub to: String,

    /// Departure time in HHMM
    pub departure: String,

    /// Arrival time in HHMM
    pub arrival: String,
}

impl FlightResult {
    fn from_flight(flight: &Flight) -> Self {
        Self {
            code: flight.code().to_string(),
            from: flight.origin().code().to_string(),
            to: flight.destination().code().to_string(),
            departure: flight.departure().to_string(),
            arrival: flight.arrival().to_string(),
        }
    }
}

/// Field-level detail inside an error response.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Name of the offending request field
    pub field: String,

    /// What was wrong with it
    pub message: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Stable machine-readable error code
    pub code: String,

    /// Human-readable message
    pub message: String,

    /// Per-field details, when the error is about request fields
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ErrorDetail>,
}
