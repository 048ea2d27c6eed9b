//! Planner service implementation.

use crate::data::PlannerData;
use crate::domain::AirportIndex;
use crate::graph::{Graph, Route, SearchConfig};

/// Error from planning a route. Always the caller's fault; never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// A mandatory parameter was not supplied or was blank.
    #[error("{field} parameter is mandatory")]
    MissingParameter { field: &'static str },

    /// A parameter was supplied with an unusable value.
    #[error("invalid {field} parameter: {message}")]
    InvalidParameter {
        field: &'static str,
        message: String,
    },
}

impl PlanError {
    /// The request field the error is about.
    pub fn field(&self) -> &'static str {
        match self {
            PlanError::MissingParameter { field } => field,
            PlanError::InvalidParameter { field, .. } => field,
        }
    }
}

/// A raw route search request as it arrives from the boundary.
///
/// Fields are optional so that missing parameters surface as
/// [`PlanError`] values with the offending field name rather than as
/// deserialization failures.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// The start airport code.
    pub start: Option<String>,

    /// The destination airport code.
    pub destination: Option<String>,

    /// How many cheapest multi-hop routes to return.
    pub k: Option<i64>,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(start: Option<String>, destination: Option<String>, k: Option<i64>) -> Self {
        Self {
            start,
            destination,
            k,
        }
    }

    /// Validate the request, returning the start code, destination code
    /// and k.
    fn validated(&self) -> Result<(&str, &str, usize), PlanError> {
        let start = require_non_blank(self.start.as_deref(), "start")?;
        let destination = require_non_blank(self.destination.as_deref(), "destination")?;

        let k = self.k.ok_or(PlanError::MissingParameter { field: "k" })?;
        if k <= 0 {
            return Err(PlanError::InvalidParameter {
                field: "k",
                message: "k should be greater than 0".to_string(),
            });
        }

        Ok((start, destination, k as usize))
    }
}

fn require_non_blank<'a>(
    value: Option<&'a str>,
    field: &'static str,
) -> Result<&'a str, PlanError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(PlanError::MissingParameter { field }),
    }
}

/// The answer to a search request.
#[derive(Debug, Clone, Default)]
pub struct Plan {
    /// Single-hop routes from start to destination.
    pub direct_flights: Vec<Route>,

    /// Up to k multi-hop routes, ascending by cost. Never contains a
    /// direct route.
    pub cheapest_flights: Vec<Route>,
}

impl Plan {
    /// A plan with no routes at all.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Route planner over an already-built graph.
///
/// Constructed once at startup from the loader's output and shared
/// read-only for the process lifetime; `plan` is a pure computation and
/// concurrent calls need no coordination.
pub struct Planner {
    graph: Graph,
    airports: AirportIndex,
    config: SearchConfig,
}

impl Planner {
    /// Create a planner from loaded data and a search configuration.
    pub fn new(data: PlannerData, config: SearchConfig) -> Self {
        Self {
            graph: data.graph,
            airports: data.airports,
            config,
        }
    }

    /// Plan routes for a search request.
    ///
    /// An unknown start or destination code is not an error: the plan
    /// comes back with both route lists empty.
    pub fn plan(&self, request: &SearchRequest) -> Result<Plan, PlanError> {
        let (start_code, destination_code, k) = request.validated()?;

        let Some(start) = self.airports.get(start_code) else {
            return Ok(Plan::empty());
        };
        let Some(destination) = self.airports.get(destination_code) else {
            return Ok(Plan::empty());
        };

        let direct_flights = self.graph.direct_connections(start, destination);
        let cheapest_flights = self.graph.top_k(start, destination, k, &self.config);

        Ok(Plan {
            direct_flights,
            cheapest_flights,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Airport, ClockTime, Flight};
    use std::sync::Arc;

    fn request(start: &str, destination: &str, k: i64) -> SearchRequest {
        SearchRequest::new(
            Some(start.to_string()),
            Some(destination.to_string()),
            Some(k),
        )
    }

    fn fixture() -> Planner {
        let del = Arc::new(Airport::new("DEL", "India").unwrap());
        let bom = Arc::new(Airport::new("BOM", "India").unwrap());
        let blr = Arc::new(Airport::new("BLR", "India").unwrap());

        let mut graph = Graph::new();
        let mut airports = AirportIndex::new();
        for a in [&del, &bom, &blr] {
            graph.add_node(Arc::clone(a));
            airports.insert(Arc::clone(a));
        }

        let add = |graph: &mut Graph, code: &str, from: &Arc<Airport>, to: &Arc<Airport>, dep: &str, arr: &str| {
            let flight = Arc::new(
                Flight::new(
                    code,
                    ClockTime::parse_hhmm(dep).unwrap(),
                    ClockTime::parse_hhmm(arr).unwrap(),
                    Arc::clone(from),
                    Arc::clone(to),
                )
                .unwrap(),
            );
            graph.add_edge(from, Arc::clone(to), flight).unwrap();
        };

        add(&mut graph, "AI101", &del, &bom, "0800", "0930");
        add(&mut graph, "AI201", &del, &blr, "0700", "0830");
        add(&mut graph, "AI301", &blr, &bom, "1200", "1330");

        Planner::new(PlannerData { graph, airports }, SearchConfig::default())
    }

    #[test]
    fn plan_returns_direct_and_cheapest() {
        let planner = fixture();

        let plan = planner.plan(&request("DEL", "BOM", 5)).unwrap();

        assert_eq!(plan.direct_flights.len(), 1);
        assert_eq!(plan.direct_flights[0].cost(), 90);

        assert_eq!(plan.cheapest_flights.len(), 1);
        // 90 + layover(0830 -> 1200) = 210 + 90
        assert_eq!(plan.cheapest_flights[0].cost(), 390);
        assert_eq!(plan.cheapest_flights[0].hops(), 2);
    }

    #[test]
    fn direct_route_is_never_in_cheapest() {
        let planner = fixture();

        let plan = planner.plan(&request("DEL", "BOM", 5)).unwrap();
        for route in &plan.cheapest_flights {
            assert!(route.hops() >= 2);
        }
    }

    #[test]
    fn unknown_codes_soft_fail_to_empty_plan() {
        let planner = fixture();

        let plan = planner.plan(&request("XXX", "BOM", 5)).unwrap();
        assert!(plan.direct_flights.is_empty());
        assert!(plan.cheapest_flights.is_empty());

        let plan = planner.plan(&request("DEL", "XXX", 5)).unwrap();
        assert!(plan.direct_flights.is_empty());
        assert!(plan.cheapest_flights.is_empty());
    }

    #[test]
    fn missing_start_rejected() {
        let planner = fixture();

        let result = planner.plan(&SearchRequest::new(None, Some("BOM".into()), Some(3)));
        assert!(matches!(
            result,
            Err(PlanError::MissingParameter { field: "start" })
        ));

        let result = planner.plan(&request("   ", "BOM", 3));
        assert!(matches!(
            result,
            Err(PlanError::MissingParameter { field: "start" })
        ));
    }

    #[test]
    fn missing_destination_rejected() {
        let planner = fixture();

        let result = planner.plan(&SearchRequest::new(Some("DEL".into()), None, Some(3)));
        assert!(matches!(
            result,
            Err(PlanError::MissingParameter {
                field: "destination"
            })
        ));
    }

    #[test]
    fn missing_or_non_positive_k_rejected() {
        let planner = fixture();

        let result = planner.plan(&SearchRequest::new(
            Some("DEL".into()),
            Some("BOM".into()),
            None,
        ));
        assert!(matches!(
            result,
            Err(PlanError::MissingParameter { field: "k" })
        ));

        for k in [0, -1, -100] {
            let result = planner.plan(&request("DEL", "BOM", k));
            assert!(matches!(
                result,
                Err(PlanError::InvalidParameter { field: "k", .. })
            ));
        }
    }

    #[test]
    fn error_reports_offending_field() {
        assert_eq!(
            PlanError::MissingParameter { field: "start" }.field(),
            "start"
        );
        assert_eq!(
            PlanError::InvalidParameter {
                field: "k",
                message: "k should be greater than 0".to_string()
            }
            .field(),
            "k"
        );
    }

    #[test]
    fn plan_is_idempotent() {
        let planner = fixture();

        let snapshot = |plan: &Plan| -> Vec<(u32, Vec<String>)> {
            plan.cheapest_flights
                .iter()
                .map(|r| {
                    (
                        r.cost(),
                        r.flights().iter().map(|f| f.code().to_string()).collect(),
                    )
                })
                .collect()
        };

        let first = planner.plan(&request("DEL", "BOM", 5)).unwrap();
        let second = planner.plan(&request("DEL", "BOM", 5)).unwrap();
        assert_eq!(snapshot(&first), snapshot(&second));
    }
}
