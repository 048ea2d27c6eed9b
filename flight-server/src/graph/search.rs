//! Top-K cheapest route search.
//!
//! Best-first search over the flight graph: a min-priority frontier of
//! partial candidates ordered by cumulative cost, expanded until k
//! complete routes are accepted or the frontier runs dry. Layover and
//! flight costs are never negative, so the cheapest frontier entry is a
//! true lower bound and the first k accepted routes are the k cheapest.
//! Changing the frontier ordering would break that guarantee.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{Airport, Flight};

use super::config::SearchConfig;
use super::layover::layover_mins;
use super::route::Route;
use super::{Edge, Graph};

/// One link in a candidate's path. Links are shared between candidates
/// instead of copied: extending a candidate allocates a single node
/// pointing back at the parent's chain.
struct PathNode {
    flight: Arc<Flight>,
    prev: Option<Arc<PathNode>>,
}

/// A partial route under exploration.
///
/// Never escapes the search; accepted candidates are materialized into
/// [`Route`] values at the end. Cost only grows as a candidate is
/// extended.
struct Candidate {
    cost: u32,
    hops: usize,
    location: Arc<Airport>,
    path: Option<Arc<PathNode>>,
}

impl Candidate {
    /// The zero-cost candidate sitting at the start with no flights taken.
    fn seed(start: Arc<Airport>) -> Self {
        Self {
            cost: 0,
            hops: 0,
            location: start,
            path: None,
        }
    }

    /// True if the candidate's path already passes through `airport`.
    /// The visited set is the start plus every flight's destination,
    /// which always includes the current location.
    fn visits(&self, airport: &Airport) -> bool {
        if self.location.as_ref() == airport {
            return true;
        }
        let mut node = self.path.as_deref();
        while let Some(n) = node {
            if n.flight.origin().as_ref() == airport || n.flight.destination().as_ref() == airport {
                return true;
            }
            node = n.prev.as_deref();
        }
        false
    }

    /// Extend the candidate over `edge`: layover from the last arrival
    /// (none for the first flight) plus the flight duration.
    fn extend(&self, edge: &Edge, config: &SearchConfig) -> Candidate {
        let mut added = edge.flight.duration_mins();
        if let Some(last) = self.path.as_deref() {
            added += layover_mins(
                last.flight.arrival(),
                edge.flight.departure(),
                config.minimum_layover_mins,
            );
        }

        Candidate {
            cost: self.cost + added,
            hops: self.hops + 1,
            location: Arc::clone(&edge.destination),
            path: Some(Arc::new(PathNode {
                flight: Arc::clone(&edge.flight),
                prev: self.path.clone(),
            })),
        }
    }

    /// Flights taken so far, in travel order.
    fn flights(&self) -> Vec<Arc<Flight>> {
        let mut flights = Vec::with_capacity(self.hops);
        let mut node = self.path.as_deref();
        while let Some(n) = node {
            flights.push(Arc::clone(&n.flight));
            node = n.prev.as_deref();
        }
        flights.reverse();
        flights
    }

    fn into_route(self) -> Route {
        let flights = self.flights();
        Route::new(self.cost, flights)
    }
}

// Candidates are ranked by cumulative cost, then by hop count, both in
// the frontier and when draining the accepted set.
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.hops.cmp(&other.hops))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Graph {
    /// The k cheapest multi-hop routes from `start` to `destination`,
    /// ascending by cost.
    ///
    /// Cost is total travel time: flight durations plus layovers at
    /// intermediate stops. Direct single-hop routes are excluded; they
    /// are served by [`Graph::direct_connections`] only. When start and
    /// destination share a country the whole route stays inside that
    /// country. No candidate revisits an airport, and no route exceeds
    /// `config.maximum_hops` flights.
    ///
    /// Returns fewer than `k` routes when fewer legal itineraries exist,
    /// and an empty vec when the start is unregistered or nothing
    /// reaches the destination.
    pub fn top_k(
        &self,
        start: &Arc<Airport>,
        destination: &Arc<Airport>,
        k: usize,
        config: &SearchConfig,
    ) -> Vec<Route> {
        let country = if start.same_country(destination) {
            Some(start.country())
        } else {
            None
        };

        let mut frontier: BinaryHeap<Reverse<Candidate>> = BinaryHeap::new();
        frontier.push(Reverse(Candidate::seed(Arc::clone(start))));

        // Worst-first over accepted routes so the one to evict is on top.
        let mut accepted: BinaryHeap<Candidate> = BinaryHeap::new();

        while accepted.len() < k {
            let Some(Reverse(candidate)) = frontier.pop() else {
                break;
            };

            // Hard prune: over the hop limit the candidate is dropped
            // even if it already reached the destination.
            if candidate.hops > config.maximum_hops {
                continue;
            }

            if candidate.location.as_ref() == destination.as_ref() {
                accepted.push(candidate);
                if accepted.len() > k {
                    // Unreachable while the loop guard stops at k.
                    if let Some(worst) = accepted.pop() {
                        debug!(
                            start = %start,
                            destination = %destination,
                            cost = worst.cost,
                            "route fell outside top {k}"
                        );
                    }
                }
                continue;
            }

            for edge in self.edges(&candidate.location) {
                if let Some(country) = country {
                    if !edge.destination.country_matches(country) {
                        // Domestic travel never takes an international detour
                        continue;
                    }
                }
                if candidate.location.as_ref() == start.as_ref()
                    && edge.destination.as_ref() == destination.as_ref()
                {
                    // The single-hop start-to-destination edge belongs to
                    // direct_connections, not here
                    continue;
                }
                if candidate.visits(&edge.destination) {
                    continue;
                }

                frontier.push(Reverse(candidate.extend(edge, config)));
            }
        }

        accepted
            .into_sorted_vec()
            .into_iter()
            .map(Candidate::into_route)
            .collect()
    }
}
