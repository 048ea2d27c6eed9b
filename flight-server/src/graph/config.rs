//! Search configuration for the route planner.

/// Configuration parameters for the top-K route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Minimum buffer required at an intermediate stop before boarding
    /// the next flight (minutes).
    pub minimum_layover_mins: u32,

    /// Maximum number of hops a route may contain. Candidates exceeding
    /// this are discarded outright, even at the destination.
    pub maximum_hops: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(minimum_layover_mins: u32, maximum_hops: usize) -> Self {
        Self {
            minimum_layover_mins,
            maximum_hops,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            minimum_layover_mins: 120, // 2 hours
            maximum_hops: 3,
        }
    }
}
