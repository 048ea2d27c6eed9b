//! Airport types.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Error returned when constructing an invalid airport.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport: {reason}")]
pub struct InvalidAirport {
    reason: &'static str,
}

/// An airport, identified by its code and the country it is located in.
///
/// Two airports are equal iff both code and country match exactly. The
/// domestic-travel rule compares countries case-insensitively; use
/// [`Airport::same_country`] for that, not field equality.
///
/// # Examples
///
/// ```
/// use flight_server::domain::Airport;
///
/// let del = Airport::new("DEL", "India").unwrap();
/// assert_eq!(del.code(), "DEL");
/// assert_eq!(del.country(), "India");
///
/// assert!(Airport::new("", "India").is_err());
/// assert!(Airport::new("DEL", "  ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Airport {
    code: String,
    country: String,
}

impl Airport {
    /// Create an airport from a code and a country.
    ///
    /// Both must be non-blank.
    pub fn new(code: impl Into<String>, country: impl Into<String>) -> Result<Self, InvalidAirport> {
        let code = code.into();
        let country = country.into();

        if code.trim().is_empty() {
            return Err(InvalidAirport {
                reason: "code must not be blank",
            });
        }
        if country.trim().is_empty() {
            return Err(InvalidAirport {
                reason: "country must not be blank",
            });
        }

        Ok(Self { code, country })
    }

    /// Returns the airport code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the country the airport is located in.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// True if both airports are in the same country, ignoring ASCII case.
    pub fn same_country(&self, other: &Airport) -> bool {
        self.country_matches(&other.country)
    }

    /// True if the airport is in the given country, ignoring ASCII case.
    pub fn country_matches(&self, country: &str) -> bool {
        self.country.eq_ignore_ascii_case(country)
    }
}

impl fmt::Debug for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Airport({}, {})", self.code, self.country)
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Lookup from airport code to the shared airport instance.
///
/// Built once by the data loader and passed explicitly to whoever needs
/// to resolve codes; the process holds no global airport state.
#[derive(Debug, Clone, Default)]
pub struct AirportIndex {
    by_code: HashMap<String, Arc<Airport>>,
}

impl AirportIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an airport under its code.
    ///
    /// A later insert with the same code replaces the earlier entry.
    pub fn insert(&mut self, airport: Arc<Airport>) {
        self.by_code.insert(airport.code().to_string(), airport);
    }

    /// Resolve a code to its airport, if registered.
    pub fn get(&self, code: &str) -> Option<&Arc<Airport>> {
        self.by_code.get(code)
    }

    /// Number of registered airports.
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    /// True if no airports are registered.
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}
