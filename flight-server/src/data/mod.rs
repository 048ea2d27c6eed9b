//! Data ingestion for the flight route planner.
//!
//! Loads the static dataset of airports and scheduled flights and builds
//! the graph the planner searches. All dataset validation happens here,
//! before the graph is handed over; the core never re-validates what it
//! is given. Any malformed entry is fatal: the loader refuses to produce
//! a graph rather than serve partial data.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::domain::{
    Airport, AirportIndex, ClockTime, Flight, InvalidAirport, InvalidFlight, TimeError,
};
use crate::graph::{Graph, GraphError};

/// Error from loading the dataset.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// A backing file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A backing file was not valid JSON of the expected shape.
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A schedule entry was missing a field or had a blank one.
    #[error("a flight code, from, to, arrival, departure must not be blank")]
    IncompleteSchedule,

    /// Two schedule entries shared a flight code.
    #[error("each flight must have a unique code; code {code} is duplicated")]
    DuplicateFlightCode { code: String },

    /// A schedule entry connected an airport to itself.
    #[error("flight {code}: from {from} and to {to} must be different")]
    SelfLoop {
        code: String,
        from: String,
        to: String,
    },

    /// A schedule entry referenced an airport not in the airports file.
    #[error("flight {code}: unknown airport code {airport}")]
    UnknownAirport { code: String, airport: String },

    /// A schedule entry carried an unparseable departure or arrival time.
    #[error("flight {code}: {source}")]
    InvalidTime {
        code: String,
        #[source]
        source: TimeError,
    },

    /// An airports file entry failed domain validation.
    #[error(transparent)]
    InvalidAirport(#[from] InvalidAirport),

    /// A schedule entry failed domain validation.
    #[error(transparent)]
    InvalidFlight(#[from] InvalidFlight),

    /// The graph rejected an edge; indicates a loader bug, not bad data.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Everything ingestion produces: the graph plus the code lookup the
/// service layer needs. Returned by value; the process holds no global
/// dataset state.
#[derive(Debug)]
pub struct PlannerData {
    pub graph: Graph,
    pub airports: AirportIndex,
}

/// Loads the dataset and produces the planner's graph.
pub trait DataLoader {
    /// Load the data and return the graph representation of it.
    fn load(&self) -> Result<PlannerData, DataError>;
}

/// One schedule entry as it appears in the schedule file.
#[derive(Debug, Deserialize)]
struct ScheduleEntry {
    code: String,
    from: String,
    to: String,
    departure: String,
    arrival: String,
}

/// [`DataLoader`] over two JSON files: an airports object mapping code
/// to country, and a schedule array of flights between those airports.
pub struct FileDataLoader {
    airports_path: PathBuf,
    schedule_path: PathBuf,
}

impl FileDataLoader {
    /// Create a loader over the given airports and schedule files.
    pub fn new(airports_path: impl Into<PathBuf>, schedule_path: impl Into<PathBuf>) -> Self {
        Self {
            airports_path: airports_path.into(),
            schedule_path: schedule_path.into(),
        }
    }

    fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, DataError> {
        let raw = fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| DataError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    fn validate_entry(entry: &ScheduleEntry, seen_codes: &HashSet<String>) -> Result<(), DataError> {
        if entry.code.trim().is_empty()
            || entry.from.trim().is_empty()
            || entry.to.trim().is_empty()
            || entry.departure.trim().is_empty()
            || entry.arrival.trim().is_empty()
        {
            return Err(DataError::IncompleteSchedule);
        }
        if seen_codes.contains(&entry.code) {
            return Err(DataError::DuplicateFlightCode {
                code: entry.code.clone(),
            });
        }
        if entry.from.eq_ignore_ascii_case(&entry.to) {
            return Err(DataError::SelfLoop {
                code: entry.code.clone(),
                from: entry.from.clone(),
                to: entry.to.clone(),
            });
        }
        Ok(())
    }
}

impl DataLoader for FileDataLoader {
    fn load(&self) -> Result<PlannerData, DataError> {
        // BTreeMap keeps node registration order independent of the
        // file's key order, so repeated loads build identical graphs.
        let raw_airports: BTreeMap<String, String> = Self::read_json(&self.airports_path)?;

        let mut graph = Graph::new();
        let mut airports = AirportIndex::new();
        for (code, country) in raw_airports {
            let airport = Arc::new(Airport::new(code, country)?);
            graph.add_node(Arc::clone(&airport));
            airports.insert(airport);
        }

        info!(
            airports = airports.len(),
            path = %self.airports_path.display(),
            "loaded airports"
        );

        let schedule: Vec<ScheduleEntry> = Self::read_json(&self.schedule_path)?;

        let mut seen_codes: HashSet<String> = HashSet::with_capacity(schedule.len());
        for entry in &schedule {
            Self::validate_entry(entry, &seen_codes)?;
            seen_codes.insert(entry.code.clone());

            let from = airports
                .get(&entry.from)
                .ok_or_else(|| DataError::UnknownAirport {
                    code: entry.code.clone(),
                    airport: entry.from.clone(),
                })?
                .clone();
            let to = airports
                .get(&entry.to)
                .ok_or_else(|| DataError::UnknownAirport {
                    code: entry.code.clone(),
                    airport: entry.to.clone(),
                })?
                .clone();

            let departure = ClockTime::parse_hhmm(&pad_hhmm(&entry.departure)).map_err(|source| {
                DataError::InvalidTime {
                    code: entry.code.clone(),
                    source,
                }
            })?;
            let arrival = ClockTime::parse_hhmm(&pad_hhmm(&entry.arrival)).map_err(|source| {
                DataError::InvalidTime {
                    code: entry.code.clone(),
                    source,
                }
            })?;

            let flight = Arc::new(Flight::new(
                entry.code.clone(),
                departure,
                arrival,
                Arc::clone(&from),
                Arc::clone(&to),
            )?);
            graph.add_edge(&from, to, flight)?;
        }

        info!(
            flights = graph.edge_count(),
            path = %self.schedule_path.display(),
            "loaded schedule"
        );

        Ok(PlannerData { graph, airports })
    }
}

/// Left-pad a time with zeros to 4 digits; "930" becomes "0930".
/// Anything longer is returned unchanged and rejected by the parser.
fn pad_hhmm(raw: &str) -> String {
    format!("{raw:0>4}")
}
