//! Scheduled flight type.

use std::fmt;
use std::sync::Arc;

use super::airport::Airport;
use super::time::ClockTime;

/// Error returned when constructing an invalid flight.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid flight: {reason}")]
pub struct InvalidFlight {
    reason: &'static str,
}

/// A scheduled connection between two airports.
///
/// Departure and arrival are clock times with no date; an arrival
/// numerically before the departure means the flight lands the next day.
/// The flight does not check origin against destination; ingestion
/// rejects self-loop connections before a `Flight` is ever built.
#[derive(Clone, PartialEq, Eq)]
pub struct Flight {
    code: String,
    departure: ClockTime,
    arrival: ClockTime,
    origin: Arc<Airport>,
    destination: Arc<Airport>,
}

impl Flight {
    /// Create a flight. The code must be non-blank; the times are valid
    /// by construction of [`ClockTime`].
    pub fn new(
        code: impl Into<String>,
        departure: ClockTime,
        arrival: ClockTime,
        origin: Arc<Airport>,
        destination: Arc<Airport>,
    ) -> Result<Self, InvalidFlight> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(InvalidFlight {
                reason: "code must not be blank",
            });
        }

        Ok(Self {
            code,
            departure,
            arrival,
            origin,
            destination,
        })
    }

    /// Returns the flight code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the departure time.
    pub fn departure(&self) -> ClockTime {
        self.departure
    }

    /// Returns the arrival time.
    pub fn arrival(&self) -> ClockTime {
        self.arrival
    }

    /// Returns the origin airport.
    pub fn origin(&self) -> &Arc<Airport> {
        &self.origin
    }

    /// Returns the destination airport.
    pub fn destination(&self) -> &Arc<Airport> {
        &self.destination
    }

    /// Time in the air, in minutes, wrapping past midnight.
    pub fn duration_mins(&self) -> u32 {
        self.departure.elapsed_until(self.arrival)
    }
}

impl fmt::Debug for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Flight({} {}->{} {}/{})",
            self.code, self.origin, self.destination, self.departure, self.arrival
        )
    }
}
