//! Domain types for the flight route planner.
//!
//! This module contains the core domain model types that represent
//! validated schedule data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod airport;
mod flight;
mod time;

pub use airport::{Airport, AirportIndex, InvalidAirport};
pub use flight::{Flight, InvalidFlight};
pub use time::{ClockTime, MINUTES_PER_DAY, TimeError};
