//! Clock time handling for flight schedules.
//!
//! Schedules provide times as 4-digit 24-hour "HHMM" strings with no date
//! component. This module provides a time-of-day type whose arithmetic
//! wraps around midnight, matching how the schedule data treats overnight
//! flights.

use chrono::{Duration, NaiveTime, Timelike};
use std::fmt;

/// Minutes in one full day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day parsed from "HHMM" format.
///
/// Clock times carry no date; any interval between two of them is taken
/// going forward, wrapping past midnight when needed. Two flights at
/// "0130" are indistinguishable regardless of day.
///
/// # Examples
///
/// ```
/// use flight_server::domain::ClockTime;
///
/// let t = ClockTime::parse_hhmm("1430").unwrap();
/// assert_eq!(t.to_string(), "1430");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Parse a time from "HHMM" format.
    ///
    /// The input must be exactly 4 ASCII digits with hour 00-23 and
    /// minute 00-59.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_server::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse_hhmm("0000").is_ok());
    /// assert!(ClockTime::parse_hhmm("2359").is_ok());
    ///
    /// assert!(ClockTime::parse_hhmm("930").is_err());
    /// assert!(ClockTime::parse_hhmm("14:30").is_err());
    /// assert!(ClockTime::parse_hhmm("2500").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        let bytes = s.as_bytes();

        if bytes.len() != 4 {
            return Err(TimeError::new("expected HHMM format"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[2..4])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        Ok(Self(time))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Minutes since midnight, in [0, 1439].
    pub fn minute_of_day(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    /// True if this is exactly midnight ("0000").
    pub fn is_midnight(&self) -> bool {
        self.minute_of_day() == 0
    }

    /// Add minutes, wrapping past midnight.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_server::domain::ClockTime;
    ///
    /// let t = ClockTime::parse_hhmm("2330").unwrap();
    /// assert_eq!(t.plus_minutes(60).to_string(), "0030");
    /// ```
    pub fn plus_minutes(&self, minutes: u32) -> Self {
        Self(self.0 + Duration::minutes(i64::from(minutes)))
    }

    /// Minutes from this time forward to `other`.
    ///
    /// When `other` is numerically before `self` the interval is taken to
    /// cross midnight, so the result is always in [0, 1439].
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_server::domain::ClockTime;
    ///
    /// let late = ClockTime::parse_hhmm("2350").unwrap();
    /// let early = ClockTime::parse_hhmm("0120").unwrap();
    /// assert_eq!(late.elapsed_until(early), 90);
    /// assert_eq!(early.elapsed_until(late), 1350);
    /// ```
    pub fn elapsed_until(&self, other: Self) -> u32 {
        let diff = i64::from(other.minute_of_day()) - i64::from(self.minute_of_day());
        if diff < 0 {
            (i64::from(MINUTES_PER_DAY) + diff) as u32
        } else {
            diff as u32
        }
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(s: &str) -> ClockTime {
        ClockTime::parse_hhmm(s).unwrap()
    }

    #[test]
    fn parse_valid_times() {
        let t = time("0000");
        assert_eq!(t.hour(), 0);
        assert_eq!(t.minute(), 0);

        let t = time("2359");
        assert_eq!(t.hour(), 23);
        assert_eq!(t.minute(), 59);

        let t = time("1430");
        assert_eq!(t.hour(), 14);
        assert_eq!(t.minute(), 30);
    }

    #[test]
    fn parse_invalid_format() {
        // Wrong length
        assert!(ClockTime::parse_hhmm("930").is_err());
        assert!(ClockTime::parse_hhmm("14300").is_err());
        assert!(ClockTime::parse_hhmm("").is_err());

        // Separators
        assert!(ClockTime::parse_hhmm("14:30").is_err());
        assert!(ClockTime::parse_hhmm("14.3").is_err());

        // Non-digit characters
        assert!(ClockTime::parse_hhmm("abcd").is_err());
        assert!(ClockTime::parse_hhmm("1a30").is_err());
    }

    #[test]
    fn parse_invalid_values() {
        assert!(ClockTime::parse_hhmm("2400").is_err());
        assert!(ClockTime::parse_hhmm("2500").is_err());
        assert!(ClockTime::parse_hhmm("1260").is_err());
        assert!(ClockTime::parse_hhmm("1299").is_err());
    }

    #[test]
    fn display_format() {
        assert_eq!(time("0000").to_string(), "0000");
        assert_eq!(time("0905").to_string(), "0905");
        assert_eq!(time("2359").to_string(), "2359");
    }

    #[test]
    fn ordering_is_time_of_day() {
        assert!(time("1000") < time("1100"));
        assert!(time("2359") > time("0001"));
        assert_eq!(time("1430"), time("1430"));
    }

    #[test]
    fn plus_minutes_wraps() {
        assert_eq!(time("1000").plus_minutes(120).to_string(), "1200");
        assert_eq!(time("2330").plus_minutes(60).to_string(), "0030");
        assert_eq!(time("2200").plus_minutes(120).to_string(), "0000");
    }

    #[test]
    fn elapsed_forward() {
        assert_eq!(time("1000").elapsed_until(time("1230")), 150);
        assert_eq!(time("1000").elapsed_until(time("1000")), 0);
    }

    #[test]
    fn elapsed_wraps_midnight() {
        assert_eq!(time("2350").elapsed_until(time("0120")), 90);
        assert_eq!(time("0120").elapsed_until(time("2350")), 1350);
        assert_eq!(time("0001").elapsed_until(time("0000")), 1439);
    }

    #[test]
    fn hash_consistent() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(time("1430"));

        assert!(set.contains(&time("1430")));
        assert!(!set.contains(&time("1431")));
    }
}
