//! Departure timestamp handling.
//!
//! TransportAPI reports a departure as a `YYYY-MM-DD` date plus an `HH:MM`
//! best estimate, both in UK local time. The parser here is deliberately
//! strict: exact field widths, 24-hour clock, no seconds, no zone.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Error returned when a departure's date or time fields are malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid departure time {input:?}: {reason}")]
pub struct ParseError {
    input: String,
    reason: &'static str,
}

impl ParseError {
    pub(crate) fn new(input: impl Into<String>, reason: &'static str) -> Self {
        Self {
            input: input.into(),
            reason,
        }
    }

    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Parse a `"YYYY-MM-DD"` date and `"HH:MM"` time into a local timestamp.
///
/// # Examples
///
/// ```
/// use bus_info::domain::parse_departure_timestamp;
///
/// let ts = parse_departure_timestamp("2024-03-15", "14:30").unwrap();
/// assert_eq!(ts.to_string(), "2024-03-15 14:30:00");
///
/// // Single-digit fields, seconds and 12-hour times are all rejected
/// assert!(parse_departure_timestamp("2024-3-15", "14:30").is_err());
/// assert!(parse_departure_timestamp("2024-03-15", "9:05").is_err());
/// assert!(parse_departure_timestamp("2024-03-15", "14:30:00").is_err());
/// assert!(parse_departure_timestamp("2024-03-15", "2:30pm").is_err());
/// ```
pub fn parse_departure_timestamp(date: &str, time: &str) -> Result<NaiveDateTime, ParseError> {
    let input = format!("{date} {time}");
    let date = parse_date(date).map_err(|reason| ParseError::new(&input, reason))?;
    let time = parse_hhmm(time).map_err(|reason| ParseError::new(&input, reason))?;
    Ok(date.and_time(time))
}

/// Parse an exact `YYYY-MM-DD` date.
fn parse_date(s: &str) -> Result<NaiveDate, &'static str> {
    let bytes = s.as_bytes();

    if bytes.len() != 10 {
        return Err("expected YYYY-MM-DD date");
    }

    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err("expected dashes at positions 4 and 7");
    }

    let year = parse_digits(&bytes[0..4]).ok_or("invalid year digits")?;
    let month = parse_digits(&bytes[5..7]).ok_or("invalid month digits")?;
    let day = parse_digits(&bytes[8..10]).ok_or("invalid day digits")?;

    // Four ASCII digits always fit in an i32
    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or("no such calendar date")
}

/// Parse an exact `HH:MM` 24-hour time.
fn parse_hhmm(s: &str) -> Result<NaiveTime, &'static str> {
    let bytes = s.as_bytes();

    if bytes.len() != 5 {
        return Err("expected HH:MM time");
    }

    if bytes[2] != b':' {
        return Err("expected colon at position 2");
    }

    let hour = parse_digits(&bytes[0..2]).ok_or("invalid hour digits")?;
    if hour > 23 {
        return Err("hour must be 0-23");
    }

    let minute = parse_digits(&bytes[3..5]).ok_or("invalid minute digits")?;
    if minute > 59 {
        return Err("minute must be 0-59");
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or("invalid time")
}

/// Parse a run of ASCII digits into a u32.
fn parse_digits(bytes: &[u8]) -> Option<u32> {
    bytes.iter().try_fold(0u32, |acc, &b| {
        let digit = (b as char).to_digit(10)?;
        Some(acc * 10 + digit)
    })
}
