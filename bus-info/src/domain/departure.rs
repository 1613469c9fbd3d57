//! Raw departure records as reported by TransportAPI.

use std::fmt;

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::time::{ParseError, parse_departure_timestamp};

/// A single departure from a live stop board.
///
/// Only the fields the normalizer needs are typed. Everything else the API
/// sent (operator, aimed times, source, ...) is kept in `extra` so the
/// record can be printed back in full.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDeparture {
    /// Public line name, e.g. "25" or "N9".
    pub line: String,

    /// Destination shown on the bus.
    pub direction: String,

    /// Expected date (`YYYY-MM-DD`). TransportAPI sends null for departures
    /// without real-time data.
    #[serde(default)]
    pub expected_departure_date: Option<String>,

    /// Best estimate of the departure time (`HH:MM`).
    #[serde(default)]
    pub best_departure_estimate: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawDeparture {
    /// Label used to group departures on a board: `"{line} to {direction}"`.
    pub fn route_label(&self) -> String {
        format!("{} to {}", self.line, self.direction)
    }

    /// Time from `now` until this departure.
    ///
    /// A missing or empty date is taken to be `now`'s date. The result is
    /// negative if the estimate is already in the past.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_info::domain::RawDeparture;
    /// use chrono::{NaiveDate, TimeDelta};
    ///
    /// let departure: RawDeparture = serde_json::from_str(
    ///     r#"{"line": "25", "direction": "Oxford Circus",
    ///         "expected_departure_date": null, "best_departure_estimate": "12:03"}"#,
    /// )
    /// .unwrap();
    ///
    /// let now = NaiveDate::from_ymd_opt(2024, 3, 15)
    ///     .unwrap()
    ///     .and_hms_opt(12, 0, 0)
    ///     .unwrap();
    /// assert_eq!(departure.duration_until(now).unwrap(), TimeDelta::minutes(3));
    /// ```
    pub fn duration_until(&self, now: NaiveDateTime) -> Result<TimeDelta, ParseError> {
        let today = now.date().format("%Y-%m-%d").to_string();
        let date = match self.expected_departure_date.as_deref() {
            Some(date) if !date.is_empty() => date,
            _ => today.as_str(),
        };

        let time = self
            .best_departure_estimate
            .as_deref()
            .ok_or_else(|| ParseError::new(date, "missing best departure estimate"))?;

        let departs_at = parse_departure_timestamp(date, time)?;
        Ok(departs_at.signed_duration_since(now))
    }
}

impl fmt::Display for RawDeparture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(12, 0, 30)
            .unwrap()
    }

    fn departure(date: Value, estimate: Value) -> RawDeparture {
        serde_json::from_value(json!({
            "line": "25",
            "direction": "Oxford Circus",
            "operator": "TFL",
            "expected_departure_date": date,
            "best_departure_estimate": estimate,
        }))
        .unwrap()
    }

    #[test]
    fn route_label() {
        let d = departure(json!("2024-03-15"), json!("12:05"));
        assert_eq!(d.route_label(), "25 to Oxford Circus");
    }

    #[test]
    fn duration_with_explicit_date() {
        let d = departure(json!("2024-03-15"), json!("12:05"));
        assert_eq!(
            d.duration_until(now()).unwrap(),
            TimeDelta::minutes(4) + TimeDelta::seconds(30)
        );
    }

    #[test]
    fn null_date_uses_now() {
        let d = departure(Value::Null, json!("13:00"));
        assert_eq!(
            d.duration_until(now()).unwrap(),
            TimeDelta::minutes(59) + TimeDelta::seconds(30)
        );
    }

    #[test]
    fn empty_date_uses_now() {
        let d = departure(json!(""), json!("13:00"));
        assert_eq!(
            d.duration_until(now()).unwrap(),
            TimeDelta::minutes(59) + TimeDelta::seconds(30)
        );
    }

    #[test]
    fn absent_date_field_uses_now() {
        let d: RawDeparture = serde_json::from_value(json!({
            "line": "9",
            "direction": "Aldwych",
            "best_departure_estimate": "12:00",
        }))
        .unwrap();
        assert_eq!(d.duration_until(now()).unwrap(), TimeDelta::seconds(-30));
    }

    #[test]
    fn next_day_departure() {
        let d = departure(json!("2024-03-16"), json!("00:10"));
        assert_eq!(
            d.duration_until(now()).unwrap(),
            TimeDelta::hours(12) + TimeDelta::minutes(9) + TimeDelta::seconds(30)
        );
    }

    #[test]
    fn past_departure_is_negative() {
        let d = departure(json!("2024-03-15"), json!("11:50"));
        assert!(d.duration_until(now()).unwrap() < TimeDelta::zero());
    }

    #[test]
    fn missing_estimate_is_parse_error() {
        let d = departure(json!("2024-03-15"), Value::Null);
        let err = d.duration_until(now()).unwrap_err();
        assert!(err.to_string().contains("missing best departure estimate"));
    }

    #[test]
    fn malformed_estimate_is_parse_error() {
        let d = departure(json!("2024-03-15"), json!("12:05:00"));
        assert!(d.duration_until(now()).is_err());
    }

    #[test]
    fn extra_fields_survive_display() {
        let d = departure(json!("2024-03-15"), json!("12:05"));
        assert_eq!(d.extra.get("operator"), Some(&json!("TFL")));

        let printed: Value = serde_json::from_str(&d.to_string()).unwrap();
        assert_eq!(printed["operator"], json!("TFL"));
        assert_eq!(printed["line"], json!("25"));
        assert_eq!(printed["best_departure_estimate"], json!("12:05"));
    }
}
