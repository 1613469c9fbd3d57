//! Plain-text output for the command-line tools.

use std::io::{self, Write};

use chrono::TimeDelta;

use crate::domain::{AtcoCode, RawDeparture, format_duration};
use crate::transportapi::LiveDepartures;

/// Comma-separated human durations, e.g. `"3 min, 1 hr 5 min"`.
pub fn format_durations(durations: &[TimeDelta]) -> String {
    durations
        .iter()
        .map(|d| format_duration(*d))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Write one stop's board:
///
/// ```text
/// Trafalgar Square (490004733D):
/// - 25 to Oxford Circus: 3 min, 12 min
/// - 9 to Aldwych: 1 hr 30 min
///
/// ```
pub fn write_live_departures(
    out: &mut impl Write,
    atco: &AtcoCode,
    live: &LiveDepartures,
) -> io::Result<()> {
    writeln!(out, "{} ({}):", live.stop_name, atco)?;
    for route in live.board.routes() {
        writeln!(out, "- {}: {}", route.label, format_durations(&route.durations))?;
    }
    writeln!(out)
}

/// Write the raw arrival records for a stop, one JSON object per line.
pub fn write_next_arrivals(
    out: &mut impl Write,
    atco: &AtcoCode,
    arrivals: &[RawDeparture],
) -> io::Result<()> {
    writeln!(out, "Next arrivals for bus stop {atco}:")?;
    for arrival in arrivals {
        writeln!(out, "{arrival}")?;
    }
    Ok(())
}
