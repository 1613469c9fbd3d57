//! Domain types for live bus departures.
//!
//! Raw departure records are validated here and normalized into
//! departure boards. Nothing in this module performs I/O; the current time
//! is always passed in by the caller.

mod board;
mod departure;
mod format;
mod stop;
mod time;

pub use board::{DepartureBoard, Route};
pub use departure::RawDeparture;
pub use format::format_duration;
pub use stop::{AtcoCode, InvalidAtco};
pub use time::{ParseError, parse_departure_timestamp};
