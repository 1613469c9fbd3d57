//! TransportAPI client.
//!
//! This module provides an HTTP client for TransportAPI v3, which serves
//! live UK bus departures per stop.
//!
//! Key characteristics of TransportAPI:
//! - Authentication is an `app_id` / `app_key` pair sent as query parameters
//! - Departures are nested under sub-groups whose keys depend on the `group`
//!   parameter (route by default, "all" when grouping is off)
//! - Times are `HH:MM` strings in UK local time, with a separate date field
//!   that is null when the API has no real-time data

mod client;
mod error;
mod http;
mod lookup;
mod mock;
mod types;

pub use client::{ClientConfig, TransportApiClient};
pub use error::ApiError;
pub use http::{HttpResponse, HttpTransport, ReqwestTransport};
pub use lookup::{DEFAULT_NEXT_ARRIVALS, LiveDepartures};
pub use mock::MockTransport;
pub use types::{AllDepartures, AllDeparturesResponse, LiveStopResponse};
