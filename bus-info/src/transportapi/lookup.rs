//! Stop lookups built on the raw API call.
//!
//! Two entry points read the same live endpoint differently:
//! [`TransportApiClient::live_departures`] merges every sub-group into a
//! sorted board, [`TransportApiClient::next_arrivals`] returns the first
//! records of the flat "all" group untouched.

use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::domain::{AtcoCode, DepartureBoard, RawDeparture};

use super::client::TransportApiClient;
use super::error::ApiError;
use super::http::HttpTransport;
use super::types::{AllDeparturesResponse, LiveStopResponse};

/// Default number of records returned by `next_arrivals`.
pub const DEFAULT_NEXT_ARRIVALS: usize = 10;

/// Result of a live departures lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveDepartures {
    /// Display name of the stop.
    pub stop_name: String,
    pub board: DepartureBoard,
}

fn live_path(atco: &AtcoCode) -> String {
    format!("uk/bus/stop/{atco}/live.json")
}

/// Decode a JSON value into a response DTO, keeping the JSON text on failure.
fn decode<D: DeserializeOwned>(value: Value) -> Result<D, ApiError> {
    D::deserialize(&value).map_err(|e| ApiError::MalformedResponse {
        message: e.to_string(),
        body: value.to_string(),
    })
}

impl<T: HttpTransport> TransportApiClient<T> {
    /// Live departures at a stop, as a board of routes.
    ///
    /// Departures from every sub-group are merged, labelled
    /// `"{line} to {direction}"` and measured against `now`.
    ///
    /// # Errors
    ///
    /// * [`ApiError::UnknownStop`] if TransportAPI answers 404
    /// * [`ApiError::Parse`] if any departure time is malformed
    /// * any error from [`TransportApiClient::call`]
    pub async fn live_departures(
        &self,
        atco: &AtcoCode,
        now: NaiveDateTime,
    ) -> Result<LiveDepartures, ApiError> {
        let value = match self.call(&live_path(atco), &[]).await {
            Err(ApiError::Transport { status: 404, .. }) => {
                return Err(ApiError::UnknownStop {
                    atco: atco.to_string(),
                });
            }
            other => other?,
        };

        let response: LiveStopResponse = decode(value)?;
        let departures = response.departures.iter().flat_map(|(_, group)| group);
        let board = DepartureBoard::from_departures(departures, now)?;

        debug!(
            atco = %atco,
            groups = response.departures.len(),
            routes = board.len(),
            "built departure board"
        );

        Ok(LiveDepartures {
            stop_name: response.name,
            board,
        })
    }

    /// The next `n` departures at a stop from the "all" group, in API order.
    ///
    /// Records are returned as the API sent them. A 404 is not treated
    /// specially here and surfaces as [`ApiError::Transport`].
    pub async fn next_arrivals(
        &self,
        atco: &AtcoCode,
        n: usize,
    ) -> Result<Vec<RawDeparture>, ApiError> {
        // Differs from the live_departures request on purpose: the "all"
        // group is only populated when grouping is switched off
        let value = self.call(&live_path(atco), &[("group", "no")]).await?;

        let mut arrivals = decode::<AllDeparturesResponse>(value)?.into_all();
        arrivals.truncate(n);

        debug!(atco = %atco, count = arrivals.len(), "fetched next arrivals");
        Ok(arrivals)
    }
}
