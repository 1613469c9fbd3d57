//! Mock transport for running without TransportAPI access.
//!
//! Loads sample live stop responses from JSON files and serves them as if
//! they came from the API. Stops without a sample get a 404, the way
//! TransportAPI answers for unknown ATCO codes.

use std::path::Path;
use std::sync::{Arc, Mutex};

use reqwest::Url;

use super::error::ApiError;
use super::http::{HttpResponse, HttpTransport};

/// Mock transport that serves canned responses.
///
/// Responses are matched against the end of the request path, first
/// registered match wins. Every requested URL is recorded.
#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Vec<(String, HttpResponse)>,
    requests: Arc<Mutex<Vec<Url>>>,
}

impl MockTransport {
    /// A transport that answers every request with a 404.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a mock transport by loading JSON files from a directory.
    ///
    /// Expects files named `{ATCO}.json` (e.g., `490004733D.json`), each
    /// holding a live stop response.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, ApiError> {
        let data_dir = data_dir.as_ref();
        let mut mock = Self::empty();

        let entries = std::fs::read_dir(data_dir).map_err(|e| ApiError::Transport {
            status: 0,
            body: format!("Failed to read mock data directory: {e}"),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| ApiError::Transport {
                status: 0,
                body: format!("Failed to read directory entry: {e}"),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let atco = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| ApiError::Transport {
                    status: 0,
                    body: format!("Invalid filename: {path:?}"),
                })?
                .to_string();

            let json = std::fs::read_to_string(&path).map_err(|e| ApiError::Transport {
                status: 0,
                body: format!("Failed to read {path:?}: {e}"),
            })?;

            mock = mock.with_stop(&atco, HttpResponse::new(200, json));
        }

        if mock.responses.is_empty() {
            return Err(ApiError::Transport {
                status: 0,
                body: format!("No mock stop files found in {data_dir:?}"),
            });
        }

        Ok(mock)
    }

    /// Serve `response` for any request whose path ends with `path_suffix`.
    pub fn with_response(mut self, path_suffix: impl Into<String>, response: HttpResponse) -> Self {
        self.responses.push((path_suffix.into(), response));
        self
    }

    /// Serve `response` for the live departures of one stop.
    pub fn with_stop(self, atco: &str, response: HttpResponse) -> Self {
        self.with_response(format!("/stop/{atco}/live.json"), response)
    }

    /// URLs requested so far, oldest first.
    pub fn requests(&self) -> Vec<Url> {
        match self.requests.lock() {
            Ok(requests) => requests.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl HttpTransport for MockTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, ApiError> {
        match self.requests.lock() {
            Ok(mut requests) => requests.push(url.clone()),
            Err(poisoned) => poisoned.into_inner().push(url.clone()),
        }

        let response = self
            .responses
            .iter()
            .find(|(suffix, _)| url.path().ends_with(suffix.as_str()))
            .map(|(_, response)| response.clone())
            .unwrap_or_else(|| {
                HttpResponse::new(404, format!(r#"{{"error": "no mock data for {}"}}"#, url.path()))
            });

        Ok(response)
    }
}
