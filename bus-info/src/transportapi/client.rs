//! TransportAPI HTTP client.
//!
//! Builds signed request URLs (app id and key as query parameters), issues
//! them through an [`HttpTransport`] and parses the JSON body.

use std::time::Duration;

use reqwest::Url;
use serde_json::Value;
use tracing::{debug, warn};

use super::error::ApiError;
use super::http::{HttpTransport, ReqwestTransport};

/// Default base URL for TransportAPI v3.
const DEFAULT_BASE_URL: &str = "https://transportapi.com/v3/";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Query parameter names that carry the app credentials.
const APP_ID_PARAM: &str = "app_id";
const APP_KEY_PARAM: &str = "app_key";

/// Configuration for the TransportAPI client.
#[derive(Clone)]
pub struct ClientConfig {
    /// Application id
    pub app_id: String,
    /// Application key
    pub app_key: String,
    /// Base URL that request paths are appended to, verbatim
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Create a new config with the given credentials.
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_key: app_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("app_id", &self.app_id)
            .field("app_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// TransportAPI client.
///
/// Generic over the HTTP transport so lookups can be exercised against
/// canned responses; production code uses [`ReqwestTransport`].
#[derive(Clone)]
pub struct TransportApiClient<T = ReqwestTransport> {
    transport: T,
    app_id: String,
    app_key: String,
    base_url: String,
}

impl TransportApiClient<ReqwestTransport> {
    /// Create a client that talks to TransportAPI over HTTP.
    ///
    /// Fails with [`ApiError::MissingCredentials`] before any HTTP client is
    /// built if either credential is empty.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        check_credentials(&config)?;
        let transport = ReqwestTransport::new(Duration::from_secs(config.timeout_secs))?;
        Self::with_transport(config, transport)
    }
}

impl<T: HttpTransport> TransportApiClient<T> {
    /// Create a client over an arbitrary transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self, ApiError> {
        check_credentials(&config)?;

        Ok(Self {
            transport,
            app_id: config.app_id,
            app_key: config.app_key,
            base_url: config.base_url,
        })
    }

    /// The transport this client sends requests through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build the full request URL for `path`.
    ///
    /// `path` is appended to the base URL as-is, so it must agree with the
    /// base's trailing-slash convention. The credentials go first in the
    /// query string; an extra parameter with the same name replaces the
    /// credential value.
    pub fn request_url(&self, path: &str, extra_params: &[(&str, &str)]) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
            url: raw.clone(),
            message: e.to_string(),
        })?;

        let mut params: Vec<(&str, &str)> = vec![
            (APP_ID_PARAM, self.app_id.as_str()),
            (APP_KEY_PARAM, self.app_key.as_str()),
        ];

        for &(name, value) in extra_params {
            match params.iter_mut().find(|(existing, _)| *existing == name) {
                Some(slot) => {
                    if name == APP_ID_PARAM || name == APP_KEY_PARAM {
                        warn!(param = name, "extra query parameter overrides app credential");
                    }
                    slot.1 = value;
                }
                None => params.push((name, value)),
            }
        }

        url.query_pairs_mut().clear().extend_pairs(params);
        Ok(url)
    }

    /// Call a TransportAPI endpoint and parse the JSON response.
    ///
    /// # Arguments
    ///
    /// * `path` - Path relative to the base URL, e.g. `uk/bus/stop/490004733D/live.json`
    /// * `extra_params` - Query parameters other than the credentials
    pub async fn call(&self, path: &str, extra_params: &[(&str, &str)]) -> Result<Value, ApiError> {
        let url = self.request_url(path, extra_params)?;

        // The full URL carries the app key, so only the path is logged
        debug!(path, "calling TransportAPI");

        let response = self.transport.get(&url).await?;

        if !response.is_success() {
            debug!(path, status = response.status, "TransportAPI returned an error");
            return Err(ApiError::Transport {
                status: response.status,
                body: response.body,
            });
        }

        match serde_json::from_str(&response.body) {
            Ok(value) => Ok(value),
            Err(e) => Err(ApiError::MalformedResponse {
                message: e.to_string(),
                body: response.body,
            }),
        }
    }
}

fn check_credentials(config: &ClientConfig) -> Result<(), ApiError> {
    if config.app_id.is_empty() || config.app_key.is_empty() {
        return Err(ApiError::MissingCredentials);
    }
    Ok(())
}
