//! HTTP transport used by the TransportAPI client.

use std::future::Future;
use std::time::Duration;

use reqwest::Url;

use super::error::ApiError;

/// Status and body of a completed HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can perform a GET request.
///
/// Non-success statuses are returned as a normal `HttpResponse`; only
/// failures to get a response at all are errors.
pub trait HttpTransport {
    fn get(&self, url: &Url) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send;
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }
}

impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, ApiError> {
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}
