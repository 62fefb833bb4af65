//! HTTP client for the calculation history API.
//!
//! Wraps `GET /api/calculations`, `GET /api/calculations/latest` and
//! `POST /api/calculations` using [`reqwest`].

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sleepwise_core::sleep_cycle::NewCalculation;
use sleepwise_core::validation::ValidationError;

use crate::config::ClientConfig;

/// A history record as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: i64,
    /// Direction as stored (`wakeup` / `bedtime`).
    pub mode: String,
    /// Anchor time as `HH:mm`.
    pub target_time: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Errors from the history API client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server rejected the body with a 400 validation error.
    #[error("Rejected by server: {0}")]
    Rejected(ValidationError),

    /// Any other non-2xx status.
    #[error("History API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// HTTP client for the history endpoints of one API server.
#[derive(Clone)]
pub struct HistoryClient {
    client: reqwest::Client,
    api_url: String,
}

impl HistoryClient {
    /// Build a client with the configured base URL and request timeout.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self::with_client(client, config.api_url.clone()))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/calculations{}", self.api_url, path)
    }

    /// Append a history record.
    pub async fn create(&self, input: &NewCalculation) -> Result<HistoryEntry, ClientError> {
        let response = self.client.post(self.url("")).json(input).send().await?;
        Self::parse_response(response).await
    }

    /// The ten most recent records, newest first.
    pub async fn list_recent(&self) -> Result<Vec<HistoryEntry>, ClientError> {
        let response = self.client.get(self.url("")).send().await?;
        Self::parse_response(response).await
    }

    /// The most recent record, or `None` for an empty history.
    pub async fn latest(&self) -> Result<Option<HistoryEntry>, ClientError> {
        let response = self.client.get(self.url("/latest")).send().await?;
        Self::parse_response(response).await
    }

    // ---- private helpers ----

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        Err(classify_failure(status.as_u16(), body))
    }
}

/// Map a non-2xx response to a [`ClientError`], surfacing 400 validation
/// bodies (`{message, field}`) as [`ClientError::Rejected`].
fn classify_failure(status: u16, body: String) -> ClientError {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
        field: Option<String>,
    }

    if status == 400 {
        if let Ok(parsed) = serde_json::from_str::<ErrorBody>(&body) {
            return ClientError::Rejected(ValidationError::new(
                parsed.field.unwrap_or_default(),
                parsed.message,
            ));
        }
    }

    ClientError::ApiError { status, body }
}
