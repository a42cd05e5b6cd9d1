//! Key Server API Client
//!
//! Builds and submits key-pair registrations against the key-management
//! server's REST endpoint (`POST /api/keys`). Request construction is
//! separate from execution so the populate loop can render an audit command
//! (and support dry runs) from the same payload it submits.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

use crate::keyfile::PlayerRecord;

/// Default key server base URL
pub const DEFAULT_URL: &str = "http://localhost:8080";

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Body of a key registration request.
///
/// Field names follow the server's API, not the players file: the G2
/// coordinate suffixes are renamed `_0`/`_1` → `_a`/`_b`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestPayload {
    pub eoa_address: String,
    pub g1_x: String,
    pub g1_y: String,
    pub g2_x_a: String,
    pub g2_x_b: String,
    pub g2_y_a: String,
    pub g2_y_b: String,
    pub private_key: String,
}

impl From<&PlayerRecord> for RequestPayload {
    fn from(record: &PlayerRecord) -> Self {
        let bls = &record.bls;
        Self {
            eoa_address: record.pub_address.clone(),
            g1_x: bls.g1_x.clone(),
            g1_y: bls.g1_y.clone(),
            g2_x_a: bls.g2_x_0.clone(),
            g2_x_b: bls.g2_x_1.clone(),
            g2_y_a: bls.g2_y_0.clone(),
            g2_y_b: bls.g2_y_1.clone(),
            private_key: bls.priv_key.clone(),
        }
    }
}

impl RequestPayload {
    /// Serialize to the JSON body sent over the wire.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Render a payload as the equivalent curl command, for audit output.
pub fn render_curl(base_url: &str, payload: &RequestPayload) -> Result<String, serde_json::Error> {
    Ok(format!(
        "curl -X POST {}/api/keys \\\n  -H 'Content-Type: application/json' \\\n  -d '{}'",
        base_url.trim_end_matches('/'),
        payload.to_json()?
    ))
}

/// Result of one submission: whatever the server said, success or not.
/// Non-2xx responses are data, not errors; only transport-level failures
/// surface as `ApiError`.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub status: u16,
    pub body: String,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Key submission interface
///
/// Implementations:
/// - `KeyApiClient` - live HTTP client
/// - mock (tests) - records submissions without a server
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeySubmitter: Send + Sync {
    /// Submit one key registration payload
    async fn submit_key(&self, payload: &RequestPayload) -> Result<SubmitOutcome, ApiError>;
}

/// Key server HTTP client
#[derive(Debug, Clone)]
pub struct KeyApiClient {
    client: Client,
    base_url: String,
}

impl KeyApiClient {
    /// Create a new client with custom URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client for the default local server
    pub fn new_local() -> Self {
        Self::new(DEFAULT_URL)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl KeySubmitter for KeyApiClient {
    async fn submit_key(&self, payload: &RequestPayload) -> Result<SubmitOutcome, ApiError> {
        let url = format!("{}/api/keys", self.base_url);
        let body = payload.to_json()?;

        let resp = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();

        Ok(SubmitOutcome { status, body })
    }
}
