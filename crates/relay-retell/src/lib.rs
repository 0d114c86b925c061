//! Client for the Retell AI web-call API.
//!
//! A thin typed wrapper over `POST /v2/create-web-call`:
//!
//! - [`RetellClient`] — holds the reqwest client, base URL, and credential
//! - [`WebCallResponse`] — the subset of the upstream response the relay
//!   cares about
//! - [`RetellError`] — upstream rejection vs. transport/decode failure

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

const CREATE_WEB_CALL_PATH: &str = "/v2/create-web-call";

/// Errors from a web-call creation attempt.
///
/// All variants are request-scoped; none is fatal to the caller's process.
#[derive(thiserror::Error, Debug)]
pub enum RetellError {
    /// The upstream API answered with a non-success status.
    #[error("Retell API error: {status} {reason}")]
    Api {
        status: u16,
        reason: String,
    },

    /// The request never completed (DNS, connect, or read failure).
    #[error("Retell request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream answered 2xx but the body was not the expected shape.
    #[error("Failed to decode Retell response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Fields extracted from a successful `create-web-call` response.
///
/// Unknown upstream fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebCallResponse {
    /// Token the browser client uses to join the call.
    pub access_token: String,
    /// Identifier of the created call session.
    pub call_id: String,
    /// Agent the call was created for.
    pub agent_id: String,
}

/// Client for Retell's web-call endpoint.
pub struct RetellClient {
    client: Client,
    api_base: String,
    api_key: String,
}

impl RetellClient {
    /// Creates a client for the given API base URL and bearer credential.
    pub fn new(api_base: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut api_base = api_base.into();
        while api_base.ends_with('/') {
            api_base.pop();
        }
        Self {
            client: Client::new(),
            api_base,
            api_key: api_key.into(),
        }
    }

    /// Creates a web call with the given payload, forwarded verbatim.
    ///
    /// The payload must already carry its final `agent_id`; this client
    /// does not inject defaults. No retries, transport-default timeout.
    pub async fn create_web_call(
        &self,
        payload: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<WebCallResponse, RetellError> {
        let url = format!("{}{}", self.api_base, CREATE_WEB_CALL_PATH);
        debug!(url = %url, "sending create-web-call request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RetellError::Api {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        response.json().await.map_err(RetellError::Decode)
    }
}
