//! Response shapes for the relay's HTTP surface.

use serde::Serialize;

/// Body of `GET /`.
#[derive(Serialize)]
pub struct HealthResponse {
    pub message: String,
    /// ISO-8601 UTC timestamp taken at response time.
    pub timestamp: String,
    /// `"API key found"` or `"API key missing"`; never the key itself.
    pub env_check: &'static str,
}

/// Success body of `POST /create-web-call`.
#[derive(Serialize)]
pub struct CallCreated {
    pub success: bool,
    pub access_token: String,
    pub call_id: String,
    pub agent_id: String,
}
