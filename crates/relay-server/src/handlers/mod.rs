//! HTTP route handlers for the relay server.

pub mod call;

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::{SecondsFormat, Utc};

use crate::dto::HealthResponse;
use crate::ServerState;

/// Health check endpoint. Always succeeds.
pub async fn health(State(state): State<Arc<ServerState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Retell relay server is running!".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        env_check: if state.config.has_api_key() {
            "API key found"
        } else {
            "API key missing"
        },
    })
}
