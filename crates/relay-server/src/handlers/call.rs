//! Web-call creation: the relay's single forwarding route.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::{Map, Value};
use tracing::{error, info};

use crate::dto::CallCreated;
use crate::error::AppError;
use crate::ServerState;

/// `POST /create-web-call`.
///
/// Accepts an arbitrary JSON object (an empty body counts as `{}`),
/// injects the default `agent_id` unless the caller set one, and relays
/// the upstream response. Each call creates a new upstream session.
pub async fn create_web_call(
    State(state): State<Arc<ServerState>>,
    body: Bytes,
) -> Result<Json<CallCreated>, AppError> {
    info!("Creating web call...");

    let mut payload = parse_body(&body)?;
    payload
        .entry("agent_id".to_string())
        .or_insert_with(|| Value::String(state.config.default_agent_id.clone()));

    match state.retell.create_web_call(&payload).await {
        Ok(call) => {
            info!(call_id = %call.call_id, "Web call created successfully");
            Ok(Json(CallCreated {
                success: true,
                access_token: call.access_token,
                call_id: call.call_id,
                agent_id: call.agent_id,
            }))
        }
        Err(err) => {
            error!(error = %err, "Error creating web call");
            Err(err.into())
        }
    }
}

/// No schema enforcement: any JSON object passes through untouched.
fn parse_body(body: &Bytes) -> Result<Map<String, Value>, AppError> {
    if body.is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(AppError::BadRequest("request body must be a JSON object".to_string())),
        Err(err) => Err(AppError::BadRequest(format!("invalid JSON body: {err}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_parses_to_empty_object() {
        let map = parse_body(&Bytes::new()).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn non_object_json_is_rejected() {
        let err = parse_body(&Bytes::from_static(b"[1,2,3]")).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = parse_body(&Bytes::from_static(b"{not json")).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
