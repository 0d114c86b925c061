//! Axum router and shared state for the Retell relay.
//!
//! The relay exposes two routes plus CORS preflight handling:
//!
//! - `GET /` — health probe reporting credential presence
//! - `POST /create-web-call` — forwards the body upstream with the
//!   server-held credential and a default `agent_id`
//!
//! [`app`] builds the full router so the binary and the integration
//! tests drive the same service.

pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::body::Body;
use axum::http::{header, HeaderValue, Method, Request, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use relay_config::{Config, CorsPolicy};
use relay_retell::RetellClient;

/// Shared server state accessible from all handlers.
pub struct ServerState {
    pub config: Config,
    pub retell: RetellClient,
}

impl ServerState {
    /// Builds the state from configuration, constructing the upstream client.
    pub fn new(config: Config) -> Self {
        let retell = RetellClient::new(config.api_base.clone(), config.api_key.clone());
        Self { config, retell }
    }
}

/// Builds the relay router with CORS and request tracing applied.
pub fn app(state: Arc<ServerState>) -> anyhow::Result<Router> {
    let cors = cors_layer(&state.config.cors)?;

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let logged_routes = Router::new()
        .route("/create-web-call", post(handlers::call::create_web_call))
        .layer(trace_layer);

    // The CORS layer wraps the whole router, so OPTIONS preflight on any
    // path is answered before routing.
    Ok(Router::new()
        .merge(logged_routes)
        .route("/", get(handlers::health))
        .layer(cors)
        .with_state(state))
}

/// Maps the configured policy onto a tower-http CORS layer.
///
/// tower-http rejects a literal `*` origin combined with credentials, so
/// the permit-all variant mirrors the requesting origin instead.
fn cors_layer(policy: &CorsPolicy) -> anyhow::Result<CorsLayer> {
    let allow_origin = match policy {
        CorsPolicy::AllowList(origins) => {
            let values = origins
                .iter()
                .map(|o| {
                    o.parse::<HeaderValue>()
                        .with_context(|| format!("invalid CORS origin '{o}'"))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;
            AllowOrigin::list(values)
        }
        CorsPolicy::Any => AllowOrigin::mirror_request(),
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}
