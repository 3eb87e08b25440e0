use std::sync::Arc;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use quill_core::{
    contracts::GenerationRequest,
    GenerativeUpstream,
    QuillError,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

pub mod config;

use config::{ProxyConfig, API_KEY_VAR};

pub struct AppState {
    /// `None` when the credential was missing at startup.
    pub upstream: Option<Arc<dyn GenerativeUpstream>>,
}

impl AppState {
    pub fn from_config(config: &ProxyConfig) -> Self {
        Self {
            upstream: config.upstream(),
        }
    }
}

pub fn create_app(state: Arc<AppState>, proxy_path: &str) -> Router {
    Router::new()
        .route(proxy_path, post(handle_generate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn handle_generate(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Response {
    let Some(upstream) = state.upstream.clone() else {
        let err = QuillError::MissingCredential(API_KEY_VAR);
        error!("Refusing request: {}", err);
        return (StatusCode::INTERNAL_SERVER_ERROR, format!("Server misconfig: {}", err)).into_response();
    };

    let request: GenerationRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("Malformed request body: {}", e);
            return (StatusCode::BAD_REQUEST, format!("Invalid request body: {}", e)).into_response();
        }
    };

    match upstream.generate_content(&request).await {
        Ok(envelope) => (StatusCode::OK, Json(envelope)).into_response(),
        Err(e) => {
            error!("Upstream error: {}", e);
            (StatusCode::BAD_GATEWAY, format!("Upstream request failed: {}", e)).into_response()
        }
    }
}
