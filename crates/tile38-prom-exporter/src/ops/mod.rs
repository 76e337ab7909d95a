//! HTTP endpoints.
//!
//! - `/metrics` : one backend round trip, rendered as Prometheus text
//! - `/healthz` : liveness (never touches the backend)
//! - `/readyz`  : readiness (503 when the backend does not answer PING)

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;

pub const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";
const PLAIN_TEXT: &str = "text/plain; charset=utf-8";

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn readyz(State(state): State<AppState>) -> Response {
    match state.source().ping().await {
        Ok(()) => (StatusCode::OK, "ready").into_response(),
        Err(e) => {
            tracing::debug!(kind = e.kind().as_str(), error = %e, "backend not ready");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                [(CONTENT_TYPE, PLAIN_TEXT)],
                e.to_string(),
            )
                .into_response()
        }
    }
}

/// A failed fetch yields 500 with the error text and no metric output at all.
pub async fn metrics(State(state): State<AppState>) -> Response {
    let doc = match state.source().fetch_status().await {
        Ok(doc) => doc,
        Err(e) => {
            tracing::warn!(kind = e.kind().as_str(), error = %e, "scrape failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(CONTENT_TYPE, PLAIN_TEXT)],
                e.to_string(),
            )
                .into_response();
        }
    };

    let body = doc.render(state.catalog(), state.namespace());
    (StatusCode::OK, [(CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)], body).into_response()
}
