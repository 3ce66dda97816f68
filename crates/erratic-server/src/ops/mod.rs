//! Operational HTTP endpoints.
//!
//! - `/healthz`      : liveness
//! - `/metrics`      : Prometheus text format
//! - `/quitquitquit` : hard stop, no drain

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::app_state::AppState;
use crate::lifecycle::QUIT_EXIT_CODE;

pub async fn healthz() -> impl IntoResponse {
    Json(json!({ "healthy": "true" }))
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    let body = state.metrics().render();

    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}

pub async fn quitquitquit(State(state): State<AppState>) -> Response {
    tracing::warn!(code = QUIT_EXIT_CODE, "/quitquitquit called, exiting");
    state.metrics().shutdown_requests.inc(&[]);
    state.shutdown().trigger(QUIT_EXIT_CODE);

    // Only reached when the trigger does not end the process.
    StatusCode::OK.into_response()
}
