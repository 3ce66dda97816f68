//! Rate endpoints and the greeting.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use erratic_core::decision::should_fail;
use erratic_core::ErraticError;

use crate::app_state::AppState;
use crate::error::HandlerError;

/// `GET /`: 200 greeting, or an empty 500 when the coin flip says fail.
pub async fn greet(State(app): State<AppState>) -> Result<Response, HandlerError> {
    let rate = app.store().get_rate().await?;
    let sample = app.sampler().sample();

    if should_fail(rate, sample) {
        tracing::debug!(rate, sample, "injected failure");
        return Ok(StatusCode::INTERNAL_SERVER_ERROR.into_response());
    }

    Ok(Json(json!({ "Hello": "World" })).into_response())
}

/// `GET /errors`
pub async fn get_rate(State(app): State<AppState>) -> Result<Response, HandlerError> {
    let rate = app.store().get_rate().await?;
    Ok(Json(json!({ "rate": rate })).into_response())
}

/// `GET /errors/:percent`
///
/// The stored value depends on the configured `RateUnit`; see
/// `erratic_core::unit`. A segment that does not decode (e.g. invalid
/// UTF-8) is a parse error like any other unparsable percent.
pub async fn set_rate(
    State(app): State<AppState>,
    percent: Result<Path<String>, PathRejection>,
) -> Result<Response, HandlerError> {
    let Path(percent) =
        percent.map_err(|e| ErraticError::Parse(format!("invalid percent segment: {e}")))?;
    let rate = app.unit().rate_from_percent(&percent)?;
    app.store().set_rate(rate).await?;

    tracing::info!(%percent, rate, unit = app.unit().as_str(), "error rate updated");
    Ok(Json(json!({ "status": "success" })).into_response())
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "404: This page could not be found" })),
    )
        .into_response()
}
