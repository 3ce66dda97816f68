use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

/// Route label for requests that matched no route.
const UNMATCHED: &str = "unmatched";

/// Count, time and gauge every request through the router.
pub async fn track_requests(State(app): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().as_str().to_owned();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED.to_owned());

    let metrics = app.metrics();
    metrics.http_in_flight.inc(&[]);
    let start = Instant::now();

    let resp = next.run(req).await;

    let elapsed = start.elapsed();
    metrics.http_in_flight.dec(&[]);
    let status = resp.status();
    metrics.http_requests.inc(&[
        ("method", &method),
        ("route", &route),
        ("status", status.as_str()),
    ]);
    metrics
        .http_request_duration
        .observe(&[("method", &method), ("route", &route)], elapsed);

    let micros = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
    tracing::debug!(%method, %route, status = status.as_u16(), micros, "request served");
    resp
}
