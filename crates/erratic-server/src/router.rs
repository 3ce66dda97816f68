//! Axum router wiring.

use axum::{
    middleware,
    routing::{any, get},
    Router,
};

use crate::{app_state::AppState, handlers, obs, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::greet))
        .route("/errors", get(handlers::get_rate))
        .route("/errors/:percent", get(handlers::set_rate))
        .route("/healthz", get(ops::healthz))
        .route("/quitquitquit", get(ops::quitquitquit))
        .route("/metrics", any(ops::metrics))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn_with_state(state.clone(), obs::track_requests))
        .with_state(state)
}
