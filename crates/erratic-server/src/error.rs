//! HTTP mapping for request-level errors.
//!
//! Clients only ever see a bare 500. The cause goes to the log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use erratic_core::ErraticError;

#[derive(Debug)]
pub struct HandlerError(pub ErraticError);

impl From<ErraticError> for HandlerError {
    fn from(e: ErraticError) -> Self {
        Self(e)
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        tracing::warn!(kind = self.0.kind().as_str(), error = %self.0, "request failed");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
