//! Errors returned by request handlers.
//!
//! # Design
//! Handlers return `Result<_, AppError>` and use `?` on store calls; the
//! `IntoResponse` impl is the only place that knows which status each failure
//! maps to.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use todo_core::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// `/examples/{name}` with a name that has no page.
    #[error("no example named {0:?}")]
    UnknownExample(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Store(StoreError::NotFound(_)) | AppError::UnknownExample(_) => {
                StatusCode::NOT_FOUND
            }
            AppError::Store(StoreError::EmptyName) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(%status, error = %self, "request failed");
        (status, self.to_string()).into_response()
    }
}
