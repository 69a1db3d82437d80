//! Application error type shared by every layer.
//!
//! Expected outcomes (bad input, unknown alias, alias exhaustion) are explicit
//! variants. Everything else collapses into [`AppError::Internal`] and is
//! reported as a 500 with the raw message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// JSON body returned for every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub status: u16,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// The submitted long URL is not an absolute URI.
    #[error("Invalid url entered.")]
    InvalidUrl,

    /// No mapping exists for the requested short code.
    #[error("Short url not found.")]
    NotFound,

    /// The code generator ran out of attempts.
    ///
    /// `conflicts` holds one entry per rejected candidate, for diagnostics only.
    #[error("Alias not available. Please try again later.")]
    AliasUnavailable { conflicts: Vec<String> },

    /// Store failures and anything else nobody planned for.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status declared by this failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::AliasUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns true for the failures the service raises on purpose.
    pub fn is_domain_error(&self) -> bool {
        !matches!(self, AppError::Internal(_))
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        let message = match self {
            AppError::Internal(message) => format!("Internal Server Error! {message}"),
            other => other.to_string(),
        };

        ErrorResponse {
            message,
            status: self.status_code().as_u16(),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_error_response())).into_response()
    }
}
