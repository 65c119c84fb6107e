//! Custom error types and handling
//!
//! This module defines the application's error types and implements
//! conversion to HTTP responses for the Axum framework.
//!
//! Every error is resolved at the handler boundary into one of the three fixed
//! response bodies. No question route answers with a 5xx status.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{db::StoreError, handlers::questions::response::MessageResponse};

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    // Authorization errors
    #[error("Unauthorized")]
    Unauthorized,

    // Store write failures
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("No questions were removed")]
    NothingRemoved,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::Validation(_) | Self::NotFound(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthorized => StatusCode::FORBIDDEN,
            Self::Store(_) | Self::NothingRemoved => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the fixed body sent for this error
    pub fn body(&self) -> MessageResponse {
        match self {
            Self::InvalidRequest(_) | Self::Validation(_) | Self::NotFound(_) => {
                MessageResponse::invalid()
            }
            Self::Unauthorized => MessageResponse::unauthorized(),
            // Store failures only change the status; the body stays "ok".
            Self::Store(_) | Self::NothingRemoved => MessageResponse::ok(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::Store(e) => tracing::warn!(error = %e, "Store rejected the operation"),
            AppError::NothingRemoved => tracing::warn!("Nothing to remove"),
            AppError::Unauthorized => tracing::info!("Unauthorized request"),
            _ => tracing::info!(error = %self, "Invalid request"),
        }

        (status, Json(self.body())).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        AppError::InvalidRequest(err.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(err: QueryRejection) -> Self {
        AppError::InvalidRequest(err.body_text())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionId;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::InvalidRequest("missing id".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("question".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::Unauthorized.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::Store(StoreError::NotFound(QuestionId::from("1"))).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_store_failure_keeps_ok_body() {
        let err = AppError::Store(StoreError::Backend("connection reset".to_string()));
        assert_eq!(err.body(), MessageResponse::ok());
    }

    #[test]
    fn test_bodies_are_distinct() {
        let invalid = AppError::Validation("theme".to_string()).body();
        let unauthorized = AppError::Unauthorized.body();
        assert_ne!(invalid, unauthorized);
        assert_ne!(invalid, MessageResponse::ok());
    }
}
