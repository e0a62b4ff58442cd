/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::{RosterError, UserId, ValidationError};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Path parameters that could not be attributed to a single field
    #[error("Invalid path parameters: {0}")]
    InvalidPath(String),

    #[error("User was not found")]
    NotFound(UserId),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// JSON error body returned by every failing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable message
    #[schema(example = "User was not found")]
    pub error: String,

    /// Offending input field, for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "username")]
    pub field: Option<String>,

    /// Rejected input, for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "abcd")]
    pub value: Option<String>,
}

impl ErrorBody {
    fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            field: None,
            value: None,
        }
    }
}

impl From<&ValidationError> for ErrorBody {
    fn from(e: &ValidationError) -> Self {
        Self {
            error: e.message().to_string(),
            field: Some(e.field().as_str().to_string()),
            value: Some(e.value().to_string()),
        }
    }
}

impl From<RosterError> for ServerError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::Validation(e) => ServerError::Validation(e),
            RosterError::NotFound(id) => ServerError::NotFound(id),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ServerError::Validation(ref e) => {
                tracing::debug!(field = %e.field(), value = e.value(), "rejected input");
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorBody::from(e))
            }
            ServerError::InvalidPath(ref detail) => {
                tracing::debug!("rejected path: {}", detail);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorBody::message("Invalid path parameters"),
                )
            }
            ServerError::NotFound(ref id) => {
                tracing::debug!(user_id = %id, "user not found");
                (StatusCode::NOT_FOUND, ErrorBody::message(self.to_string()))
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::message("Configuration error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
