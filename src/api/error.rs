use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{ErrorResponse, json_response};

/// Errors raised while turning CLI flags or API payloads into engine inputs.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{field} {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid API JSON payload: {0}")]
    InvalidPayload(String),

    #[error(transparent)]
    Cli(#[from] clap::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        ApiError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidInput { .. } | ApiError::InvalidPayload(_) | ApiError::Cli(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Serialization(_) => {
                tracing::error!(error = %self, "failed to serialize response");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        json_response(
            status,
            ErrorResponse {
                error: self.to_string(),
            },
        )
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
