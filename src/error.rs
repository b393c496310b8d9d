use crate::models::api::{ApiResponse, ErrorDetail};
use crate::validation::signup::SignUpError;
use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    SignUp(#[from] SignUpError),

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, response) = match self {
            AppError::SignUp(ref e) => (
                StatusCode::BAD_REQUEST,
                ApiResponse::<()>::validation_error(vec![ErrorDetail {
                    field: Some(e.field().to_string()),
                    code: e.code().to_string(),
                    message: e.to_string(),
                }]),
            ),
            AppError::Validation { ref message } => (
                StatusCode::BAD_REQUEST,
                ApiResponse::<()>::bad_request(message),
            ),
            AppError::Config(ref e) => {
                tracing::error!("Configuration error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::<()>::internal_error("Configuration error"),
                )
            }
        };

        (status, Json(response)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
