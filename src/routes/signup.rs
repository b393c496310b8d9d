use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::{
    AppState,
    error::AppError,
    models::{
        api::ApiResponse,
        signup::{SignUpAccepted, SignUpRequest},
    },
};

/// POST /auth/sign-up
///
/// Validates the payload and reports the first violation as a 400. Account
/// creation itself happens downstream and never runs when validation fails.
pub async fn sign_up(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SignUpRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = payload.map_err(|_| AppError::validation("Invalid JSON format"))?;

    state.signup.check(&body)?;

    let email = body.email.unwrap_or_default();
    tracing::debug!("sign-up payload validated");

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            SignUpAccepted { email },
            "Sign-up accepted",
        )),
    ))
}
