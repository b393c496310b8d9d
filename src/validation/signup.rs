use crate::email::EmailValidator;
use crate::models::api::error_codes;
use crate::models::signup::SignUpRequest;
use std::sync::Arc;
use thiserror::Error;

/// First defect found in a sign-up payload. Carries the wire name of the
/// offending field; compare structurally rather than by message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignUpError {
    #[error("Missing param: {0}")]
    MissingParam(&'static str),

    #[error("Invalid param: {0}")]
    InvalidParam(&'static str),
}

impl SignUpError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingParam(field) | Self::InvalidParam(field) => field,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingParam(_) => error_codes::MISSING_PARAM,
            Self::InvalidParam(_) => error_codes::INVALID_PARAM,
        }
    }
}

/// Validates sign-up payloads. The email-format check is delegated to the
/// capability supplied at construction; this type never builds one itself.
#[derive(Clone)]
pub struct SignUpValidation {
    email_validator: Arc<dyn EmailValidator>,
}

impl SignUpValidation {
    pub fn new(email_validator: Arc<dyn EmailValidator>) -> Self {
        Self { email_validator }
    }

    /// Reports the first violation and stops there. Field order is fixed:
    /// name, email, password, passwordConfirm. An empty string counts as
    /// missing, same as an absent key. The email validator is consulted at
    /// most once, and only after every required field is present.
    pub fn check(&self, body: &SignUpRequest) -> Result<(), SignUpError> {
        for (field, value) in body.required_fields() {
            if value.is_none_or(str::is_empty) {
                return Err(SignUpError::MissingParam(field));
            }
        }

        // Presence was just checked; the fallback never fires.
        let email = body.email.as_deref().unwrap_or_default();
        if !self.email_validator.is_valid(email) {
            return Err(SignUpError::InvalidParam("email"));
        }

        Ok(())
    }
}
