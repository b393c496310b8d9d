use serde::Serialize;

// Unified API response envelope
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorDetail>>,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: &str) -> Self {
        Self {
            success: true,
            code: 200,
            message: message.to_string(),
            data: Some(data),
            errors: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            code: 200,
            message: message.to_string(),
            data: None,
            errors: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn validation_error(errors: Vec<ErrorDetail>) -> Self {
        Self {
            success: false,
            code: 400,
            message: "Validation failed".to_string(),
            data: None,
            errors: Some(errors),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self {
            success: false,
            code: 400,
            message: message.to_string(),
            data: None,
            errors: Some(vec![ErrorDetail {
                field: None,
                code: "BAD_REQUEST".to_string(),
                message: message.to_string(),
            }]),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self {
            success: false,
            code: 500,
            message: message.to_string(),
            data: None,
            errors: Some(vec![ErrorDetail {
                field: None,
                code: "INTERNAL_ERROR".to_string(),
                message: message.to_string(),
            }]),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

// Machine-readable error codes carried in ErrorDetail
pub mod error_codes {
    pub const MISSING_PARAM: &str = "MISSING_PARAM";
    pub const INVALID_PARAM: &str = "INVALID_PARAM";
}
