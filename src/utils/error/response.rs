//! HTTP response handling for errors

use super::types::AccessError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for AccessError {
    fn status_code(&self) -> StatusCode {
        match self {
            AccessError::Authorization(_) => StatusCode::FORBIDDEN,
            AccessError::Validation(_) | AccessError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AccessError::NotFound(_) => StatusCode::NOT_FOUND,
            AccessError::Conflict(_) => StatusCode::CONFLICT,
            AccessError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AccessError::Config(_)
            | AccessError::Database(_)
            | AccessError::Serialization(_)
            | AccessError::Yaml(_)
            | AccessError::Io(_)
            | AccessError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error_code, message) = match self {
            AccessError::Config(_) => ("CONFIG_ERROR", self.to_string()),
            AccessError::Database(_) => {
                ("DATABASE_ERROR", "Database operation failed".to_string())
            }
            AccessError::Authorization(_) => ("AUTHORIZATION_ERROR", self.to_string()),
            AccessError::Validation(_) => ("VALIDATION_ERROR", self.to_string()),
            AccessError::NotFound(_) => ("NOT_FOUND", self.to_string()),
            AccessError::Conflict(_) => ("CONFLICT", self.to_string()),
            AccessError::BadRequest(_) => ("BAD_REQUEST", self.to_string()),
            AccessError::Unavailable(_) => ("SERVICE_UNAVAILABLE", self.to_string()),
            _ => (
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}
