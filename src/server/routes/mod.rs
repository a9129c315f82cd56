//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod health;
pub mod roles;
pub mod users;

use crate::utils::error::{AccessError, Result};
use actix_web::{HttpRequest, web};

/// Header naming the user on whose behalf a request is made
pub const ACTOR_HEADER: &str = "X-Actor-Id";

/// Standard API response structure
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data (if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T>
where
    T: serde::Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
        }
    }
}

/// Configure all routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes).service(
        web::scope("/api/v1")
            .configure(roles::configure_routes)
            .configure(users::configure_routes),
    );
}

/// JSON extractor settings; malformed bodies become 400 error envelopes
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| AccessError::bad_request(err.to_string()).into())
}

/// Acting user id from the `X-Actor-Id` header
pub(crate) fn actor_id(req: &HttpRequest) -> Result<String> {
    req.headers()
        .get(ACTOR_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AccessError::authorization(format!("Missing {} header", ACTOR_HEADER)))
}
