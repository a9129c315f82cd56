//! Health check endpoint

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::storage::CacheStats;
use actix_web::{HttpResponse, Result as ActixResult, web};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::borrow::Cow;
use tracing::{debug, warn};

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

/// Health status response
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    /// `healthy` or `degraded`
    pub status: Cow<'static, str>,
    pub timestamp: DateTime<Utc>,
    pub version: Cow<'static, str>,
    /// Whether the role store answered
    pub storage: bool,
    pub cache: CacheStats,
}

/// Basic health check endpoint
///
/// Returns 200 with the usual envelope when the role store is reachable, and
/// a bare 503 status body otherwise.
pub async fn health_check(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    let storage = match state.access.health_check().await {
        Ok(()) => true,
        Err(e) => {
            warn!("Role store health check failed: {}", e);
            false
        }
    };

    let health_status = HealthStatus {
        status: Cow::Borrowed(if storage { "healthy" } else { "degraded" }),
        timestamp: Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
        storage,
        cache: state.access.cache_stats(),
    };

    if storage {
        Ok(HttpResponse::Ok().json(ApiResponse::success(health_status)))
    } else {
        Ok(HttpResponse::ServiceUnavailable().json(health_status))
    }
}
