//! Role catalogue and permission check endpoints

use crate::auth::rbac::{AccessibleModules, Permission, Role};
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::AccessError;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Configure role routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/roles", web::get().to(list_roles))
        .route("/roles/{role}/permissions", web::get().to(role_permissions))
        .route("/roles/{role}/modules", web::get().to(role_modules))
        .route("/permissions/check", web::post().to(check_permissions));
}

/// How a list of permissions is combined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckMode {
    /// At least one permission
    Any,
    /// Every permission
    #[default]
    All,
}

/// Permission check request
///
/// Tokens are taken as strings so unknown roles or permissions are answered
/// with `false` instead of a parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckRequest {
    pub role: String,
    pub permissions: Vec<String>,
    #[serde(default)]
    pub mode: CheckMode,
}

/// Per-token result
#[derive(Debug, Clone, Serialize)]
pub struct TokenResult {
    pub permission: String,
    pub granted: bool,
}

/// Permission check response
#[derive(Debug, Clone, Serialize)]
pub struct CheckResponse {
    pub role: String,
    pub mode: CheckMode,
    pub granted: bool,
    pub results: Vec<TokenResult>,
}

#[derive(Debug, Clone, Serialize)]
struct RolePermissions {
    role: Role,
    permissions: Vec<Permission>,
    groups: BTreeMap<&'static str, Vec<Permission>>,
}

#[derive(Debug, Clone, Serialize)]
struct RoleModules {
    role: Role,
    modules: AccessibleModules,
}

fn parse_role(token: &str) -> Result<Role, AccessError> {
    token
        .parse()
        .map_err(|_| AccessError::not_found(format!("Unknown role: {}", token)))
}

/// List every role with its permissions
async fn list_roles(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(state.registry().list_roles())))
}

/// Permissions of one role, flat and grouped by prefix
async fn role_permissions(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let role = parse_role(&path)?;
    let registry = state.registry();

    let body = RolePermissions {
        role,
        permissions: registry.permissions_for(role).to_vec(),
        groups: registry.grouped_permissions(role),
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(body)))
}

/// Module visibility of one role
async fn role_modules(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let role = parse_role(&path)?;
    let body = RoleModules {
        role,
        modules: state.registry().accessible_modules(role),
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(body)))
}

/// Check a role against a list of permission tokens
async fn check_permissions(
    state: web::Data<AppState>,
    request: web::Json<CheckRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    // An empty requirement is rejected here rather than answered vacuously.
    if request.permissions.is_empty() {
        return Err(AccessError::bad_request("At least one permission is required").into());
    }

    let registry = state.registry();
    let results: Vec<TokenResult> = request
        .permissions
        .iter()
        .map(|permission| TokenResult {
            granted: registry.has_permission_token(&request.role, permission),
            permission: permission.clone(),
        })
        .collect();

    let granted = match request.mode {
        CheckMode::Any => results.iter().any(|r| r.granted),
        CheckMode::All => results.iter().all(|r| r.granted),
    };
    debug!(
        "Permission check for {} ({:?}): {}",
        request.role, request.mode, granted
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(CheckResponse {
        role: request.role,
        mode: request.mode,
        granted,
        results,
    })))
}
