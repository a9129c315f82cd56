//! User registration and role assignment endpoints

use crate::core::models::{FirstUserMarker, UserAccount};
use crate::server::routes::{ApiResponse, actor_id};
use crate::server::state::AppState;
use crate::utils::error::AccessError;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Configure user routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/users", web::post().to(register))
        .route("/users/{id}/login", web::post().to(first_login))
        .route("/users/{id}/role", web::get().to(get_role))
        .route("/users/{id}/role", web::put().to(set_role))
        .route("/users/{id}/access", web::get().to(user_access))
        .route("/role-assignments", web::get().to(list_assignments))
        .route("/system/first-user", web::get().to(first_user));
}

/// Registration request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Role change request
#[derive(Debug, Clone, Deserialize)]
pub struct SetRoleRequest {
    pub role: String,
}

#[derive(Debug, Clone, Serialize)]
struct FirstUserStatus {
    claimed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    marker: Option<FirstUserMarker>,
}

/// Register an account; the first one ever becomes admin
async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    info!("User registration attempt: {}", request.id);

    let account = UserAccount::new(request.id, request.email, request.display_name);
    let registration = state.access.register_user(account).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(registration)))
}

/// First-login role resolution
async fn first_login(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let outcome = state.access.on_first_login(&path).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(outcome)))
}

async fn get_role(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let record = state
        .access
        .get_role_record(&path)
        .await?
        .ok_or_else(|| AccessError::not_found(format!("No role assigned to {}", path)))?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(record)))
}

/// Change a user's role on behalf of the `X-Actor-Id` user
async fn set_role(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
    request: web::Json<SetRoleRequest>,
) -> ActixResult<HttpResponse> {
    let actor = actor_id(&req)?;
    let record = state
        .access
        .assign_role(&actor, &path, &request.role)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(record)))
}

async fn user_access(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let access = state.access.user_access(&path).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(access)))
}

/// All role records, for actors holding `user_view`
async fn list_assignments(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> ActixResult<HttpResponse> {
    let actor = actor_id(&req)?;
    let records = state.access.list_role_records(&actor).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(records)))
}

async fn first_user(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let marker = state.access.first_user_marker().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(FirstUserStatus {
        claimed: marker.is_some(),
        marker,
    })))
}
