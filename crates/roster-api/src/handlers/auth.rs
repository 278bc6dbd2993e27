//! Auth handlers: register, login, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use roster_auth::jwt::IssuedToken;
use roster_entity::user::User;
use roster_service::Credentials;

use crate::dto::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(credentials): ValidatedJson<Credentials>,
) -> Result<(StatusCode, Json<ApiResponse<IssuedToken>>), ApiError> {
    let issued = state.auth_service.register(&credentials).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(issued))))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(credentials): ValidatedJson<Credentials>,
) -> Result<Json<ApiResponse<IssuedToken>>, ApiError> {
    let issued = state.auth_service.login(&credentials).await?;
    Ok(Json(ApiResponse::ok(issued)))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.auth_service.me(&auth).await?;
    Ok(Json(ApiResponse::ok(user)))
}
