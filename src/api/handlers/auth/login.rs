//! Admin login.
//!
//! Unknown usernames and wrong passwords produce byte-identical 401 responses
//! so the endpoint cannot be used to enumerate accounts.

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::info;

use crate::api::error::{ApiError, INVALID_CREDENTIALS_MESSAGE};

use super::{
    cookie::session_cookie,
    state::AuthState,
    storage::lookup_admin_by_username,
    types::{AdminUser, LoginRequest, LoginResponse, MessageResponse},
};

#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, session cookie attached", body = LoginResponse),
        (status = 400, description = "Missing username or password", body = MessageResponse),
        (status = 401, description = "Invalid credentials", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    ),
    tag = "auth"
)]
pub async fn login(
    Extension(pool): Extension<PgPool>,
    Extension(auth_state): Extension<Arc<AuthState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Ok(Json(payload)) = payload else {
        return Err(ApiError::Validation("Invalid request body".to_string()));
    };

    if payload.username.is_empty() || payload.password.is_empty() {
        return Err(ApiError::Validation(
            "Username and password are required".to_string(),
        ));
    }

    let Some(admin) = lookup_admin_by_username(&pool, &payload.username).await? else {
        return Err(ApiError::Auth(INVALID_CREDENTIALS_MESSAGE));
    };

    let password_valid = bcrypt::verify(&payload.password, &admin.password_hash)
        .map_err(|err| ApiError::Internal(err.into()))?;
    if !password_valid {
        return Err(ApiError::Auth(INVALID_CREDENTIALS_MESSAGE));
    }

    let token = auth_state.codec().issue(admin.id, &admin.username)?;
    let cookie = session_cookie(auth_state.config(), &token)
        .map_err(|err| ApiError::Internal(err.into()))?;

    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie);

    info!("Admin '{}' logged in", admin.username);

    let response = LoginResponse {
        message: "Login successful".to_string(),
        user: AdminUser {
            id: admin.id.to_string(),
            username: admin.username,
        },
    };

    Ok((StatusCode::OK, headers, Json(response)))
}
