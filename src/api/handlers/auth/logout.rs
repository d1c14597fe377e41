//! Admin logout.

use axum::{
    extract::Extension,
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{cookie::clear_session_cookie, state::AuthState, types::MessageResponse};

#[utoipa::path(
    post,
    path = "/api/admin/logout",
    responses(
        (status = 200, description = "Session cookie cleared", body = MessageResponse)
    ),
    tag = "auth"
)]
pub async fn logout(Extension(auth_state): Extension<Arc<AuthState>>) -> impl IntoResponse {
    // The incoming token is never inspected; clearing is unconditional so the
    // endpoint stays idempotent with or without an active session.
    let mut headers = HeaderMap::new();
    if let Ok(cookie) = clear_session_cookie(auth_state.config()) {
        headers.insert(SET_COOKIE, cookie);
    }

    let response = MessageResponse {
        message: "Logout successful".to_string(),
    };

    (StatusCode::OK, headers, Json(response))
}
