//! Session introspection endpoints.
//!
//! Two tiers, mirroring the page gate / route guard split: `/api/admin/me`
//! answers from cookie presence alone and exists so the UI can toggle its
//! logout button without a verification round-trip — it must never be used
//! for authorization. `/api/admin/status` performs the full signature and
//! expiry check.

use axum::{
    extract::Extension,
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::warn;

use super::{
    cookie::{clear_session_cookie, session_token},
    state::AuthState,
    types::{AdminUser, ProbeResponse, StatusResponse},
};

#[utoipa::path(
    get,
    path = "/api/admin/me",
    responses(
        (status = 200, description = "Whether a session cookie is present (not verified)", body = ProbeResponse)
    ),
    tag = "auth"
)]
pub async fn me(headers: HeaderMap) -> impl IntoResponse {
    Json(ProbeResponse {
        is_logged_in: session_token(&headers).is_some(),
    })
}

#[utoipa::path(
    get,
    path = "/api/admin/status",
    responses(
        (status = 200, description = "Session token verified", body = StatusResponse),
        (status = 401, description = "Missing, invalid, or expired session token", body = StatusResponse)
    ),
    tag = "auth"
)]
pub async fn status(
    headers: HeaderMap,
    Extension(auth_state): Extension<Arc<AuthState>>,
) -> Response {
    let Some(token) = session_token(&headers) else {
        let response = StatusResponse {
            is_authenticated: false,
            user: None,
            message: Some("Not authenticated".to_string()),
        };
        return (StatusCode::UNAUTHORIZED, Json(response)).into_response();
    };

    match auth_state.codec().verify(&token) {
        Ok(claims) => {
            let response = StatusResponse {
                is_authenticated: true,
                user: Some(AdminUser {
                    id: claims.sub,
                    username: claims.username,
                }),
                message: None,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(rejection) => {
            // The reason stays server-side; the client only learns "invalid".
            warn!("Status check rejected session token: {rejection}");

            // Clear the bad cookie to force a fresh login attempt.
            let mut response_headers = HeaderMap::new();
            if let Ok(cookie) = clear_session_cookie(auth_state.config()) {
                response_headers.insert(SET_COOKIE, cookie);
            }

            let response = StatusResponse {
                is_authenticated: false,
                user: None,
                message: Some("Invalid token".to_string()),
            };
            (StatusCode::UNAUTHORIZED, response_headers, Json(response)).into_response()
        }
    }
}
