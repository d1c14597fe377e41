//! Per-route admin guard.
//!
//! Unlike the edge gate, this check is authoritative: it verifies the token
//! signature and expiry and resolves the admin record before any data route
//! runs. Every failure collapses to the same 401 for the client; the reason
//! (missing cookie, rejected token, vanished principal) stays in the logs.

use axum::http::HeaderMap;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::api::error::{ApiError, UNAUTHORIZED_MESSAGE};

use super::{cookie::session_token, state::AuthState, storage::lookup_admin_by_id};

/// Authenticated administrator attached to a handler after a successful guard.
#[derive(Clone, Debug)]
pub struct AdminPrincipal {
    pub id: Uuid,
    pub username: String,
}

/// Resolve the session cookie into an admin principal, or fail with 401.
///
/// # Errors
/// Returns `ApiError::Auth` when the cookie is absent, the token fails
/// verification, or the subject no longer exists; `ApiError::Internal` when
/// the principal lookup itself fails.
pub async fn require_admin(
    headers: &HeaderMap,
    pool: &PgPool,
    auth_state: &AuthState,
) -> Result<AdminPrincipal, ApiError> {
    let Some(token) = session_token(headers) else {
        return Err(ApiError::Auth(UNAUTHORIZED_MESSAGE));
    };

    let claims = match auth_state.codec().verify(&token) {
        Ok(claims) => claims,
        Err(rejection) => {
            warn!("Admin token rejected: {rejection}");
            return Err(ApiError::Auth(UNAUTHORIZED_MESSAGE));
        }
    };

    let Ok(subject) = Uuid::parse_str(&claims.sub) else {
        warn!("Admin token subject is not a UUID");
        return Err(ApiError::Auth(UNAUTHORIZED_MESSAGE));
    };

    match lookup_admin_by_id(pool, subject).await {
        Ok(Some(admin)) => Ok(AdminPrincipal {
            id: admin.id,
            username: admin.username,
        }),
        Ok(None) => {
            warn!("Admin token subject no longer exists: {subject}");
            Err(ApiError::Auth(UNAUTHORIZED_MESSAGE))
        }
        Err(err) => Err(ApiError::Internal(err)),
    }
}
