//! Error taxonomy for the HTTP surface.
//!
//! Clients only ever see a `{message}` body and one of 400/401/404/500.
//! Internal detail (storage errors, token rejection reasons) is logged
//! server-side and never echoed.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use std::fmt;
use tracing::error;

/// Message returned by every guarded admin route on a failed check.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized. Please log in as admin.";

/// Message returned by login for unknown usernames and bad passwords alike,
/// so responses cannot be used to enumerate accounts.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed input fields.
    Validation(String),
    /// Missing, invalid, or expired credentials or token.
    Auth(&'static str),
    /// Referenced record absent.
    NotFound(String),
    /// Storage or configuration failure.
    Internal(anyhow::Error),
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Validation(message) | Self::NotFound(message) => message.clone(),
            Self::Auth(message) => (*message).to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(message) => write!(f, "validation error: {message}"),
            Self::Auth(message) => write!(f, "auth error: {message}"),
            Self::NotFound(message) => write!(f, "not found: {message}"),
            Self::Internal(err) => write!(f, "internal error: {err}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(err) = &self {
            // The chain carries the storage context; the client gets none of it.
            error!("Internal error: {err:#}");
        }
        let body = Json(json!({ "message": self.message() }));
        (self.status(), body).into_response()
    }
}
