use axum::response::{IntoResponse, Json};
use serde_json::json;

use crate::api::GIT_COMMIT_HASH;

// axum handler for the service banner
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "build": GIT_COMMIT_HASH,
    }))
}
