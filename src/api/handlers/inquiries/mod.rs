//! Contact-inquiry endpoints: public intake plus guarded admin reads and
//! deletes.

pub mod storage;
pub mod types;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::api::error::ApiError;

use super::auth::{require_admin, AuthState};
use types::{ContactPayload, InquiryRecord};

const INQUIRY_NOT_FOUND: &str = "Inquiry not found.";

fn parse_inquiry_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::NotFound(INQUIRY_NOT_FOUND.to_string()))
}

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactPayload,
    responses(
        (status = 201, description = "Inquiry stored"),
        (status = 400, description = "Required fields are missing")
    ),
    tag = "inquiries"
)]
pub async fn submit(
    Extension(pool): Extension<PgPool>,
    payload: Result<Json<ContactPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Ok(Json(payload)) = payload else {
        return Err(ApiError::Validation("Invalid request body".to_string()));
    };
    let inquiry = payload.validate()?;

    let record = storage::insert_inquiry(&pool, &inquiry).await?;
    info!("New inquiry from '{}' stored as {}", record.email, record.id);

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Inquiry submitted successfully!"
        })),
    ))
}

#[utoipa::path(
    get,
    path = "/api/admin/inquiries",
    responses(
        (status = 200, description = "All inquiries, newest first", body = [InquiryRecord]),
        (status = 401, description = "Missing or invalid session")
    ),
    tag = "inquiries"
)]
pub async fn list(
    Extension(pool): Extension<PgPool>,
    Extension(auth_state): Extension<Arc<AuthState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    require_admin(&headers, &pool, &auth_state).await?;

    let inquiries = storage::list_inquiries(&pool).await?;
    Ok(Json(inquiries))
}

#[utoipa::path(
    get,
    path = "/api/admin/inquiries/{id}",
    params(("id" = String, Path, description = "Inquiry id")),
    responses(
        (status = 200, description = "Inquiry detail", body = InquiryRecord),
        (status = 401, description = "Missing or invalid session"),
        (status = 404, description = "Inquiry not found")
    ),
    tag = "inquiries"
)]
pub async fn get(
    Extension(pool): Extension<PgPool>,
    Extension(auth_state): Extension<Arc<AuthState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    require_admin(&headers, &pool, &auth_state).await?;

    let id = parse_inquiry_id(&id)?;
    let inquiry = storage::fetch_inquiry(&pool, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(INQUIRY_NOT_FOUND.to_string()))?;
    Ok(Json(inquiry))
}

#[utoipa::path(
    delete,
    path = "/api/admin/inquiries/{id}",
    params(("id" = String, Path, description = "Inquiry id")),
    responses(
        (status = 200, description = "Inquiry deleted"),
        (status = 401, description = "Missing or invalid session"),
        (status = 404, description = "Inquiry not found")
    ),
    tag = "inquiries"
)]
pub async fn delete(
    Extension(pool): Extension<PgPool>,
    Extension(auth_state): Extension<Arc<AuthState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    require_admin(&headers, &pool, &auth_state).await?;

    let id = parse_inquiry_id(&id)?;
    if !storage::delete_inquiry(&pool, id).await? {
        return Err(ApiError::NotFound(INQUIRY_NOT_FOUND.to_string()));
    }

    Ok(Json(serde_json::json!({
        "message": "Inquiry deleted successfully!"
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_uuid_ids_do_not_resolve() {
        assert!(matches!(
            parse_inquiry_id("42"),
            Err(ApiError::NotFound(_))
        ));
        assert!(parse_inquiry_id(&Uuid::new_v4().to_string()).is_ok());
    }
}
