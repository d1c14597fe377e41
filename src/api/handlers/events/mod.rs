//! Event endpoints: a public listing for the site and guarded CRUD for the
//! admin back-office.

pub mod storage;
pub mod types;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::error::ApiError;

use super::auth::{require_admin, AuthState};
use types::{EventCreator, EventPayload, EventRecord, EventResponse, PublicEvent};

const EVENT_NOT_FOUND: &str = "Event not found.";

/// Parse a path id, mapping anything that is not a UUID to 404: an id that
/// cannot exist does not resolve.
fn parse_event_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::NotFound(EVENT_NOT_FOUND.to_string()))
}

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "All events, ascending by date", body = [PublicEvent])
    ),
    tag = "events"
)]
pub async fn list_public(
    Extension(pool): Extension<PgPool>,
) -> Result<impl IntoResponse, ApiError> {
    let events = storage::list_public_events(&pool).await?;
    Ok(Json(events))
}

#[utoipa::path(
    get,
    path = "/api/admin/events",
    responses(
        (status = 200, description = "All events with creator attribution", body = [EventRecord]),
        (status = 401, description = "Missing or invalid session")
    ),
    tag = "events"
)]
pub async fn list(
    Extension(pool): Extension<PgPool>,
    Extension(auth_state): Extension<Arc<AuthState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    require_admin(&headers, &pool, &auth_state).await?;

    let events = storage::list_events(&pool).await?;
    Ok(Json(events))
}

#[utoipa::path(
    post,
    path = "/api/admin/events",
    request_body = EventPayload,
    responses(
        (status = 201, description = "Event created", body = EventResponse),
        (status = 400, description = "Required fields are missing"),
        (status = 401, description = "Missing or invalid session")
    ),
    tag = "events"
)]
pub async fn create(
    Extension(pool): Extension<PgPool>,
    Extension(auth_state): Extension<Arc<AuthState>>,
    headers: HeaderMap,
    payload: Result<Json<EventPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let admin = require_admin(&headers, &pool, &auth_state).await?;

    let Ok(Json(payload)) = payload else {
        return Err(ApiError::Validation("Invalid request body".to_string()));
    };
    let event = payload.validate()?;

    let mut record = storage::insert_event(&pool, &event, admin.id).await?;
    record.created_by = Some(EventCreator {
        username: admin.username,
    });

    let response = EventResponse {
        message: "Event created successfully!".to_string(),
        event: record,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/admin/events/{id}",
    params(("id" = String, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event detail", body = EventRecord),
        (status = 401, description = "Missing or invalid session"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get(
    Extension(pool): Extension<PgPool>,
    Extension(auth_state): Extension<Arc<AuthState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    require_admin(&headers, &pool, &auth_state).await?;

    let id = parse_event_id(&id)?;
    let event = storage::fetch_event(&pool, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(EVENT_NOT_FOUND.to_string()))?;
    Ok(Json(event))
}

#[utoipa::path(
    put,
    path = "/api/admin/events/{id}",
    params(("id" = String, Path, description = "Event id")),
    request_body = EventPayload,
    responses(
        (status = 200, description = "Event updated", body = EventResponse),
        (status = 400, description = "Required fields are missing"),
        (status = 401, description = "Missing or invalid session"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn update(
    Extension(pool): Extension<PgPool>,
    Extension(auth_state): Extension<Arc<AuthState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    payload: Result<Json<EventPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    require_admin(&headers, &pool, &auth_state).await?;

    let id = parse_event_id(&id)?;
    let Ok(Json(payload)) = payload else {
        return Err(ApiError::Validation("Invalid request body".to_string()));
    };
    let event = payload.validate()?;

    let record = storage::update_event(&pool, id, &event)
        .await?
        .ok_or_else(|| ApiError::NotFound(EVENT_NOT_FOUND.to_string()))?;

    let response = EventResponse {
        message: "Event updated successfully!".to_string(),
        event: record,
    };
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/api/admin/events/{id}",
    params(("id" = String, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event deleted"),
        (status = 401, description = "Missing or invalid session"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn delete(
    Extension(pool): Extension<PgPool>,
    Extension(auth_state): Extension<Arc<AuthState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    require_admin(&headers, &pool, &auth_state).await?;

    let id = parse_event_id(&id)?;
    if !storage::delete_event(&pool, id).await? {
        return Err(ApiError::NotFound(EVENT_NOT_FOUND.to_string()));
    }

    Ok(Json(serde_json::json!({
        "message": "Event deleted successfully!"
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_uuid_ids_do_not_resolve() {
        assert!(matches!(
            parse_event_id("not-a-uuid"),
            Err(ApiError::NotFound(_))
        ));
        assert!(parse_event_id(&Uuid::new_v4().to_string()).is_ok());
    }
}
