//! Database access for events.

use anyhow::{Context, Result};
use sqlx::{postgres::PgRow, PgPool, Row};
use tracing::Instrument;
use uuid::Uuid;

use super::types::{EventCreator, EventRecord, NewEvent, PublicEvent};

fn event_from_row(row: &PgRow) -> EventRecord {
    let created_by = row
        .try_get::<Option<String>, _>("created_by_username")
        .ok()
        .flatten()
        .map(|username| EventCreator { username });

    EventRecord {
        id: row.get("id"),
        name: row.get("name"),
        date: row.get("date"),
        time: row.get("time"),
        location: row.get("location"),
        description: row.get("description"),
        link: row.get("link"),
        category: row.get("category"),
        image: row.get("image"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        created_by,
    }
}

pub(crate) async fn list_events(pool: &PgPool) -> Result<Vec<EventRecord>> {
    let query = "
        SELECT e.id, e.name, e.date, e.time, e.location, e.description,
               e.link, e.category, e.image, e.created_at, e.updated_at,
               a.username AS created_by_username
        FROM events e
        LEFT JOIN admin_users a ON a.id = e.admin_id
        ORDER BY e.date ASC
    ";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );
    let rows = sqlx::query(query)
        .fetch_all(pool)
        .instrument(span)
        .await
        .context("failed to list events")?;

    Ok(rows.iter().map(event_from_row).collect())
}

pub(crate) async fn list_public_events(pool: &PgPool) -> Result<Vec<PublicEvent>> {
    let query = "
        SELECT id, name, date, time, location, description,
               link, category, image, created_at
        FROM events
        ORDER BY date ASC
    ";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );
    let rows = sqlx::query(query)
        .fetch_all(pool)
        .instrument(span)
        .await
        .context("failed to list public events")?;

    Ok(rows
        .iter()
        .map(|row| PublicEvent {
            id: row.get("id"),
            name: row.get("name"),
            date: row.get("date"),
            time: row.get("time"),
            location: row.get("location"),
            description: row.get("description"),
            link: row.get("link"),
            category: row.get("category"),
            image: row.get("image"),
            created_at: row.get("created_at"),
        })
        .collect())
}

pub(crate) async fn fetch_event(pool: &PgPool, id: Uuid) -> Result<Option<EventRecord>> {
    let query = "
        SELECT e.id, e.name, e.date, e.time, e.location, e.description,
               e.link, e.category, e.image, e.created_at, e.updated_at,
               a.username AS created_by_username
        FROM events e
        LEFT JOIN admin_users a ON a.id = e.admin_id
        WHERE e.id = $1
    ";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );
    let row = sqlx::query(query)
        .bind(id)
        .fetch_optional(pool)
        .instrument(span)
        .await
        .context("failed to fetch event")?;

    Ok(row.as_ref().map(event_from_row))
}

pub(crate) async fn insert_event(
    pool: &PgPool,
    event: &NewEvent,
    admin_id: Uuid,
) -> Result<EventRecord> {
    let query = "
        INSERT INTO events
            (id, name, date, time, location, description, link, category, image,
             admin_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, now(), now())
        RETURNING id, name, date, time, location, description, link, category,
                  image, created_at, updated_at
    ";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "INSERT",
        db.statement = query
    );
    let row = sqlx::query(query)
        .bind(Uuid::new_v4())
        .bind(&event.name)
        .bind(event.date)
        .bind(&event.time)
        .bind(&event.location)
        .bind(&event.description)
        .bind(&event.link)
        .bind(&event.category)
        .bind(&event.image)
        .bind(admin_id)
        .fetch_one(pool)
        .instrument(span)
        .await
        .context("failed to insert event")?;

    Ok(event_from_row(&row))
}

/// Update in place; returns `None` when the id does not resolve.
pub(crate) async fn update_event(
    pool: &PgPool,
    id: Uuid,
    event: &NewEvent,
) -> Result<Option<EventRecord>> {
    let query = "
        UPDATE events
        SET name = $2, date = $3, time = $4, location = $5, description = $6,
            link = $7, category = $8, image = $9, updated_at = now()
        WHERE id = $1
        RETURNING id, name, date, time, location, description, link, category,
                  image, created_at, updated_at
    ";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "UPDATE",
        db.statement = query
    );
    let row = sqlx::query(query)
        .bind(id)
        .bind(&event.name)
        .bind(event.date)
        .bind(&event.time)
        .bind(&event.location)
        .bind(&event.description)
        .bind(&event.link)
        .bind(&event.category)
        .bind(&event.image)
        .fetch_optional(pool)
        .instrument(span)
        .await
        .context("failed to update event")?;

    Ok(row.as_ref().map(event_from_row))
}

/// Returns `false` when the id does not resolve.
pub(crate) async fn delete_event(pool: &PgPool, id: Uuid) -> Result<bool> {
    let query = "DELETE FROM events WHERE id = $1";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "DELETE",
        db.statement = query
    );
    let result = sqlx::query(query)
        .bind(id)
        .execute(pool)
        .instrument(span)
        .await
        .context("failed to delete event")?;

    Ok(result.rows_affected() > 0)
}
