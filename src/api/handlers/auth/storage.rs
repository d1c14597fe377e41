//! Database lookups for admin principals.
//!
//! Admin accounts are provisioned out-of-band; at runtime this module only
//! reads them, by username at login and by id when resolving a token subject.

use anyhow::{Context, Result};
use sqlx::{PgPool, Row};
use tracing::Instrument;
use uuid::Uuid;

/// An administrator record, as stored.
///
/// The password hash never leaves this module's callers; response types do
/// not carry it.
pub(crate) struct AdminRecord {
    pub(crate) id: Uuid,
    pub(crate) username: String,
    pub(crate) password_hash: String,
}

pub(crate) async fn lookup_admin_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<AdminRecord>> {
    let query = "SELECT id, username, password_hash FROM admin_users WHERE username = $1";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "SELECT",
        db.statement = query
    );
    let row = sqlx::query(query)
        .bind(username)
        .fetch_optional(pool)
        .instrument(span)
        .await
        .context("failed to lookup admin by username")?;

    Ok(row.map(|row| AdminRecord {
        id: row.get("id"),
        username: row.get("username"),
        password_hash: row.get("password_hash"),
    }))
}

pub(crate) async fn lookup_admin_by_id(pool: &PgPool, id: Uuid) -> Result<Option<AdminRecord>> {
    let query = "SELECT id, username, password_hash FROM admin_users WHERE id = $1";
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
        .context("failed to lookup admin by id")?;

    Ok(row.map(|row| AdminRecord {
        id: row.get("id"),
        username: row.get("username"),
        password_hash: row.get("password_hash"),
    }))
}
