//! Database access for contact inquiries.

use anyhow::{Context, Result};
use sqlx::{postgres::PgRow, PgPool, Row};
use tracing::Instrument;
use uuid::Uuid;

use super::types::{InquiryRecord, NewInquiry};

fn inquiry_from_row(row: &PgRow) -> InquiryRecord {
    InquiryRecord {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        phone: row.get("phone"),
        company_name: row.get("company_name"),
        country: row.get("country"),
        job_title: row.get("job_title"),
        job_details: row.get("job_details"),
        created_at: row.get("created_at"),
    }
}

pub(crate) async fn insert_inquiry(pool: &PgPool, inquiry: &NewInquiry) -> Result<InquiryRecord> {
    let query = "
        INSERT INTO contact_inquiries
            (id, name, email, phone, company_name, country, job_title,
             job_details, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, now())
        RETURNING id, name, email, phone, company_name, country, job_title,
                  job_details, created_at
    ";
    let span = tracing::info_span!(
        "db.query",
        db.system = "postgresql",
        db.operation = "INSERT",
        db.statement = query
    );
    let row = sqlx::query(query)
        .bind(Uuid::new_v4())
        .bind(&inquiry.name)
        .bind(&inquiry.email)
        .bind(&inquiry.phone)
        .bind(&inquiry.company_name)
        .bind(&inquiry.country)
        .bind(&inquiry.job_title)
        .bind(&inquiry.job_details)
        .fetch_one(pool)
        .instrument(span)
        .await
        .context("failed to insert inquiry")?;

    Ok(inquiry_from_row(&row))
}

pub(crate) async fn list_inquiries(pool: &PgPool) -> Result<Vec<InquiryRecord>> {
    let query = "
        SELECT id, name, email, phone, company_name, country, job_title,
               job_details, created_at
        FROM contact_inquiries
        ORDER BY created_at DESC
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
        .context("failed to list inquiries")?;

    Ok(rows.iter().map(inquiry_from_row).collect())
}

pub(crate) async fn fetch_inquiry(pool: &PgPool, id: Uuid) -> Result<Option<InquiryRecord>> {
    let query = "
        SELECT id, name, email, phone, company_name, country, job_title,
               job_details, created_at
        FROM contact_inquiries
        WHERE id = $1
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
        .context("failed to fetch inquiry")?;

    Ok(row.as_ref().map(inquiry_from_row))
}

/// Returns `false` when the id does not resolve.
pub(crate) async fn delete_inquiry(pool: &PgPool, id: Uuid) -> Result<bool> {
    let query = "DELETE FROM contact_inquiries WHERE id = $1";
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
        .context("failed to delete inquiry")?;

    Ok(result.rows_affected() > 0)
}
