use sqlx::{Row, postgres::PgRow};

use crate::repo::{Error, Repository};
use crate::types;

pub async fn complaint_create(repo: &Repository, complaint: &types::Complaint) -> Result<(), Error> {
    let pool = repo.connect().await?;
    sqlx::query(
        r#"INSERT INTO complaint_t (
            id, booking_id, email, message, status, created_at, expected_resolve_by
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
    )
    .bind(&complaint.id)
    .bind(&complaint.booking_id)
    .bind(&complaint.email)
    .bind(&complaint.message)
    .bind(complaint.status.as_str())
    .bind(complaint.created_at)
    .bind(complaint.expected_resolve_by)
    .execute(&pool)
    .await?;
    Ok(())
}

/// Reading complaints applies the lazy auto-resolution rule first: every
/// open complaint past its deadline transitions before the select sees it.
pub async fn complaints_by_booking(
    repo: &Repository,
    booking_id: &str,
) -> Result<Vec<types::Complaint>, Error> {
    let pool = repo.connect().await?;
    sqlx::query(
        r#"UPDATE complaint_t
        SET status = $2, resolved_at = now()
        WHERE booking_id = $1 AND status = $3 AND expected_resolve_by < now()"#,
    )
    .bind(booking_id)
    .bind(types::ComplaintStatus::Resolved.as_str())
    .bind(types::ComplaintStatus::Open.as_str())
    .execute(&pool)
    .await?;

    let rows = sqlx::query("SELECT * FROM complaint_t WHERE booking_id = $1 ORDER BY created_at")
        .bind(booking_id)
        .map(cast_complaint)
        .fetch_all(&pool)
        .await?;
    rows.into_iter().collect()
}

fn cast_complaint(row: PgRow) -> Result<types::Complaint, Error> {
    let status: String = row.try_get("status")?;
    Ok(types::Complaint {
        id: row.try_get("id")?,
        booking_id: row.try_get("booking_id")?,
        email: row.try_get("email")?,
        message: row.try_get("message")?,
        status: status.parse()?,
        created_at: row.try_get("created_at")?,
        expected_resolve_by: row.try_get("expected_resolve_by")?,
        resolved_at: row.try_get("resolved_at")?,
    })
}
