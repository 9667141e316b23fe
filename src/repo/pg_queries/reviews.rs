use sqlx::{Row, postgres::PgRow};

use crate::repo::{Error, Repository};
use crate::types;

pub async fn review_create(repo: &Repository, review: &types::Review) -> Result<(), Error> {
    let pool = repo.connect().await?;
    sqlx::query(
        r#"INSERT INTO review_t (
            id, property_id, student_name, university, rating, comment, date, status
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"#,
    )
    .bind(&review.id)
    .bind(&review.property_id)
    .bind(&review.student_name)
    .bind(&review.university)
    .bind(review.rating)
    .bind(&review.comment)
    .bind(review.date)
    .bind(review.status.as_str())
    .execute(&pool)
    .await?;
    Ok(())
}

/// Public listing: approved reviews only.
pub async fn reviews_by_property(
    repo: &Repository,
    property_id: &str,
) -> Result<Vec<types::Review>, Error> {
    let pool = repo.connect().await?;
    let rows = sqlx::query(
        "SELECT * FROM review_t WHERE property_id = $1 AND status = $2 ORDER BY date",
    )
    .bind(property_id)
    .bind(types::ReviewStatus::Approved.as_str())
    .map(cast_review)
    .fetch_all(&pool)
    .await?;
    rows.into_iter().collect()
}

/// Moderation view across all statuses.
pub async fn review_all(repo: &Repository) -> Result<Vec<types::Review>, Error> {
    let pool = repo.connect().await?;
    let rows = sqlx::query("SELECT * FROM review_t ORDER BY date")
        .map(cast_review)
        .fetch_all(&pool)
        .await?;
    rows.into_iter().collect()
}

fn cast_review(row: PgRow) -> Result<types::Review, Error> {
    let status: String = row.try_get("status")?;
    Ok(types::Review {
        id: row.try_get("id")?,
        property_id: row.try_get("property_id")?,
        student_name: row.try_get("student_name")?,
        university: row.try_get("university")?,
        rating: row.try_get("rating")?,
        comment: row.try_get("comment")?,
        date: row.try_get("date")?,
        status: status.parse()?,
    })
}
