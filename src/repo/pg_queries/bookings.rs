use sqlx::types::Json;
use sqlx::{Row, postgres::PgRow};

use crate::repo::{Error, Repository};
use crate::types;

pub async fn booking_create(repo: &Repository, booking: &types::Booking) -> Result<(), Error> {
    let pool = repo.connect().await?;
    sqlx::query(
        r#"INSERT INTO booking_t (
            id, email, property_id, property_title, property_price,
            tenant_name, tenant_phone, tenant_address, aadhaar_number,
            booking_date, free_month_end_date, status, meal_preference, meals
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)"#,
    )
    .bind(&booking.id)
    .bind(&booking.email)
    .bind(&booking.property_id)
    .bind(&booking.property_title)
    .bind(booking.property_price)
    .bind(&booking.tenant_name)
    .bind(&booking.tenant_phone)
    .bind(&booking.tenant_address)
    .bind(&booking.aadhaar_number)
    .bind(booking.booking_date)
    .bind(booking.free_month_end_date)
    .bind(booking.status.as_str())
    .bind(booking.meal_preference.as_deref())
    .bind(booking.meals.as_ref().map(Json))
    .execute(&pool)
    .await?;
    Ok(())
}

pub async fn booking_by_id(repo: &Repository, id: &str) -> Result<Option<types::Booking>, Error> {
    let pool = repo.connect().await?;
    let row = sqlx::query("SELECT * FROM booking_t WHERE id = $1")
        .bind(id)
        .map(cast_booking)
        .fetch_optional(&pool)
        .await?;
    row.transpose()
}

pub async fn bookings_by_user(
    repo: &Repository,
    email: &str,
) -> Result<Vec<types::Booking>, Error> {
    let pool = repo.connect().await?;
    let rows = sqlx::query("SELECT * FROM booking_t WHERE email = $1 ORDER BY booking_date")
        .bind(email)
        .map(cast_booking)
        .fetch_all(&pool)
        .await?;
    rows.into_iter().collect()
}

/// Forward-only transition to cancelled. Re-cancelling matches the row
/// again but keeps the original cancellation time. Returns whether a
/// booking matched.
pub async fn booking_cancel(repo: &Repository, email: &str, id: &str) -> Result<bool, Error> {
    let pool = repo.connect().await?;
    let result = sqlx::query(
        r#"UPDATE booking_t
        SET status = $3, cancelled_at = COALESCE(cancelled_at, now())
        WHERE id = $1 AND email = $2"#,
    )
    .bind(id)
    .bind(email)
    .bind(types::BookingStatus::Cancelled.as_str())
    .execute(&pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn booking_set_meal_preference(
    repo: &Repository,
    email: &str,
    id: &str,
    meal_preference: Option<&str>,
    meals: Option<&serde_json::Value>,
) -> Result<bool, Error> {
    let pool = repo.connect().await?;
    let result = sqlx::query(
        r#"UPDATE booking_t
        SET meal_preference = $3, meals = $4, updated_at = now()
        WHERE id = $1 AND email = $2"#,
    )
    .bind(id)
    .bind(email)
    .bind(meal_preference)
    .bind(meals.map(Json))
    .execute(&pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

fn cast_booking(row: PgRow) -> Result<types::Booking, Error> {
    let status: String = row.try_get("status")?;
    Ok(types::Booking {
        id: row.try_get("id")?,
        email: row.try_get("email")?,
        property_id: row.try_get("property_id")?,
        property_title: row.try_get("property_title")?,
        property_price: row.try_get("property_price")?,
        tenant_name: row.try_get("tenant_name")?,
        tenant_phone: row.try_get("tenant_phone")?,
        tenant_address: row.try_get("tenant_address")?,
        aadhaar_number: row.try_get("aadhaar_number")?,
        booking_date: row.try_get("booking_date")?,
        free_month_end_date: row.try_get("free_month_end_date")?,
        status: status.parse()?,
        meal_preference: row.try_get("meal_preference")?,
        meals: row.try_get("meals")?,
        updated_at: row.try_get("updated_at")?,
        cancelled_at: row.try_get("cancelled_at")?,
    })
}
