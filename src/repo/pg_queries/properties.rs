use sqlx::{Row, postgres::PgRow};

use crate::repo::{Error, Repository};
use crate::types;

pub async fn property_all(repo: &Repository) -> Result<Vec<types::Property>, Error> {
    let pool = repo.connect().await?;
    let rows = sqlx::query("SELECT * FROM property_t ORDER BY created_at")
        .map(cast_property)
        .fetch_all(&pool)
        .await?;
    rows.into_iter().collect()
}

pub async fn property_by_id(repo: &Repository, id: &str) -> Result<Option<types::Property>, Error> {
    let pool = repo.connect().await?;
    let row = sqlx::query("SELECT * FROM property_t WHERE id = $1")
        .bind(id)
        .map(cast_property)
        .fetch_optional(&pool)
        .await?;
    row.transpose()
}

pub async fn property_create(repo: &Repository, property: &types::Property) -> Result<(), Error> {
    let pool = repo.connect().await?;
    sqlx::query(
        r#"INSERT INTO property_t (
            id, title, description, property_type, city, area, price,
            images, amenities, room_type, gender_preference, verified,
            rating, total_reviews, distance_from_college, available_rooms,
            created_at, created_by
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)"#,
    )
    .bind(&property.id)
    .bind(&property.title)
    .bind(&property.description)
    .bind(property.property_type.as_str())
    .bind(&property.city)
    .bind(&property.area)
    .bind(property.price)
    .bind(&property.images)
    .bind(&property.amenities)
    .bind(property.room_type.as_str())
    .bind(property.gender_preference.as_str())
    .bind(property.verified)
    .bind(property.rating)
    .bind(property.total_reviews)
    .bind(property.distance_from_college)
    .bind(property.available_rooms)
    .bind(property.created_at)
    .bind(property.created_by.as_deref())
    .execute(&pool)
    .await?;
    Ok(())
}

/// Used by the seeding tool before re-inserting the reference catalog.
pub async fn property_clear(repo: &Repository) -> Result<u64, Error> {
    let pool = repo.connect().await?;
    let result = sqlx::query("DELETE FROM property_t").execute(&pool).await?;
    Ok(result.rows_affected())
}

fn cast_property(row: PgRow) -> Result<types::Property, Error> {
    let property_type: String = row.try_get("property_type")?;
    let room_type: String = row.try_get("room_type")?;
    let gender_preference: String = row.try_get("gender_preference")?;
    Ok(types::Property {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        property_type: property_type.parse()?,
        city: row.try_get("city")?,
        area: row.try_get("area")?,
        price: row.try_get("price")?,
        images: row.try_get("images")?,
        amenities: row.try_get("amenities")?,
        room_type: room_type.parse()?,
        gender_preference: gender_preference.parse()?,
        verified: row.try_get("verified")?,
        rating: row.try_get("rating")?,
        total_reviews: row.try_get("total_reviews")?,
        distance_from_college: row.try_get("distance_from_college")?,
        available_rooms: row.try_get("available_rooms")?,
        created_at: row.try_get("created_at")?,
        created_by: row.try_get("created_by")?,
    })
}
