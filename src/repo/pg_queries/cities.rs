use sqlx::{Row, postgres::PgRow};

use crate::repo::{Error, Repository};
use crate::types;

pub async fn city_all(repo: &Repository) -> Result<Vec<types::City>, Error> {
    let pool = repo.connect().await?;
    let rows = sqlx::query("SELECT * FROM city_t ORDER BY name")
        .map(cast_city)
        .fetch_all(&pool)
        .await?;
    rows.into_iter().collect()
}

pub async fn city_create(repo: &Repository, city: &types::City) -> Result<(), Error> {
    let pool = repo.connect().await?;
    sqlx::query(
        r#"INSERT INTO city_t (id, name, image, property_count)
        VALUES ($1, $2, $3, $4)"#,
    )
    .bind(&city.id)
    .bind(&city.name)
    .bind(&city.image)
    .bind(city.property_count)
    .execute(&pool)
    .await?;
    Ok(())
}

/// Used by the seeding tool before re-inserting the reference catalog.
pub async fn city_clear(repo: &Repository) -> Result<u64, Error> {
    let pool = repo.connect().await?;
    let result = sqlx::query("DELETE FROM city_t").execute(&pool).await?;
    Ok(result.rows_affected())
}

fn cast_city(row: PgRow) -> Result<types::City, Error> {
    Ok(types::City {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        image: row.try_get("image")?,
        property_count: row.try_get("property_count")?,
    })
}
