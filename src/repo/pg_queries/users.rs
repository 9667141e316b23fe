use sqlx::types::Json;
use sqlx::{Row, postgres::PgRow};

use crate::repo::{Error, Repository};
use crate::types;

pub async fn user_create(repo: &Repository, user: &types::User) -> Result<String, Error> {
    let pool = repo.connect().await?;
    sqlx::query(
        r#"INSERT INTO user_t (id, name, email, password_hash, wishlist, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)"#,
    )
    .bind(&user.id)
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(Json(&user.wishlist))
    .bind(user.created_at)
    .execute(&pool)
    .await?;
    Ok(user.id.clone())
}

pub async fn user_find_by_email(
    repo: &Repository,
    email: &str,
) -> Result<Option<types::User>, Error> {
    let pool = repo.connect().await?;
    let row = sqlx::query("SELECT * FROM user_t WHERE email = $1")
        .bind(email)
        .map(cast_user)
        .fetch_optional(&pool)
        .await?;
    row.transpose()
}

pub async fn user_update(
    repo: &Repository,
    email: &str,
    update: &types::UserUpdate,
) -> Result<Option<types::User>, Error> {
    let pool = repo.connect().await?;
    let row = sqlx::query(
        r#"UPDATE user_t
        SET name = COALESCE($2, name),
            password_hash = COALESCE($3, password_hash),
            updated_at = now()
        WHERE email = $1
        RETURNING *"#,
    )
    .bind(email)
    .bind(update.name.as_deref())
    .bind(update.password_hash.as_deref())
    .map(cast_user)
    .fetch_optional(&pool)
    .await?;
    row.transpose()
}

/// Appends the entry unless the wishlist already holds that property id, so
/// repeated adds stay idempotent. Returns whether a user matched.
pub async fn wishlist_add(
    repo: &Repository,
    email: &str,
    entry: &types::WishlistEntry,
) -> Result<bool, Error> {
    let pool = repo.connect().await?;
    let entry_json = serde_json::to_value(entry)?;
    let result = sqlx::query(
        r#"UPDATE user_t
        SET wishlist = CASE
            WHEN EXISTS (
                SELECT 1 FROM jsonb_array_elements(wishlist) AS e
                WHERE e->>'property_id' = $2
            ) THEN wishlist
            ELSE wishlist || $3::jsonb
        END
        WHERE email = $1"#,
    )
    .bind(email)
    .bind(&entry.property_id)
    .bind(entry_json)
    .execute(&pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn wishlist_remove(
    repo: &Repository,
    email: &str,
    property_id: &str,
) -> Result<bool, Error> {
    let pool = repo.connect().await?;
    let result = sqlx::query(
        r#"UPDATE user_t
        SET wishlist = COALESCE(
            (SELECT jsonb_agg(e) FROM jsonb_array_elements(wishlist) AS e
             WHERE e->>'property_id' <> $2),
            '[]'::jsonb)
        WHERE email = $1"#,
    )
    .bind(email)
    .bind(property_id)
    .execute(&pool)
    .await?;
    Ok(result.rows_affected() > 0)
}

fn cast_user(row: PgRow) -> Result<types::User, Error> {
    let wishlist: Json<Vec<types::WishlistEntry>> = row.try_get("wishlist")?;
    Ok(types::User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        wishlist: wishlist.0,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
