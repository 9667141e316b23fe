//! Persistent store adapter.
//!
//! [`Repository`] owns an explicit connection state with a
//! `Closed → Open | Failed` lifecycle and performs a single lazy, bounded
//! connection attempt on first use; the first successful attempt also
//! bootstraps the schema and its uniqueness/lookup indexes. Every query
//! function in [`pg_queries`] calls [`Repository::connect`] first and fails
//! with [`Error::Unavailable`] when the store cannot be reached — the
//! adapter never substitutes degraded data itself, that dispatch belongs to
//! the facade layer.

use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tokio::sync::Mutex;

mod pg_queries;
pub use pg_queries::*;

const MAX_POOL_CONNECTIONS: u32 = 5;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Durable store unreachable, timed out or otherwise failing; the
    /// caller may serve a degraded copy instead.
    #[error("durable store unavailable :: {0}")]
    Unavailable(String),
    /// Unique-key business rejection; must never trigger a fallback.
    #[error("record already exists for key `{0}`")]
    AlreadyExists(String),
    #[error("data serialization error :: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("corrupted record :: {0}")]
    Corrupted(#[from] crate::types::InvalidEnumValue),
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return Error::AlreadyExists(db_err.constraint().unwrap_or("unknown").to_owned());
            }
        }
        Error::Unavailable(err.to_string())
    }
}

/// Observable lifecycle of the adapter's underlying connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnLifecycle {
    /// No attempt made yet (or no database configured).
    Closed,
    Open,
    /// Last attempt failed; the next operation retries.
    Failed,
}

enum ConnState {
    Closed,
    Open(PgPool),
    Failed,
}

#[derive(Clone)]
pub struct Repository {
    inner: Arc<Inner>,
}

struct Inner {
    url: Option<String>,
    connect_timeout: Duration,
    state: Mutex<ConnState>,
}

impl Repository {
    /// `url = None` builds an adapter that fails every operation with
    /// [`Error::Unavailable`], selecting degraded-mode-only operation.
    pub fn new(url: Option<String>, connect_timeout: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                url,
                connect_timeout,
                state: Mutex::new(ConnState::Closed),
            }),
        }
    }

    pub fn from_env() -> Self {
        let cfg = crate::params::configurables();
        Self::new(cfg.database_url.clone(), cfg.connect_timeout)
    }

    pub async fn lifecycle(&self) -> ConnLifecycle {
        match *self.inner.state.lock().await {
            ConnState::Closed => ConnLifecycle::Closed,
            ConnState::Open(_) => ConnLifecycle::Open,
            ConnState::Failed => ConnLifecycle::Failed,
        }
    }

    /// Idempotent lazy connect: a live pool is reused, otherwise a single
    /// bounded attempt runs. The state lock is held across the attempt so
    /// concurrent callers cannot race a second one; they re-check and reuse
    /// the pool once the first attempt settles. A failed state is not
    /// sticky — the next call retries, otherwise a transient outage would
    /// never recover.
    pub(crate) async fn connect(&self) -> Result<PgPool, Error> {
        let Some(url) = &self.inner.url else {
            return Err(Error::Unavailable("no database configured".to_owned()));
        };

        let mut state = self.inner.state.lock().await;
        if let ConnState::Open(pool) = &*state {
            return Ok(pool.clone());
        }

        match try_connect(url, self.inner.connect_timeout).await {
            Ok(pool) => {
                info!("durable store connection established");
                *state = ConnState::Open(pool.clone());
                Ok(pool)
            }
            Err(err) => {
                warn!("durable store connection failed: {err}");
                *state = ConnState::Failed;
                Err(err)
            }
        }
    }
}

async fn try_connect(url: &str, connect_timeout: Duration) -> Result<PgPool, Error> {
    let options = PgPoolOptions::new()
        .max_connections(MAX_POOL_CONNECTIONS)
        .acquire_timeout(connect_timeout);

    let pool = tokio::time::timeout(connect_timeout, options.connect(url))
        .await
        .map_err(|_| {
            Error::Unavailable(format!(
                "connection attempt timed out after {connect_timeout:?}"
            ))
        })??;

    ensure_schema(&pool).await?;
    Ok(pool)
}

/// Tables plus the guarantees the adapter relies on: email uniqueness on
/// users and lookup indexes on the hot query columns.
const SCHEMA: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS user_t (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        password_hash TEXT NOT NULL,
        wishlist JSONB NOT NULL DEFAULT '[]'::jsonb,
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ
    )"#,
    "CREATE UNIQUE INDEX IF NOT EXISTS user_email_key ON user_t (email)",
    r#"CREATE TABLE IF NOT EXISTS property_t (
        id TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        property_type TEXT NOT NULL,
        city TEXT NOT NULL,
        area TEXT NOT NULL,
        price BIGINT NOT NULL,
        images TEXT[] NOT NULL,
        amenities TEXT[] NOT NULL,
        room_type TEXT NOT NULL,
        gender_preference TEXT NOT NULL,
        verified BOOLEAN NOT NULL,
        rating DOUBLE PRECISION NOT NULL,
        total_reviews BIGINT NOT NULL,
        distance_from_college BIGINT NOT NULL,
        available_rooms BIGINT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL,
        created_by TEXT
    )"#,
    "CREATE INDEX IF NOT EXISTS property_city_idx ON property_t (city)",
    r#"CREATE TABLE IF NOT EXISTS city_t (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        image TEXT NOT NULL,
        property_count BIGINT NOT NULL
    )"#,
    "CREATE INDEX IF NOT EXISTS city_name_idx ON city_t (name)",
    r#"CREATE TABLE IF NOT EXISTS booking_t (
        id TEXT PRIMARY KEY,
        email TEXT NOT NULL,
        property_id TEXT NOT NULL,
        property_title TEXT NOT NULL,
        property_price BIGINT NOT NULL,
        tenant_name TEXT NOT NULL,
        tenant_phone TEXT NOT NULL,
        tenant_address TEXT NOT NULL,
        aadhaar_number TEXT NOT NULL,
        booking_date TIMESTAMPTZ NOT NULL,
        free_month_end_date TIMESTAMPTZ NOT NULL,
        status TEXT NOT NULL,
        meal_preference TEXT,
        meals JSONB,
        updated_at TIMESTAMPTZ,
        cancelled_at TIMESTAMPTZ
    )"#,
    "CREATE INDEX IF NOT EXISTS booking_email_idx ON booking_t (email)",
    r#"CREATE TABLE IF NOT EXISTS complaint_t (
        id TEXT PRIMARY KEY,
        booking_id TEXT NOT NULL,
        email TEXT NOT NULL,
        message TEXT NOT NULL,
        status TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL,
        expected_resolve_by TIMESTAMPTZ NOT NULL,
        resolved_at TIMESTAMPTZ
    )"#,
    "CREATE INDEX IF NOT EXISTS complaint_booking_idx ON complaint_t (booking_id)",
    r#"CREATE TABLE IF NOT EXISTS review_t (
        id TEXT PRIMARY KEY,
        property_id TEXT NOT NULL,
        student_name TEXT NOT NULL,
        university TEXT NOT NULL,
        rating INT NOT NULL,
        comment TEXT NOT NULL,
        date TIMESTAMPTZ NOT NULL,
        status TEXT NOT NULL
    )"#,
    "CREATE INDEX IF NOT EXISTS review_property_idx ON review_t (property_id)",
];

async fn ensure_schema(pool: &PgPool) -> Result<(), Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_adapter_reports_unavailable() {
        let repo = Repository::new(None, Duration::from_millis(100));
        assert_eq!(repo.lifecycle().await, ConnLifecycle::Closed);

        let err = repo.connect().await.unwrap_err();
        assert!(matches!(err, Error::Unavailable(_)));

        // No attempt was made, the lifecycle never leaves Closed.
        assert_eq!(repo.lifecycle().await, ConnLifecycle::Closed);
    }

    #[tokio::test]
    async fn unreachable_store_fails_and_retries() {
        // Port 9 (discard) is refused locally, so the attempt settles fast.
        let repo = Repository::new(
            Some("postgres://postgres@127.0.0.1:9/none".to_owned()),
            Duration::from_millis(200),
        );

        assert!(matches!(
            repo.connect().await,
            Err(Error::Unavailable(_))
        ));
        assert_eq!(repo.lifecycle().await, ConnLifecycle::Failed);

        // Failure is not sticky: the next call attempts again.
        assert!(matches!(
            repo.connect().await,
            Err(Error::Unavailable(_))
        ));
    }
}
