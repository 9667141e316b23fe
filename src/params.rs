//! Process-wide configuration, read once from the environment at startup.
//!
//! A missing `DATABASE_URL` is not an error: the application starts anyway
//! and serves degraded in-memory data from the first request.

use std::{env, sync::OnceLock, time::Duration};

use log::info;

const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 3_000;
const DEFAULT_SESSION_SECRET: &str = "dev-secret";

#[derive(Debug, Clone)]
pub struct Configurables {
    /// Connection string of the durable store. `None` selects
    /// degraded-mode-only operation.
    pub database_url: Option<String>,
    /// Upper bound on the single lazy connection attempt.
    pub connect_timeout: Duration,
    /// Consumed by the outer web layer when issuing session cookies.
    pub session_secret: String,
}

impl Configurables {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let database_url = env::var("DATABASE_URL").ok();
        if database_url.is_none() {
            info!("DATABASE_URL not set, serving in-memory data only");
        }

        let connect_timeout_ms = env::var("CONNECT_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT_MS);

        let session_secret = env::var("SESSION_SECRET").unwrap_or_else(|_| {
            info!("SESSION_SECRET not set, using default: {DEFAULT_SESSION_SECRET}");
            DEFAULT_SESSION_SECRET.to_owned()
        });

        Self {
            database_url,
            connect_timeout: Duration::from_millis(connect_timeout_ms),
            session_secret,
        }
    }
}

pub fn configurables() -> &'static Configurables {
    static CONFIGURABLES: OnceLock<Configurables> = OnceLock::new();
    CONFIGURABLES.get_or_init(Configurables::from_env)
}
