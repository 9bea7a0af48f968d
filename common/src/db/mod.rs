//! Shared Postgres handle
//!
//! The process owns at most one connection pool. [`must_init`] builds it on
//! first use and returns the same pool to every later caller, whatever
//! parameters they pass. [`db`] hands the pool out afterwards. Both abort the
//! process when they cannot produce a pool: no caller is written to handle a
//! missing database.

use std::fmt::Display;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgConnection, PgPoolOptions};
use sqlx::{Connection, Pool, Postgres};
use tracing::{error, info};

use crate::error::{Error, Result};

pub mod cell;

pub use cell::ConnectionCell;

/// Database pool type
pub type DbPool = Pool<Postgres>;

static DB: ConnectionCell<DbPool> = ConnectionCell::new();

/// Pool options applied when the shared pool is opened
#[derive(Debug, Clone)]
pub struct DbOptions {
    /// Maximum number of open connections
    pub max_connections: u32,
    /// Connections kept open while idle
    pub min_connections: u32,
    /// How long to wait for a free connection
    pub acquire_timeout: Duration,
    /// Close connections idle for longer than this
    pub idle_timeout: Option<Duration>,
    /// Close connections older than this
    pub max_lifetime: Option<Duration>,
}

impl Default for DbOptions {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 0,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: None,
            max_lifetime: None,
        }
    }
}

impl DbOptions {
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    pub fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    pub fn idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = Some(timeout);
        self
    }

    pub fn max_lifetime(mut self, lifetime: Duration) -> Self {
        self.max_lifetime = Some(lifetime);
        self
    }

    /// Translate into sqlx pool options
    pub fn pool_options(&self) -> PgPoolOptions {
        let mut options = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.acquire_timeout);

        if let Some(timeout) = self.idle_timeout {
            options = options.idle_timeout(timeout);
        }
        if let Some(lifetime) = self.max_lifetime {
            options = options.max_lifetime(lifetime);
        }

        options
    }
}

/// Open a new pool, connecting once to check the DSN.
///
/// The check is a single attempt: an unreachable server fails immediately
/// instead of waiting out `acquire_timeout`. Pool connections are then
/// opened on demand.
pub async fn open(dsn: &str, options: &DbOptions) -> Result<DbPool> {
    let connect_options: PgConnectOptions = dsn.parse()?;

    let conn = PgConnection::connect_with(&connect_options).await?;
    conn.close().await?;

    Ok(options.pool_options().connect_lazy_with(connect_options))
}

/// Initialize the shared pool, or return it if it already exists.
///
/// Only the first successful call opens a pool. `dsn` and `options` of any
/// later call are ignored. A connection failure terminates the process.
pub async fn must_init(dsn: &str, options: DbOptions) -> &'static DbPool {
    let pool = DB
        .get_or_try_init(|| async move {
            match open(dsn, &options).await {
                Ok(pool) => {
                    info!(max_connections = options.max_connections, "database pool opened");
                    Ok::<_, Error>(pool)
                }
                // Exit while the cell is still locked so no waiting caller opens again
                Err(err) => fatal(format!("failed to connect database: {}", err)),
            }
        })
        .await;

    match pool {
        Ok(pool) => pool,
        Err(err) => fatal(format!("failed to connect database: {}", err)),
    }
}

/// The shared pool. Terminates the process if [`must_init`] has not completed.
pub fn db() -> &'static DbPool {
    match DB.try_get() {
        Ok(pool) => pool,
        Err(err) => fatal(err),
    }
}

/// The shared pool, or `Error::NotInitialized`
pub fn try_db() -> Result<&'static DbPool> {
    DB.try_get()
}

fn fatal(message: impl Display) -> ! {
    error!("{}", message);
    eprintln!("{}", message);
    std::process::exit(1)
}
