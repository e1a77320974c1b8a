//! # Database Infrastructure
//!
//! This crate provides a unified interface for initializing and managing the
//! SQLite connection pool, plus the repository functions the services call.
//!
//! ## Key Concepts
//! - **Builder Pattern**: Fluent API for configuring the pool.
//! - **Sessions**: A [`Session`] wraps one transaction; repository calls flush
//!   statements to it immediately, while commit/rollback stay with the caller.
//! - **Repositories**: `user`, `item`, `region`, and `image` modules expose
//!   the locate-by-key and mutate operations over the schema.
//!
//! ## Example
//!
//! ```rust,no_run
//! use lendhub_database::{Database, DatabaseError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), DatabaseError> {
//!     let db = Database::builder().url("sqlite::memory:").init().await?;
//!
//!     let mut session = db.begin().await?;
//!     let regions = lendhub_database::region::list_regions(&mut session).await?;
//!     assert!(regions.is_empty());
//!
//!     Ok(())
//! }
//! ```

mod error;
mod rows;
mod session;

pub mod image;
pub mod item;
pub mod region;
pub mod user;

pub use error::{DatabaseError, Result};
pub use rows::{ImageRow, ItemRow, RegionRow, UserRow};
pub use session::Session;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, instrument};

static MIGRATOR: Migrator = sqlx::migrate!();

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Inner state of the [`Database`] wrapper.
#[derive(Debug)]
pub struct DatabaseInner {
    pool: SqlitePool,
    url: String,
}

/// SQLite pool wrapper that hands out [`Session`] units of work.
#[derive(Debug, Clone)]
pub struct Database {
    inner: Arc<DatabaseInner>,
}

impl Database {
    /// Creates a new [`DatabaseBuilder`].
    pub fn builder() -> DatabaseBuilder {
        DatabaseBuilder::new()
    }

    /// Opens a new session (transaction) owned by the caller.
    ///
    /// The caller decides between [`Session::commit`] and
    /// [`Session::rollback`]; dropping the session rolls back.
    pub async fn begin(&self) -> Result<Session> {
        Ok(Session::new(self.inner.pool.begin().await?))
    }

    /// The connection URL this pool was opened with.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.inner.url
    }
}

/// A fluent builder for configuring and opening the SQLite pool.
#[must_use = "builders do nothing unless you call .init()"]
#[derive(Debug, Default)]
pub struct DatabaseBuilder {
    url: Option<String>,
    max_connections: Option<u32>,
}

impl DatabaseBuilder {
    /// Creates a new [`DatabaseBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the connection URL (e.g. `sqlite://lendhub.db`, `sqlite::memory:`).
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the maximum number of pooled connections.
    pub const fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = Some(max);
        self
    }

    /// Consumes the builder and opens the pool.
    ///
    /// # Process
    /// 1. **Validation**: Ensures a URL is provided.
    /// 2. **Pool**: Opens the pool with foreign keys enforced, creating the
    ///    database file when missing.
    /// 3. **Migrations**: Applies embedded schema migrations.
    ///
    /// # Errors
    /// * [`DatabaseError::Configuration`] if required parameters are missing.
    /// * [`DatabaseError::Sqlx`] if the pool cannot be opened.
    /// * [`DatabaseError::Migrate`] if a migration fails to apply.
    #[instrument(skip(self), fields(url = ?self.url))]
    pub async fn init(self) -> Result<Database> {
        let url = self
            .url
            .ok_or_else(|| DatabaseError::Configuration("URL is required".to_owned()))?;

        // An in-memory database exists per connection; more than one pooled
        // connection would each see an empty, unrelated schema.
        let max_connections = if url.contains(":memory:") {
            1
        } else {
            self.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS)
        };

        let options = SqliteConnectOptions::from_str(&url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        info!(%url, max_connections, "SQLite pool opened");

        info!("Applying database migrations...");
        MIGRATOR.run(&pool).await?;
        info!("Database migrations applied successfully");

        Ok(Database { inner: Arc::new(DatabaseInner { pool, url }) })
    }
}
