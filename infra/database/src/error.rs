/// A specialized `Result` type for database operations.
pub type Result<T, E = DatabaseError> = std::result::Result<T, E>;

/// Errors surfaced by the persistence layer.
///
/// Storage-level failures (constraint violations, detached deletes) propagate
/// through here unmodified; no recovery is attempted at this layer.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// A row looked up by key does not exist, or a delete matched nothing.
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// A uniqueness constraint rejected an insert.
    #[error("{entity} already exists: {key}")]
    AlreadyExists { entity: &'static str, key: String },

    /// Invalid builder parameters.
    #[error("database configuration error: {0}")]
    Configuration(String),

    /// Schema migration failure during startup.
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// Any other driver-level failure.
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl DatabaseError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    #[must_use]
    pub const fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }
}
