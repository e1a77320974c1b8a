//! Row types returned by the repositories.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A persisted user account.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// A persisted catalog item.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ItemRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
}

/// A persisted region.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct RegionRow {
    pub id: i64,
    pub name: String,
}

/// A persisted image record (the binary itself lives in imgpush).
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ImageRow {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
}
