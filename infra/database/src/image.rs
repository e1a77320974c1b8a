//! Image record repository.
//!
//! Only the metadata lives here; the binary is stored by the external image
//! service and fetched through the proxy client.

use crate::error::{DatabaseError, Result};
use crate::rows::ImageRow;
use crate::session::Session;
use chrono::Utc;

/// Inserts a new image record and returns the stored row.
pub async fn create_image(session: &mut Session, name: &str, owner_id: i64) -> Result<ImageRow> {
    sqlx::query_as::<_, ImageRow>(
        "INSERT INTO images (name, owner_id, created_at) VALUES (?, ?, ?) \
         RETURNING id, name, owner_id, created_at",
    )
    .bind(name)
    .bind(owner_id)
    .bind(Utc::now())
    .fetch_one(session.conn())
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            DatabaseError::AlreadyExists { entity: "image", key: name.to_owned() }
        }
        other => other.into(),
    })
}

/// Fetches the image record stored under `name`.
pub async fn get_image(session: &mut Session, name: &str) -> Result<ImageRow> {
    sqlx::query_as::<_, ImageRow>(
        "SELECT id, name, owner_id, created_at FROM images WHERE name = ?",
    )
    .bind(name)
    .fetch_optional(session.conn())
    .await?
    .ok_or_else(|| DatabaseError::NotFound { entity: "image", key: name.to_owned() })
}
