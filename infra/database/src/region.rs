//! Region repository.

use crate::error::{DatabaseError, Result};
use crate::rows::RegionRow;
use crate::session::Session;

/// Lists every region visible to the session, in storage order.
pub async fn list_regions(session: &mut Session) -> Result<Vec<RegionRow>> {
    Ok(sqlx::query_as::<_, RegionRow>("SELECT id, name FROM regions")
        .fetch_all(session.conn())
        .await?)
}

/// Fetches the region with `region_id`.
pub async fn get_region(session: &mut Session, region_id: i64) -> Result<RegionRow> {
    sqlx::query_as::<_, RegionRow>("SELECT id, name FROM regions WHERE id = ?")
        .bind(region_id)
        .fetch_optional(session.conn())
        .await?
        .ok_or_else(|| DatabaseError::NotFound { entity: "region", key: region_id.to_string() })
}

/// Inserts a new region and returns the stored row.
pub async fn create_region(session: &mut Session, name: &str) -> Result<RegionRow> {
    sqlx::query_as::<_, RegionRow>("INSERT INTO regions (name) VALUES (?) RETURNING id, name")
        .bind(name)
        .fetch_one(session.conn())
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                DatabaseError::AlreadyExists { entity: "region", key: name.to_owned() }
            }
            other => other.into(),
        })
}

/// Renames the region with `region_id` and returns the updated row.
pub async fn update_region(session: &mut Session, region_id: i64, name: &str) -> Result<RegionRow> {
    sqlx::query_as::<_, RegionRow>(
        "UPDATE regions SET name = ? WHERE id = ? RETURNING id, name",
    )
    .bind(name)
    .bind(region_id)
    .fetch_optional(session.conn())
    .await?
    .ok_or_else(|| DatabaseError::NotFound { entity: "region", key: region_id.to_string() })
}

/// Deletes a loaded region within the session's transaction.
pub async fn delete_region(session: &mut Session, region: &RegionRow) -> Result<()> {
    let result = sqlx::query("DELETE FROM regions WHERE id = ?")
        .bind(region.id)
        .execute(session.conn())
        .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound { entity: "region", key: region.id.to_string() });
    }

    Ok(())
}
