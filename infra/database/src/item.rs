//! Item repository, including the like/save relationship rows.

use crate::error::{DatabaseError, Result};
use crate::rows::ItemRow;
use crate::session::Session;
use chrono::Utc;
use lendhub_domain::page::PageOptions;

const ITEM_COLUMNS: &str = "id, name, description, owner_id, created_at";

/// Inserts a new item owned by `owner_id` and returns the stored row.
pub async fn create_item(
    session: &mut Session,
    name: &str,
    description: &str,
    owner_id: i64,
) -> Result<ItemRow> {
    let sql = format!(
        "INSERT INTO items (name, description, owner_id, created_at) VALUES (?, ?, ?, ?) \
         RETURNING {ITEM_COLUMNS}"
    );

    Ok(sqlx::query_as::<_, ItemRow>(&sql)
        .bind(name)
        .bind(description)
        .bind(owner_id)
        .bind(Utc::now())
        .fetch_one(session.conn())
        .await?)
}

/// Fetches the item with `item_id`.
pub async fn get_item(session: &mut Session, item_id: i64) -> Result<ItemRow> {
    let sql = format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = ?");

    sqlx::query_as::<_, ItemRow>(&sql)
        .bind(item_id)
        .fetch_optional(session.conn())
        .await?
        .ok_or_else(|| DatabaseError::NotFound { entity: "item", key: item_id.to_string() })
}

/// Lists items ordered by identifier, honoring the page's cursor floor and
/// limit. The fuzzy-distance option is applied by the calling service, not
/// here.
pub async fn list_items(session: &mut Session, page: &PageOptions) -> Result<Vec<ItemRow>> {
    let sql = format!(
        "SELECT {ITEM_COLUMNS} FROM items \
         WHERE (?1 IS NULL OR id >= ?1) ORDER BY id LIMIT ?2"
    );

    // SQLite treats LIMIT -1 as "no limit".
    let limit = page.limit.map_or(-1_i64, i64::from);

    Ok(sqlx::query_as::<_, ItemRow>(&sql)
        .bind(page.min_item_id)
        .bind(limit)
        .fetch_all(session.conn())
        .await?)
}

/// Counts items at or above the cursor floor, ignoring the page limit.
pub async fn count_items(session: &mut Session, min_item_id: Option<i64>) -> Result<i64> {
    Ok(
        sqlx::query_scalar("SELECT COUNT(*) FROM items WHERE (?1 IS NULL OR id >= ?1)")
            .bind(min_item_id)
            .fetch_one(session.conn())
            .await?,
    )
}

/// Deletes a loaded item within the session's transaction.
///
/// Flushed immediately; commit/rollback stay with the caller. Deleting a row
/// that no longer exists is a state error.
pub async fn delete_item(session: &mut Session, item: &ItemRow) -> Result<()> {
    let result = sqlx::query("DELETE FROM items WHERE id = ?")
        .bind(item.id)
        .execute(session.conn())
        .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound { entity: "item", key: item.id.to_string() });
    }

    Ok(())
}

// --- Like / save relationship rows ---

/// Records that `user_id` likes `item_id`.
pub async fn create_item_like(session: &mut Session, user_id: i64, item_id: i64) -> Result<()> {
    insert_relation(session, "item_likes", "like", user_id, item_id).await
}

/// Removes the like row keyed by `(user_id, item_id)`.
///
/// An absent row is reported as [`DatabaseError::NotFound`].
pub async fn delete_item_like(session: &mut Session, user_id: i64, item_id: i64) -> Result<()> {
    delete_relation(session, "item_likes", "like", user_id, item_id).await
}

/// Records that `user_id` saved `item_id`.
pub async fn create_item_save(session: &mut Session, user_id: i64, item_id: i64) -> Result<()> {
    insert_relation(session, "item_saves", "save", user_id, item_id).await
}

/// Removes the save row keyed by `(user_id, item_id)`.
///
/// An absent row is reported as [`DatabaseError::NotFound`].
pub async fn delete_item_save(session: &mut Session, user_id: i64, item_id: i64) -> Result<()> {
    delete_relation(session, "item_saves", "save", user_id, item_id).await
}

async fn insert_relation(
    session: &mut Session,
    table: &str,
    entity: &'static str,
    user_id: i64,
    item_id: i64,
) -> Result<()> {
    let sql = format!("INSERT INTO {table} (user_id, item_id, created_at) VALUES (?, ?, ?)");

    sqlx::query(&sql)
        .bind(user_id)
        .bind(item_id)
        .bind(Utc::now())
        .execute(session.conn())
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                DatabaseError::AlreadyExists { entity, key: relation_key(user_id, item_id) }
            }
            other => other.into(),
        })?;

    Ok(())
}

async fn delete_relation(
    session: &mut Session,
    table: &str,
    entity: &'static str,
    user_id: i64,
    item_id: i64,
) -> Result<()> {
    let sql = format!("DELETE FROM {table} WHERE user_id = ? AND item_id = ?");

    let result = sqlx::query(&sql)
        .bind(user_id)
        .bind(item_id)
        .execute(session.conn())
        .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound { entity, key: relation_key(user_id, item_id) });
    }

    Ok(())
}

fn relation_key(user_id: i64, item_id: i64) -> String {
    format!("(user {user_id}, item {item_id})")
}
