//! User repository.

use crate::error::{DatabaseError, Result};
use crate::rows::UserRow;
use crate::session::Session;
use chrono::Utc;

/// Inserts a new user and returns the stored row.
///
/// A duplicate email is rejected with [`DatabaseError::AlreadyExists`].
pub async fn create_user(session: &mut Session, name: &str, email: &str) -> Result<UserRow> {
    sqlx::query_as::<_, UserRow>(
        "INSERT INTO users (name, email, created_at) VALUES (?, ?, ?) \
         RETURNING id, name, email, created_at",
    )
    .bind(name)
    .bind(email)
    .bind(Utc::now())
    .fetch_one(session.conn())
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            DatabaseError::AlreadyExists { entity: "user", key: email.to_owned() }
        }
        other => other.into(),
    })
}

/// Fetches the user with `user_id`.
pub async fn get_user(session: &mut Session, user_id: i64) -> Result<UserRow> {
    sqlx::query_as::<_, UserRow>(
        "SELECT id, name, email, created_at FROM users WHERE id = ?",
    )
    .bind(user_id)
    .fetch_optional(session.conn())
    .await?
    .ok_or_else(|| DatabaseError::NotFound { entity: "user", key: user_id.to_string() })
}

/// Deletes a loaded user within the session's transaction.
///
/// The delete is flushed immediately: the row is gone for reads on the same
/// session, while the surrounding transaction can still be rolled back.
/// Deleting a row that no longer exists is a state error.
pub async fn delete_user(session: &mut Session, user: &UserRow) -> Result<()> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(user.id)
        .execute(session.conn())
        .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound { entity: "user", key: user.id.to_string() });
    }

    Ok(())
}
