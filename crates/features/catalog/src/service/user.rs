//! User services.

use crate::error::CatalogError;
use crate::schemas::{UserCreate, UserRead};
use lendhub_database::{Session, user};

/// Creates a user and returns its read model.
pub async fn create_user(
    session: &mut Session,
    create: &UserCreate,
) -> Result<UserRead, CatalogError> {
    Ok(user::create_user(session, &create.name, &create.email).await?.into())
}

/// Fetches the user with `user_id`.
pub async fn get_user(session: &mut Session, user_id: i64) -> Result<UserRead, CatalogError> {
    Ok(user::get_user(session, user_id).await?.into())
}

/// Deletes the user with `user_id`.
///
/// The user is located first, then removed within the session; the deletion
/// is flushed immediately while commit stays with the caller.
pub async fn delete_user(session: &mut Session, user_id: i64) -> Result<(), CatalogError> {
    let row = user::get_user(session, user_id).await?;
    user::delete_user(session, &row).await?;

    Ok(())
}
