//! Saved-items services.

use crate::error::CatalogError;
use lendhub_database::{Session, item};

/// Records that `user_id` saved `item_id`.
pub async fn add_saved_item(
    session: &mut Session,
    user_id: i64,
    item_id: i64,
) -> Result<(), CatalogError> {
    Ok(item::create_item_save(session, user_id, item_id).await?)
}

/// Removes the save relationship between `user_id` and `item_id`.
///
/// An absent relationship is propagated unchanged from the repository.
pub async fn remove_saved_item(
    session: &mut Session,
    user_id: i64,
    item_id: i64,
) -> Result<(), CatalogError> {
    Ok(item::delete_item_save(session, user_id, item_id).await?)
}
