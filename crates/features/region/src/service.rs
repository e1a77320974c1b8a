//! Region services.

use crate::error::RegionError;
use crate::schemas::{RegionCreate, RegionRead, RegionUpdate};
use lendhub_database::{Session, region};

/// Lists every region visible to the session, in storage order.
pub async fn list_regions(session: &mut Session) -> Result<Vec<RegionRead>, RegionError> {
    let rows = region::list_regions(session).await?;

    Ok(rows.into_iter().map(RegionRead::from).collect())
}

/// Fetches the region with `region_id`.
pub async fn get_region(session: &mut Session, region_id: i64) -> Result<RegionRead, RegionError> {
    Ok(region::get_region(session, region_id).await?.into())
}

/// Creates a region and returns its read model.
pub async fn create_region(
    session: &mut Session,
    create: &RegionCreate,
) -> Result<RegionRead, RegionError> {
    Ok(region::create_region(session, &create.name).await?.into())
}

/// Renames the region with `region_id`.
pub async fn update_region(
    session: &mut Session,
    region_id: i64,
    update: &RegionUpdate,
) -> Result<RegionRead, RegionError> {
    Ok(region::update_region(session, region_id, &update.name).await?.into())
}

/// Deletes the region with `region_id`.
///
/// The region is located first, then removed within the session; the deletion
/// is flushed immediately while commit stays with the caller.
pub async fn delete_region(session: &mut Session, region_id: i64) -> Result<(), RegionError> {
    let row = region::get_region(session, region_id).await?;
    region::delete_region(session, &row).await?;

    Ok(())
}
