//! Wire-level request and response models for the region routes.

use lendhub_database::RegionRow;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payload for creating a region.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegionCreate {
    pub name: String,
}

/// Payload for renaming a region.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegionUpdate {
    pub name: String,
}

/// Read model of a persisted region.
#[derive(Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct RegionRead {
    pub id: i64,
    pub name: String,
}

impl From<RegionRow> for RegionRead {
    fn from(row: RegionRow) -> Self {
        Self { id: row.id, name: row.name }
    }
}
