//! Shared constant values (OpenAPI tags, wire names).

/// OpenAPI tag for system endpoints (health, ping).
pub const SYSTEM_TAG: &str = "System";
/// OpenAPI tag for item catalog endpoints.
pub const CATALOG_TAG: &str = "Catalog";
/// OpenAPI tag for user endpoints.
pub const USERS_TAG: &str = "Users";
/// OpenAPI tag for region endpoints.
pub const REGIONS_TAG: &str = "Regions";
/// OpenAPI tag for image endpoints.
pub const IMAGES_TAG: &str = "Images";

/// Wire name of the pagination cursor parameter (`min_item_id`).
pub const CURSOR_PARAM: &str = "cid";
