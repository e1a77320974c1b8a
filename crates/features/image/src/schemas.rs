//! Wire-level request and response models for the image routes.

use chrono::{DateTime, Utc};
use lendhub_database::ImageRow;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Smallest accepted rendering size, in pixels.
pub const MIN_IMAGE_SIZE: u32 = 16;
/// Largest accepted rendering size, in pixels.
pub const MAX_IMAGE_SIZE: u32 = 1024;

/// A validated image rendering size in `[16, 1024]`.
///
/// Validation happens during deserialization, before any service code runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize(u32);

impl ImageSize {
    /// Builds a size, rejecting values outside the accepted range.
    pub fn new(size: u32) -> Result<Self, String> {
        if (MIN_IMAGE_SIZE..=MAX_IMAGE_SIZE).contains(&size) {
            Ok(Self(size))
        } else {
            Err(format!(
                "s: {size} is outside the accepted range [{MIN_IMAGE_SIZE}, {MAX_IMAGE_SIZE}]"
            ))
        }
    }

    /// The validated pixel value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl<'de> Deserialize<'de> for ImageSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let size = u32::deserialize(deserializer)?;

        Self::new(size).map_err(D::Error::custom)
    }
}

/// Query parameters of the image fetch route.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ImageQuery {
    /// Requested rendering size in pixels, within `[16, 1024]`.
    #[serde(rename = "s")]
    #[param(rename = "s", value_type = Option<u32>, minimum = 16, maximum = 1024)]
    pub size: Option<ImageSize>,
}

/// Read model of a persisted image record.
#[derive(Debug, Serialize, ToSchema)]
pub struct ImageRead {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<ImageRow> for ImageRead {
    fn from(row: ImageRow) -> Self {
        Self { id: row.id, name: row.name, owner_id: row.owner_id, created_at: row.created_at }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert!(serde_urlencoded::from_str::<ImageQuery>("s=16").is_ok());
        assert!(serde_urlencoded::from_str::<ImageQuery>("s=1024").is_ok());
        assert!(serde_urlencoded::from_str::<ImageQuery>("s=15").is_err());
        assert!(serde_urlencoded::from_str::<ImageQuery>("s=1025").is_err());
    }

    #[test]
    fn rejection_names_the_field_value_and_bounds() {
        let err = ImageSize::new(15).expect_err("out of range");

        assert!(err.contains("s:"));
        assert!(err.contains("15"));
        assert!(err.contains("[16, 1024]"));
    }

    #[test]
    fn unset_size_deserializes_as_none() {
        let query: ImageQuery = serde_urlencoded::from_str("").unwrap();
        assert_eq!(query.size, None);
    }

    #[test]
    fn size_is_accepted_under_the_short_alias_only() {
        let query: ImageQuery = serde_urlencoded::from_str("s=640").unwrap();
        assert_eq!(query.size.map(ImageSize::get), Some(640));

        // The long form is not recognized and falls through to "unset".
        let query: ImageQuery = serde_urlencoded::from_str("size=640").unwrap();
        assert_eq!(query.size, None);
    }
}
