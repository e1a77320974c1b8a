//! Pagination parameters for bounded, filtered listings.

use serde::{Deserialize, Serialize};

/// Options on a queried page of results.
///
/// Every field is independently optional; `None` always means "no constraint",
/// never "zero". The type itself enforces nothing; range checks, if any, are
/// the consuming service's responsibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageOptions {
    /// Truncate the result collection to at most this many elements.
    pub limit: Option<u32>,
    /// Exclude results whose fuzzy-match distance from the search term
    /// exceeds this threshold.
    pub max_words_match_distance: Option<f32>,
    /// Include only results with an identifier greater than or equal to
    /// this cursor floor.
    pub min_item_id: Option<i64>,
}

impl PageOptions {
    /// A page with only a limit set.
    #[must_use]
    pub const fn with_limit(limit: u32) -> Self {
        Self { limit: Some(limit), max_words_match_distance: None, min_item_id: None }
    }
}
