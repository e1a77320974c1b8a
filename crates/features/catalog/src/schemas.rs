//! Wire-level request and response models for the catalog routes.

use chrono::{DateTime, Utc};
use lendhub_database::{ItemRow, UserRow};
use lendhub_domain::page::PageOptions;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Payload for creating an item.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ItemCreate {
    pub name: String,
    pub description: String,
    pub owner_id: i64,
}

/// Read model of a persisted item.
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemRead {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<ItemRow> for ItemRead {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            owner_id: row.owner_id,
            created_at: row.created_at,
        }
    }
}

/// Query parameters of the item listing route.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemListQuery {
    /// Limit the number of items returned.
    #[serde(rename = "n")]
    #[param(rename = "n")]
    pub limit: Option<u32>,
    /// Whitespace-separated words used for fuzzy search.
    #[serde(rename = "q")]
    #[param(rename = "q")]
    pub words: Option<String>,
    /// Exclude items whose words match distance exceeds this threshold.
    #[serde(rename = "mwmd")]
    #[param(rename = "mwmd")]
    pub max_words_match_distance: Option<f32>,
    /// Page cursor; only items with an identifier at or above it are returned.
    #[serde(rename = "cid")]
    #[param(rename = "cid")]
    pub min_item_id: Option<i64>,
}

impl ItemListQuery {
    /// The search words, lowercase handling left to the matcher.
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        self.words
            .as_deref()
            .map(|words| words.split_whitespace().map(str::to_owned).collect())
            .unwrap_or_default()
    }

    /// Page options with `default_limit` applied when no limit was supplied.
    #[must_use]
    pub const fn page_options(&self, default_limit: u32) -> PageOptions {
        PageOptions {
            limit: Some(match self.limit {
                Some(limit) => limit,
                None => default_limit,
            }),
            max_words_match_distance: self.max_words_match_distance,
            min_item_id: self.min_item_id,
        }
    }
}

/// Payload for creating a user.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
}

/// Read model of a persisted user.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserRead {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for UserRead {
    fn from(row: UserRow) -> Self {
        Self { id: row.id, name: row.name, email: row.email, created_at: row.created_at }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_query_uses_short_wire_names() {
        let query: ItemListQuery =
            serde_urlencoded::from_str("n=5&q=wooden+chair&mwmd=0.5&cid=42").unwrap();

        assert_eq!(query.limit, Some(5));
        assert_eq!(query.words(), vec!["wooden".to_owned(), "chair".to_owned()]);
        assert_eq!(query.max_words_match_distance, Some(0.5));
        assert_eq!(query.min_item_id, Some(42));
    }

    #[test]
    fn unset_limit_falls_back_to_the_default() {
        let query = ItemListQuery::default();
        let page = query.page_options(20);

        assert_eq!(page.limit, Some(20));
        assert_eq!(page.min_item_id, None);
        assert_eq!(page.max_words_match_distance, None);
    }
}
