//! Item services.

use crate::error::CatalogError;
use crate::matching::words_match_distance;
use crate::schemas::{ItemCreate, ItemRead};
use lendhub_database::{ItemRow, Session, item};
use lendhub_domain::page::PageOptions;

/// One page of an item listing.
#[derive(Debug)]
pub struct ItemPage {
    pub items: Vec<ItemRead>,
    /// Matching items at or above the cursor floor, ignoring the limit.
    pub total_count: u64,
    /// Cursor of the page after this one, when this page came back full.
    pub next_item_id: Option<i64>,
}

/// Creates an item and returns its read model.
pub async fn create_item(
    session: &mut Session,
    create: &ItemCreate,
) -> Result<ItemRead, CatalogError> {
    let row =
        item::create_item(session, &create.name, &create.description, create.owner_id).await?;

    Ok(row.into())
}

/// Fetches the item with `item_id`.
pub async fn get_item(session: &mut Session, item_id: i64) -> Result<ItemRead, CatalogError> {
    Ok(item::get_item(session, item_id).await?.into())
}

/// Whether `row` survives the fuzzy word filter for this listing.
fn retained(row: &ItemRow, words: &[String], max_distance: Option<f32>) -> bool {
    match max_distance {
        Some(max_distance) if !words.is_empty() => {
            let text = format!("{} {}", row.name, row.description);
            words_match_distance(words, &text) <= max_distance
        }
        _ => true,
    }
}

/// Counts every item the listing matches, ignoring the page limit.
///
/// Without a fuzzy filter this is a single aggregate query over the cursor
/// floor. With one, the rows above the floor are walked through the same
/// filter the page itself uses.
async fn count_matching_items(
    session: &mut Session,
    words: &[String],
    page: &PageOptions,
) -> Result<u64, CatalogError> {
    if page.max_words_match_distance.is_none() || words.is_empty() {
        let count = item::count_items(session, page.min_item_id).await?;
        return Ok(u64::try_from(count).unwrap_or(0));
    }

    let unbounded =
        PageOptions { limit: None, max_words_match_distance: None, min_item_id: page.min_item_id };
    let rows = item::list_items(session, &unbounded).await?;

    let matching = rows
        .iter()
        .filter(|row| retained(row, words, page.max_words_match_distance))
        .count();

    Ok(matching as u64)
}

/// Lists items honoring the page cursor, limit, and fuzzy word filter.
///
/// The repository applies the cursor floor and the limit; the fuzzy filter is
/// applied here, after truncation, so a filtered page may hold fewer rows
/// than the limit. The next cursor is offered only when the unfiltered page
/// was full. `total_count` reports every matching item above the floor, not
/// just the page's share.
pub async fn list_items(
    session: &mut Session,
    words: &[String],
    page: &PageOptions,
) -> Result<ItemPage, CatalogError> {
    let rows = item::list_items(session, page).await?;
    let total_count = count_matching_items(session, words, page).await?;

    let full_page = page.limit.is_some_and(|limit| rows.len() as u64 == u64::from(limit));
    let next_item_id = if full_page { rows.last().map(|row| row.id + 1) } else { None };

    let items = rows
        .into_iter()
        .filter(|row| retained(row, words, page.max_words_match_distance))
        .map(ItemRead::from)
        .collect();

    Ok(ItemPage { items, total_count, next_item_id })
}

/// Deletes the item with `item_id`.
///
/// The item is located first, then removed within the session; the deletion
/// is flushed immediately while commit stays with the caller.
pub async fn delete_item(session: &mut Session, item_id: i64) -> Result<(), CatalogError> {
    let row = item::get_item(session, item_id).await?;
    item::delete_item(session, &row).await?;

    Ok(())
}
