use super::query::{QueryPairs, set_query_param};

/// Response header carrying the total number of matching rows.
pub const X_TOTAL_COUNT: &str = "x-total-count";

/// Builds an RFC 8288 `Link` header value pointing at the next page.
///
/// The next-page URL keeps the caller's query parameters and rewrites each
/// `(key, value)` cursor pair on top of them, so repeated pagination never
/// accumulates duplicate cursor keys.
#[must_use]
pub fn next_page_link(path: &str, query: &QueryPairs, cursor: &[(&str, String)]) -> String {
    let next = cursor
        .iter()
        .fold(query.clone(), |acc, (key, value)| set_query_param(&acc, key, value));

    format!("<{path}?{next}>; rel=\"next\"")
}
