//! Web-facing helpers shared by the routers: the ordered query-parameter
//! multi-map and pagination link headers.

pub mod links;
pub mod query;

pub use links::{X_TOTAL_COUNT, next_page_link};
pub use query::{QueryPairs, set_query_param};
