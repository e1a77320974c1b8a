//! Ergonomic re-exports for slice crates.

pub use crate::server::error::{ApiError, ErrorBody};
pub use crate::server::state::{ApiState, ApiStateBuilder};
pub use crate::web::query::{QueryPairs, set_query_param};
pub use lendhub_domain::page::PageOptions;
