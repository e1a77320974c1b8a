//! # Catalog Feature Slice
//!
//! Items, their owners, and the like/save relationship rows. The slice keeps
//! the listing defaults; all persistent state lives behind the session the
//! handlers open per request.

mod error;
mod matching;
mod router;
mod schemas;
pub mod service;

pub use crate::error::CatalogError;
pub use crate::router::catalog_router;
pub use crate::schemas::{ItemCreate, ItemListQuery, ItemRead, UserCreate, UserRead};

use lendhub_domain::config::ApiConfig;
use lendhub_domain::registry::{FeatureSlice, InitializedSlice};
use std::any::Any;
use std::sync::Arc;

#[derive(Debug)]
struct CatalogInner {
    default_page_size: u32,
}

/// Catalog feature state.
#[derive(Debug, Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

impl Catalog {
    /// Page size applied when a listing request carries no explicit limit.
    #[must_use]
    pub fn default_page_size(&self) -> u32 {
        self.inner.default_page_size
    }
}

impl FeatureSlice for Catalog {
    fn name(&self) -> &'static str {
        "catalog"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the catalog feature.
pub fn init(config: &ApiConfig) -> InitializedSlice {
    tracing::info!("Catalog slice initialized");

    let inner = CatalogInner { default_page_size: config.catalog.default_page_size };

    InitializedSlice::new(Catalog { inner: Arc::new(inner) })
}
