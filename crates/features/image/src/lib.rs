//! # Image Feature Slice
//!
//! A thin fetch proxy over the external imgpush image store, plus the image
//! records tying a stored name to its owner. The slice holds the reused HTTP
//! client and the store's base URL.

mod client;
mod error;
mod router;
mod schemas;

pub use crate::error::ImageError;
pub use crate::router::image_router;
pub use crate::schemas::{ImageQuery, ImageRead, ImageSize, MAX_IMAGE_SIZE, MIN_IMAGE_SIZE};

use lendhub_domain::config::ApiConfig;
use lendhub_domain::registry::{FeatureSlice, InitializedSlice};
use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug)]
struct ImagesInner {
    client: reqwest::Client,
    base_url: String,
}

/// Image feature state.
#[derive(Debug, Clone)]
pub struct Images {
    inner: Arc<ImagesInner>,
}

impl Images {
    pub(crate) fn client(&self) -> &reqwest::Client {
        &self.inner.client
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.inner.base_url
    }
}

impl FeatureSlice for Images {
    fn name(&self) -> &'static str {
        "image"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the image feature.
///
/// # Errors
/// Returns [`ImageError::Upstream`] if the HTTP client cannot be built.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, ImageError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.imgpush.timeout_seconds))
        .build()?;

    tracing::info!(url = %config.imgpush.url, "Images slice initialized");

    let inner = ImagesInner { client, base_url: config.imgpush.url.clone() };

    Ok(InitializedSlice::new(Images { inner: Arc::new(inner) }))
}
