//! HTTP client for the external imgpush image store.

use crate::Images;
use crate::error::ImageError;
use crate::schemas::ImageSize;
use axum::http::StatusCode;

impl Images {
    /// URL of the stored image `name`, optionally resized.
    ///
    /// The store keeps JPEG renditions and resizes through its `w` query
    /// parameter.
    #[must_use]
    pub fn image_url(&self, name: &str, size: Option<ImageSize>) -> String {
        let base = self.base_url().trim_end_matches('/');

        match size {
            Some(size) => format!("{base}/{name}.jpg?w={}", size.get()),
            None => format!("{base}/{name}.jpg"),
        }
    }

    /// Fetches the raw JPEG bytes of the stored image `name`.
    ///
    /// # Errors
    /// * [`ImageError::NotFound`] when the store answers 404.
    /// * [`ImageError::Upstream`] for any other failing response or transport
    ///   error.
    pub async fn fetch_image(
        &self,
        name: &str,
        size: Option<ImageSize>,
    ) -> Result<Vec<u8>, ImageError> {
        let url = self.image_url(name, size);
        let response = self.client().get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ImageError::NotFound { name: name.to_owned() });
        }

        let bytes = response.error_for_status()?.bytes().await?;

        Ok(bytes.to_vec())
    }
}
