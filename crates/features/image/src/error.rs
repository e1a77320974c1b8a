use axum::response::{IntoResponse, Response};
use lendhub_database::DatabaseError;
use lendhub_kernel::server::ApiError;

/// A specialized error enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// The external image store has no image under this name.
    #[error("image not found: {name}")]
    NotFound { name: String },
    /// Failures talking to the external image store.
    #[error("image store request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    /// Storage-layer failures, propagated unmodified.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<ImageError> for ApiError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::NotFound { .. } => Self::not_found(err.to_string()),
            ImageError::Upstream(_) => Self::bad_gateway(err.to_string()),
            ImageError::Database(err) => err.into(),
        }
    }
}

impl IntoResponse for ImageError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}
