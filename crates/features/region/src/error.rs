use axum::response::{IntoResponse, Response};
use lendhub_database::DatabaseError;
use lendhub_kernel::server::ApiError;

/// A specialized error enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum RegionError {
    /// Storage-layer failures, propagated unmodified.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<RegionError> for ApiError {
    fn from(err: RegionError) -> Self {
        match err {
            RegionError::Database(err) => err.into(),
        }
    }
}

impl IntoResponse for RegionError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}
