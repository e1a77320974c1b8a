use axum::response::{IntoResponse, Response};
use lendhub_database::DatabaseError;
use lendhub_kernel::server::{ApiError, ApiStateError};

/// A specialized error enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Storage-layer failures, propagated unmodified.
    #[error(transparent)]
    Database(#[from] DatabaseError),
    /// Shared-state lookups that cannot be satisfied.
    #[error(transparent)]
    State(#[from] ApiStateError),
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Database(err) => err.into(),
            CatalogError::State(err) => err.into(),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}
