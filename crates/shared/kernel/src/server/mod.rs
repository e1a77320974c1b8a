//! Server-side building blocks: shared state, error envelope, system routes.

pub mod error;
mod health;
pub mod router;
pub mod state;

pub use error::{ApiError, ErrorBody};
pub use state::{ApiState, ApiStateBuilder, ApiStateError};
