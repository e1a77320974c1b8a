//! Region feature slice: reference data describing where items circulate.
//!
//! Regions carry no per-request state, so this slice registers nothing in the
//! shared state and only contributes routes.

mod error;
mod router;
mod schemas;
pub mod service;

pub use crate::error::RegionError;
pub use crate::router::region_router;
pub use crate::schemas::{RegionCreate, RegionRead, RegionUpdate};
