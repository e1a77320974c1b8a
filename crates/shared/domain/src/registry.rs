//! Type-erased registry entries for feature slices.
//!
//! Each feature crate (catalog, image, ...) builds its shared state once at
//! startup and hands it over as an [`InitializedSlice`]. The server state
//! stores the entries keyed by concrete type and downcasts on access, so
//! feature crates never depend on each other.

use std::any::{Any, TypeId};
use std::fmt::Debug;

/// Startup-built feature state, shareable across request handlers.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    /// Short lowercase name of the feature, used in startup diagnostics.
    fn name(&self) -> &'static str;

    /// Upcast for downcasting back to the concrete slice type.
    fn as_any(&self) -> &dyn Any;
}

/// One registry entry: a boxed slice together with its lookup key.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    pub name: &'static str,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    /// Wraps concrete feature state, deriving the key from its type.
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), name: state.name(), state: Box::new(state) }
    }
}
