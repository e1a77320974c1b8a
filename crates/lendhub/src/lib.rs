//! Facade crate for `LendHub` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Call [`init`] to register feature slices; extend as new slices appear.
//! - Merge the feature routers from [`features`] into the server router.

pub use lendhub_domain as domain;
use lendhub_domain::config::ApiConfig;
pub use lendhub_kernel as kernel;

pub mod server {
    pub mod router {
        pub use lendhub_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use lendhub_catalog as catalog;
    pub use lendhub_image as image;
    pub use lendhub_region as region;

    /// Build-time enabled features.
    pub const ENABLED: &[&str] = &["catalog", "region", "image"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features for server mode.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    config: &ApiConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Catalog
    slices.push(features::catalog::init(config));

    // Images (external store proxy)
    slices.push(features::image::init(config)?);

    // Regions register no state; they only contribute routes.

    Ok(slices)
}
