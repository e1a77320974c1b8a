//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it provides config loading, the shared API
//! state, the system router, and the web helpers (query-string rewrite,
//! pagination links) the feature slices build on.

pub mod config;
pub mod prelude;
pub mod server;
pub mod web;

pub use lendhub_domain as domain;
