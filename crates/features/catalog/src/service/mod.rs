//! Service layer: thin orchestration between the routes and the repository.

pub mod item;
pub mod liked;
pub mod saved;
pub mod user;
