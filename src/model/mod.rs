//! Domain models, operation parameter types, and wire DTOs.

pub mod admin;
pub mod api;
pub mod favorite;
pub mod server;
pub mod sync;
