//! HTTP API controllers.
//!
//! Handlers stay thin: extract, authenticate through `AuthGuard`, delegate
//! to a service, and shape the response. Error mapping lives on `AppError`.

pub mod admin;
pub mod favorite;
pub mod server;
pub mod sync;
