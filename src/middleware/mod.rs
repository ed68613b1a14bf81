//! Request middleware: session wrappers and authorization guards.

pub mod auth;
pub mod session;
