//! Database repository layer for all domain entities.
//!
//! Repository structs handle database operations (CRUD) for each domain in
//! the application. Repositories use SeaORM entity models internally and
//! return domain models to keep the data layer separate from business logic.

pub mod admin_user;
pub mod favorite;
pub mod growth_history;
pub mod server;
pub mod sync_status;

#[cfg(test)]
mod test;
