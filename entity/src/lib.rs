//! SeaORM entity definitions for the server directory database.

pub mod admin_user;
pub mod favorite;
pub mod growth_history;
pub mod server;
pub mod sync_status;

pub mod prelude {
    pub use super::admin_user::Entity as AdminUser;
    pub use super::favorite::Entity as Favorite;
    pub use super::growth_history::Entity as GrowthHistory;
    pub use super::server::Entity as Server;
    pub use super::sync_status::Entity as SyncStatus;
}
