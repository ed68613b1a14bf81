//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization via a builder pattern
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let server = factory::server::ServerFactory::new(&db)
//!     .link("https://discord.gg/abc123")
//!     .is_partner(true)
//!     .build()
//!     .await?;
//!
//! let favorite = factory::create_favorite(&db, "user-1", &server.id).await?;
//! ```

pub mod admin_user;
pub mod favorite;
pub mod growth_history;
pub mod helpers;
pub mod server;

// Re-export commonly used factory functions for concise usage
pub use admin_user::create_admin_user;
pub use favorite::create_favorite;
pub use growth_history::create_growth_sample;
pub use server::create_server;
