//! Discord invite gateway: invite-code resolution, the rate-limit-aware
//! invite API client, and CDN asset URL derivation.

pub mod client;
pub mod invite;

pub use client::{DiscordClient, InviteGateway};
