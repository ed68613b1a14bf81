//! HTTP client for Discord's public invite endpoint.
//!
//! The invite endpoint works without a bot token and, with `with_counts`,
//! returns approximate member and presence counts alongside the guild
//! summary. Rate limiting (429) is handled here with the provider-specified
//! backoff so both the interactive and bulk sync paths share one retry
//! policy.

use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::sync::SyncError;

const DISCORD_API_BASE: &str = "https://discord.com/api/v10";
const DISCORD_CDN_BASE: &str = "https://cdn.discordapp.com";

/// Retry ceiling for rate-limited invite fetches.
const MAX_RETRIES: u32 = 3;
/// Small buffer added on top of Discord's retry_after hint.
const RETRY_BUFFER: Duration = Duration::from_millis(100);

/// Guild summary embedded in an invite response.
#[derive(Debug, Clone, Deserialize)]
pub struct InviteGuild {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    pub banner: Option<String>,
}

/// Invite resolution response with counts requested.
#[derive(Debug, Clone, Deserialize)]
pub struct InviteResponse {
    pub guild: Option<InviteGuild>,
    pub approximate_member_count: Option<i32>,
    pub approximate_presence_count: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
struct RateLimitBody {
    retry_after: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct DiscordErrorBody {
    message: Option<String>,
}

/// Abstraction over the invite endpoint so the sync orchestrator can be
/// exercised in tests without the network.
pub trait InviteGateway {
    /// Resolves an invite code to its guild summary and counts.
    ///
    /// Implementations own their retry policy; a returned
    /// `SyncError::RateLimited` means retries were exhausted.
    fn fetch_invite(
        &self,
        invite_code: &str,
    ) -> impl Future<Output = Result<InviteResponse, SyncError>> + Send;
}

/// Client for Discord's invite API.
///
/// Cheap to clone; `reqwest::Client` is `Arc`-backed internally.
#[derive(Clone)]
pub struct DiscordClient {
    http: reqwest::Client,
    api_base: String,
}

impl DiscordClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self::with_api_base(http, DISCORD_API_BASE.to_string())
    }

    /// Points the client at a different API host. Tests use this to run the
    /// retry policy against a local stub.
    pub fn with_api_base(http: reqwest::Client, api_base: String) -> Self {
        Self { http, api_base }
    }
}

impl InviteGateway for DiscordClient {
    /// Fetches the invite with counts, retrying on 429.
    ///
    /// On each 429 the provider's `retry_after` (seconds, default 1) plus a
    /// 100ms buffer is slept before retrying; the third consecutive 429
    /// returns `SyncError::RateLimited` without sleeping again. 404 maps to
    /// `InviteNotFound`; any other non-success status is a non-retryable
    /// `Upstream` error.
    async fn fetch_invite(&self, invite_code: &str) -> Result<InviteResponse, SyncError> {
        let url = format!(
            "{}/invites/{}?with_counts=true",
            self.api_base, invite_code
        );

        let mut attempts = 0;

        loop {
            let res = self.http.get(&url).send().await?;
            let status = res.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                let body: RateLimitBody = res.json().await.unwrap_or_default();
                let retry_after = body.retry_after.unwrap_or(1.0);

                attempts += 1;
                if attempts >= MAX_RETRIES {
                    return Err(SyncError::RateLimited { retry_after });
                }

                tokio::time::sleep(Duration::from_secs_f64(retry_after) + RETRY_BUFFER).await;
                continue;
            }

            if status == StatusCode::NOT_FOUND {
                return Err(SyncError::InviteNotFound);
            }

            if !status.is_success() {
                let message = res
                    .json::<DiscordErrorBody>()
                    .await
                    .ok()
                    .and_then(|body| body.message)
                    .unwrap_or_else(|| status.to_string());
                return Err(SyncError::Upstream {
                    status: status.as_u16(),
                    message,
                });
            }

            return Ok(res.json::<InviteResponse>().await?);
        }
    }
}

/// Derives the CDN icon URL for a guild, if it has an icon.
///
/// Animated assets have hashes prefixed with `a_` and need the gif
/// extension; everything else is served as png. An absent hash yields no
/// URL — the caller must not fabricate one.
pub fn guild_icon_url(guild_id: &str, icon_hash: Option<&str>) -> Option<String> {
    asset_url("icons", guild_id, icon_hash, 256)
}

/// Derives the CDN banner URL for a guild, if it has a banner.
pub fn guild_banner_url(guild_id: &str, banner_hash: Option<&str>) -> Option<String> {
    asset_url("banners", guild_id, banner_hash, 1024)
}

fn asset_url(kind: &str, guild_id: &str, hash: Option<&str>, size: u32) -> Option<String> {
    hash.map(|hash| {
        let ext = if hash.starts_with("a_") { "gif" } else { "png" };
        format!(
            "{}/{}/{}/{}.{}?size={}",
            DISCORD_CDN_BASE, kind, guild_id, hash, ext, size
        )
    })
}
