//! Invite-code extraction from stored invite references.

use url::Url;

/// Extracts the invite code from a stored link value.
///
/// Accepts any of Discord's invite-link shapes — `https://discord.gg/code`,
/// `https://discord.com/invite/code`, scheme-less `discord.gg/code`, or a
/// bare `code`. The value is untrusted; parsing failures degrade to naive
/// splitting and the function never panics.
///
/// # Arguments
/// - `link` - The stored invite reference
///
/// # Returns
/// The extracted code, possibly empty. An empty result means the record
/// cannot be synced and the caller must skip it, not crash.
pub fn extract_invite_code(link: &str) -> String {
    let link = link.trim();

    if !link.contains('/') {
        return link.to_string();
    }

    let with_scheme = if link.starts_with("http://") || link.starts_with("https://") {
        link.to_string()
    } else {
        format!("https://{}", link)
    };

    match Url::parse(&with_scheme) {
        Ok(url) => url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default()
            .to_string(),
        Err(_) => link.rsplit('/').next().unwrap_or_default().to_string(),
    }
}
