//! Tracker domain — the registry of social profiles forwarded to chat.
//!
//! Only the registry and the new-post decision live here; the social API
//! client itself is an external collaborator.

pub mod state;

use serde::{Deserialize, Serialize};

pub use state::ProfileRegistry;

/// One tracked profile under a user-assigned name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedProfile {
    pub url: String,
    /// Id of the most recent post already forwarded, for dedup.
    #[serde(default)]
    pub last_post_id: Option<String>,
}

impl TrackedProfile {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), last_post_id: None }
    }
}

/// Extract the handle from a twitter.com / x.com profile or status URL.
pub fn username_from_url(url: &str) -> Option<&str> {
    let rest = ["twitter.com/", "x.com/"]
        .iter()
        .find_map(|host| url.find(host).map(|i| &url[i + host.len()..]))?;
    let end = rest
        .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .unwrap_or(rest.len());
    let name = &rest[..end];
    (!name.is_empty()).then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_from_profile_url() {
        assert_eq!(
            username_from_url("https://twitter.com/some_handle"),
            Some("some_handle")
        );
        assert_eq!(username_from_url("https://x.com/another1"), Some("another1"));
    }

    #[test]
    fn test_username_from_status_url() {
        assert_eq!(
            username_from_url("https://twitter.com/some_handle/status/12345"),
            Some("some_handle")
        );
    }

    #[test]
    fn test_username_with_query() {
        assert_eq!(
            username_from_url("https://x.com/some_handle?s=20"),
            Some("some_handle")
        );
    }

    #[test]
    fn test_invalid_urls() {
        assert_eq!(username_from_url("https://example.com/whoever"), None);
        assert_eq!(username_from_url("https://twitter.com/"), None);
    }
}
