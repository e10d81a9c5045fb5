//! Endpoint configuration and presentation helpers.

use std::time::Duration;

/// The users endpoint consumed when no other is configured.
pub const DEFAULT_USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

const AVATAR_API_BASE: &str = "https://api.dicebear.com/9.x/avataaars/svg";

/// Configuration for a [`Directory`](crate::Directory) instance.
///
/// No environment variables and no files are involved; the embedding
/// application constructs this directly.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// Endpoint returning the JSON user array.
    pub users_endpoint: String,
    /// Client-level timeout for the load request.
    pub request_timeout: Duration,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            users_endpoint: DEFAULT_USERS_ENDPOINT.to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl DirectoryConfig {
    /// Convenience constructor for a custom endpoint with the default
    /// timeout.
    pub fn with_endpoint(users_endpoint: impl Into<String>) -> Self {
        Self {
            users_endpoint: users_endpoint.into(),
            ..Self::default()
        }
    }
}

/// Derives the display image reference for a username.
///
/// Pure decoration helper for the presentation layer; the core never
/// fetches the image itself.
pub fn avatar_url(username: &str) -> String {
    format!("{AVATAR_API_BASE}?seed={username}")
}
