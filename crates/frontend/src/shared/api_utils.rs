//! Gateway plumbing shared by every remote call.

use thiserror::Error;

/// Base URL of the remote REST API, including the `/api` prefix.
///
/// Overridable at build time (`API_BASE=https://host/api trunk build`);
/// defaults to the tunnel the bot backend is published through.
pub const API_BASE: &str = match option_env!("API_BASE") {
    Some(base) => base,
    None => "https://4bdf137143e3.ngrok-free.app/api",
};

/// Header that makes an ngrok tunnel skip its browser-warning interstitial.
/// A direct deployment just ignores it.
pub const TUNNEL_SKIP_HEADER: (&str, &str) = ("ngrok-skip-browser-warning", "true");

/// Build a full API URL from a path starting with `/`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

/// Failure taxonomy of the remote gateway.
///
/// Workflows catch these locally and turn them into toasts; nothing here is
/// allowed to escape a workflow boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// User lookup returned a non-success status.
    #[error("user not found")]
    NotFound,
    /// Category list retrieval returned a non-success status.
    #[error("list fetch failed with HTTP {0}")]
    Fetch(u16),
    /// Create or edit rejected by the server; carries the raw response body.
    #[error("{0}")]
    Validation(String),
    /// Delete returned a non-success status.
    #[error("delete failed with HTTP {0}")]
    Deletion(u16),
    /// Transport or decode failure before a status line was available.
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    /// The server-provided message, when there is one worth showing to the
    /// user instead of the generic fallback.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Validation(msg) if !msg.trim().is_empty() => Some(msg.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_base_and_path() {
        assert_eq!(api_url("/category/list"), format!("{API_BASE}/category/list"));
    }

    #[test]
    fn test_only_nonblank_validation_bodies_reach_the_user() {
        assert_eq!(
            ApiError::Validation("Nom band".to_string()).server_message(),
            Some("Nom band")
        );
        assert_eq!(ApiError::Validation("  ".to_string()).server_message(), None);
        assert_eq!(ApiError::Fetch(500).server_message(), None);
        assert_eq!(ApiError::Network("timeout".to_string()).server_message(), None);
    }
}
