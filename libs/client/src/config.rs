use std::time::Duration;

/// Default store address for loopback and LAN development setups.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// Default per-request timeout; a timeout is treated exactly like any
/// other transport failure.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

const API_URL_ENV: &str = "TAPLY_API_URL";

/// Client-side configuration: where the profile store lives and how long
/// to wait for it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Resolve the base URL once at startup from the execution
    /// environment: `origin_host` is the host the consumer itself is
    /// served from, `TAPLY_API_URL` supplies the externally configured
    /// address for everything that is not a local-network setup.
    pub fn from_env(origin_host: Option<&str>) -> Self {
        let configured = std::env::var(API_URL_ENV).ok();
        Self {
            base_url: resolve_base_url(origin_host, configured.as_deref()),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Pick the store address: local-network origins get the loopback default,
/// everything else uses the configured URL (scheme-normalized), falling
/// back to the loopback default when nothing is configured.
pub fn resolve_base_url(origin_host: Option<&str>, configured: Option<&str>) -> String {
    if let Some(host) = origin_host {
        if host == "localhost" || host == "127.0.0.1" || host.starts_with("192.168.") {
            return DEFAULT_BASE_URL.to_string();
        }
    }

    match configured {
        Some(url) if !url.trim().is_empty() => normalize_scheme(url.trim()),
        _ => DEFAULT_BASE_URL.to_string(),
    }
}

fn normalize_scheme(url: &str) -> String {
    if url.contains("://") {
        url.trim_end_matches('/').to_string()
    } else {
        format!("http://{}", url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loopback_origin_uses_local_default() {
        assert_eq!(
            resolve_base_url(Some("localhost"), Some("https://api.example.com")),
            DEFAULT_BASE_URL
        );
        assert_eq!(
            resolve_base_url(Some("192.168.1.42"), Some("https://api.example.com")),
            DEFAULT_BASE_URL
        );
    }

    #[test]
    fn external_origin_uses_configured_url() {
        assert_eq!(
            resolve_base_url(Some("cards.example.com"), Some("https://api.example.com")),
            "https://api.example.com"
        );
    }

    #[test]
    fn missing_scheme_is_normalized() {
        assert_eq!(
            resolve_base_url(None, Some("api.example.com")),
            "http://api.example.com"
        );
    }

    #[test]
    fn unconfigured_falls_back_to_default() {
        assert_eq!(resolve_base_url(None, None), DEFAULT_BASE_URL);
        assert_eq!(resolve_base_url(Some("cards.example.com"), None), DEFAULT_BASE_URL);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        assert_eq!(
            resolve_base_url(None, Some("https://api.example.com/")),
            "https://api.example.com"
        );
    }
}
