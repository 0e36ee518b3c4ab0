//! Client configuration.
//!
//! Values are baked in at build time (`option_env!`) so the web bundle
//! carries them. On desktop a runtime environment variable with the same
//! name takes precedence.
//!
//! - `FANTASTA_API_URL`: REST base URL (default `http://localhost:3000`)
//! - `FANTASTA_SOCKET_URL`: realtime server URL (default: same as the API)
//! - `FANTASTA_DOMAIN_EVENTS`: `1`/`true` to toast auction events

const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";

const BUILD_API_URL: Option<&str> = option_env!("FANTASTA_API_URL");
const BUILD_SOCKET_URL: Option<&str> = option_env!("FANTASTA_SOCKET_URL");
const BUILD_DOMAIN_EVENTS: Option<&str> = option_env!("FANTASTA_DOMAIN_EVENTS");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub socket_url: String,
    /// Show toasts for `new-session`, `new-bid` and `winner-declared`
    pub domain_events: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BACKEND_URL.to_string(),
            socket_url: DEFAULT_BACKEND_URL.to_string(),
            domain_events: false,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let api_url = setting("FANTASTA_API_URL", BUILD_API_URL)
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        let socket_url =
            setting("FANTASTA_SOCKET_URL", BUILD_SOCKET_URL).unwrap_or_else(|| api_url.clone());
        let domain_events = setting("FANTASTA_DOMAIN_EVENTS", BUILD_DOMAIN_EVENTS)
            .is_some_and(|v| parse_flag(&v));

        Self {
            api_url,
            socket_url,
            domain_events,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn setting(name: &str, build_time: Option<&'static str>) -> Option<String> {
    std::env::var(name)
        .ok()
        .or_else(|| build_time.map(str::to_string))
        .filter(|v| !v.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
fn setting(_name: &str, build_time: Option<&'static str>) -> Option<String> {
    build_time
        .map(str::to_string)
        .filter(|v| !v.trim().is_empty())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_common_truthy_values() {
        for v in ["1", "true", "TRUE", " yes ", "on"] {
            assert!(parse_flag(v), "{v} should enable");
        }
        for v in ["0", "false", "", "nope"] {
            assert!(!parse_flag(v), "{v} should not enable");
        }
    }

    #[test]
    fn default_points_socket_at_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, config.socket_url);
        assert!(!config.domain_events);
    }
}
