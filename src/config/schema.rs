//! Configuration schema and defaults.
//!
//! Maps to `~/.followdash/config.toml` and `./.followdash.toml`. Every field
//! has a built-in default; users only set what they want to override.

use serde::{Deserialize, Serialize};

use crate::view::error::DEFAULT_LOGOUT_PATH;

/// Top-level configuration: `[api]`, `[view]`, and `[web]` sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashConfig {
    pub api: ApiConfig,
    pub view: ViewConfig,
    pub web: WebConfig,
}

// ---------------------------------------------------------------------------
// [api]
// ---------------------------------------------------------------------------

/// Where the followme backend lives and how to talk to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the backend serving `/data/...`.
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Re-authentication path used on 401.
    pub logout_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_ms: 10_000,
            logout_path: DEFAULT_LOGOUT_PATH.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// [view]
// ---------------------------------------------------------------------------

/// Defaults for what the views show before the user picks anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Period the dashboard aggregates over when none is given.
    pub default_days: u32,
    /// Listing kind the day view opens with.
    pub default_list: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            // the backend's own default period
            default_days: 3,
            default_list: "followed".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// [web]
// ---------------------------------------------------------------------------

/// Local web view settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// Bind address for `followdash web`.
    pub addr: String,
    /// Open the default browser on startup.
    pub open_browser: bool,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:9787".to_string(),
            open_browser: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let cfg = DashConfig::default();
        assert_eq!(cfg.api.base_url, "http://localhost:8080");
        assert_eq!(cfg.api.timeout_ms, 10_000);
        assert_eq!(cfg.api.logout_path, "/auth/logout");
        assert_eq!(cfg.view.default_days, 3);
        assert_eq!(cfg.view.default_list, "followed");
        assert_eq!(cfg.web.addr, "127.0.0.1:9787");
        assert!(cfg.web.open_browser);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let cfg: DashConfig = toml::from_str(
            r#"
            [api]
            base_url = "https://follow.example.com"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.api.base_url, "https://follow.example.com");
        assert_eq!(cfg.api.timeout_ms, 10_000);
        assert_eq!(cfg.view.default_days, 3);
    }

    #[test]
    fn round_trips_through_toml() {
        let cfg = DashConfig::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: DashConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.api.base_url, cfg.api.base_url);
        assert_eq!(back.web.addr, cfg.web.addr);
    }
}
