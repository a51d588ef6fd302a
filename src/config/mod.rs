//! Layered configuration.
//!
//! Resolution order, later layers overriding earlier ones field by field:
//!
//! 1. Built-in defaults ([`schema::DashConfig::default`])
//! 2. User global config — `~/.followdash/config.toml`
//! 3. Project local config — `.followdash.toml` in the working directory
//! 4. `FOLLOWDASH_*` environment variables (highest precedence)
//!
//! Malformed files are ignored rather than aborting: a broken config must
//! never take the dashboard down.

pub mod schema;

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

pub use schema::DashConfig;

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load the fully resolved configuration.
pub fn load() -> DashConfig {
    let mut config = DashConfig::default();

    if let Some(overlay) = load_toml_file(global_config_path()) {
        merge(&mut config, overlay);
    }

    if let Some(overlay) = load_toml_file(project_config_path()) {
        merge(&mut config, overlay);
    }

    apply_env_overrides(&mut config);

    config
}

/// Path of the user global config file.
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".followdash").join("config.toml"))
}

fn project_config_path() -> Option<PathBuf> {
    std::env::current_dir().ok().map(|d| d.join(".followdash.toml"))
}

fn load_toml_file(path: Option<PathBuf>) -> Option<ConfigOverlay> {
    let path = path?;
    let content = fs::read_to_string(&path).ok()?;
    toml::from_str(&content).ok()
}

// ---------------------------------------------------------------------------
// Field-level merge
// ---------------------------------------------------------------------------

/// A partially specified config file; only present fields override.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigOverlay {
    api: ApiOverlay,
    view: ViewOverlay,
    web: WebOverlay,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiOverlay {
    base_url: Option<String>,
    timeout_ms: Option<u64>,
    logout_path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ViewOverlay {
    default_days: Option<u32>,
    default_list: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WebOverlay {
    addr: Option<String>,
    open_browser: Option<bool>,
}

fn merge(config: &mut DashConfig, overlay: ConfigOverlay) {
    if let Some(v) = overlay.api.base_url {
        config.api.base_url = v;
    }
    if let Some(v) = overlay.api.timeout_ms {
        config.api.timeout_ms = v;
    }
    if let Some(v) = overlay.api.logout_path {
        config.api.logout_path = v;
    }
    if let Some(v) = overlay.view.default_days {
        config.view.default_days = v;
    }
    if let Some(v) = overlay.view.default_list {
        config.view.default_list = v;
    }
    if let Some(v) = overlay.web.addr {
        config.web.addr = v;
    }
    if let Some(v) = overlay.web.open_browser {
        config.web.open_browser = v;
    }
}

// ---------------------------------------------------------------------------
// Environment overrides
// ---------------------------------------------------------------------------

fn apply_env_overrides(config: &mut DashConfig) {
    if let Ok(v) = std::env::var("FOLLOWDASH_API_URL") {
        config.api.base_url = v;
    }
    if let Ok(v) = std::env::var("FOLLOWDASH_TIMEOUT_MS") {
        if let Ok(ms) = v.parse() {
            config.api.timeout_ms = ms;
        }
    }
    if let Ok(v) = std::env::var("FOLLOWDASH_LOGOUT_PATH") {
        config.api.logout_path = v;
    }
    if let Ok(v) = std::env::var("FOLLOWDASH_DAYS") {
        if let Ok(days) = v.parse() {
            config.view.default_days = days;
        }
    }
    if let Ok(v) = std::env::var("FOLLOWDASH_ADDR") {
        config.web.addr = v;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
