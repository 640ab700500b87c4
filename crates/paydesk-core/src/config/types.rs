//! Configuration type definitions for paydesk.
//!
//! These types are serialized/deserialized from TOML config files. Fields a
//! later config file may override are `Option`s so merging can tell "unset"
//! apart from "set to the default".
//!
//! # Example Configuration
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3000"
//!
//! [ui]
//! message_timeout_ms = 5000
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Main configuration loaded from TOML config files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaydeskConfig {
    /// Remote companies API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Dashboard settings
    #[serde(default)]
    pub ui: UiConfig,
}

/// Remote companies API configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the `/companies` endpoints hang off.
    /// Default: https://bit-stock-api.vercel.app
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Whole-request timeout in seconds. Unset means transport defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl ApiConfig {
    /// Effective base URL, falling back to the built-in default.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(defaults::DEFAULT_BASE_URL)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Dashboard configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long a status message stays on screen, in milliseconds.
    /// Default: 3000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_timeout_ms: Option<u64>,
}

impl UiConfig {
    pub fn message_timeout(&self) -> Duration {
        Duration::from_millis(
            self.message_timeout_ms
                .unwrap_or(defaults::DEFAULT_MESSAGE_TIMEOUT_MS),
        )
    }
}
