//! Built-in configuration defaults.

/// Base URL of the companies API when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://bit-stock-api.vercel.app";

/// How long a transient status message stays visible.
pub const DEFAULT_MESSAGE_TIMEOUT_MS: u64 = 3000;

/// Environment variable that overrides the configured base URL.
pub const BASE_URL_ENV: &str = "PAYDESK_BASE_URL";

/// Directory name (under home or the current directory) holding config.toml.
pub const CONFIG_DIR_NAME: &str = ".paydesk";
