//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.paydesk/config.toml`
//! 3. **Project config** - `./.paydesk/config.toml`
//! 4. **Environment** - `PAYDESK_BASE_URL`
//!
//! CLI flags are applied by the binaries on top of the returned config.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::defaults::{BASE_URL_ENV, CONFIG_DIR_NAME};
use crate::config::types::{ApiConfig, PaydeskConfig, UiConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Load configuration from the hierarchy of config files and the environment.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.paydesk/config.toml`)
/// 3. Project config (`./.paydesk/config.toml`)
/// 4. `PAYDESK_BASE_URL`
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed,
/// or if validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<PaydeskConfig, ConfigError> {
    let user_path = user_config_path();
    let project_path = project_config_path();

    let config = load_from_paths(user_path.as_deref(), project_path.as_deref())?;
    let config = apply_env_overrides(config);

    validate_config(&config)?;

    info!(
        event = "core.config.load_completed",
        base_url = config.api.base_url(),
    );

    Ok(config)
}

/// Merge the user and project config files (either may be absent) over defaults.
///
/// Does not validate and does not read the environment.
pub fn load_from_paths(
    user_path: Option<&Path>,
    project_path: Option<&Path>,
) -> Result<PaydeskConfig, ConfigError> {
    let mut config = PaydeskConfig::default();

    for path in [user_path, project_path].into_iter().flatten() {
        if let Some(file_config) = load_config_file(path)? {
            config = merge_configs(config, file_config);
        }
    }

    Ok(config)
}

/// Apply `PAYDESK_BASE_URL` on top of file configuration, if set and non-empty.
pub fn apply_env_overrides(mut config: PaydeskConfig) -> PaydeskConfig {
    if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
        let base_url = base_url.trim();
        if !base_url.is_empty() {
            debug!(
                event = "core.config.env_override_applied",
                variable = BASE_URL_ENV,
            );
            config.api.base_url = Some(base_url.to_string());
        }
    }
    config
}

fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join("config.toml"))
}

fn project_config_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|cwd| cwd.join(CONFIG_DIR_NAME).join("config.toml"))
}

/// Load a configuration file. Returns `Ok(None)` when the file does not exist.
fn load_config_file(path: &Path) -> Result<Option<PaydeskConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::IoError {
                path: path.display().to_string(),
                source,
            });
        }
    };

    let config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    debug!(
        event = "core.config.file_loaded",
        path = %path.display(),
    );

    Ok(Some(config))
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only if present.
pub fn merge_configs(base: PaydeskConfig, override_config: PaydeskConfig) -> PaydeskConfig {
    PaydeskConfig {
        api: ApiConfig {
            base_url: override_config.api.base_url.or(base.api.base_url),
            request_timeout_secs: override_config
                .api
                .request_timeout_secs
                .or(base.api.request_timeout_secs),
        },
        ui: UiConfig {
            message_timeout_ms: override_config
                .ui
                .message_timeout_ms
                .or(base.ui.message_timeout_ms),
        },
    }
}
