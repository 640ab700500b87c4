//! Configuration validation.

use crate::config::types::PaydeskConfig;
use crate::errors::ConfigError;

/// Validate the merged configuration.
///
/// # Errors
///
/// - base URL is not an absolute `http`/`https` URL
/// - request timeout is set to zero
/// - message timeout is zero
pub fn validate_config(config: &PaydeskConfig) -> Result<(), ConfigError> {
    validate_base_url(config.api.base_url())?;

    if config.api.request_timeout_secs == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "api.request_timeout_secs must be greater than 0".to_string(),
        });
    }

    if config.ui.message_timeout_ms == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "ui.message_timeout_ms must be greater than 0".to_string(),
        });
    }

    Ok(())
}

fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let url = reqwest::Url::parse(base_url).map_err(|e| ConfigError::InvalidConfiguration {
        message: format!("api.base_url '{}' is not a valid URL: {}", base_url, e),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidConfiguration {
            message: format!(
                "api.base_url '{}' must use http or https, got '{}'",
                base_url, other
            ),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{ApiConfig, UiConfig};

    fn config_with_url(url: &str) -> PaydeskConfig {
        PaydeskConfig {
            api: ApiConfig {
                base_url: Some(url.to_string()),
                request_timeout_secs: None,
            },
            ui: UiConfig::default(),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&PaydeskConfig::default()).is_ok());
    }

    #[test]
    fn test_base_url_with_path_is_valid() {
        assert!(validate_config(&config_with_url("http://localhost:8080/api")).is_ok());
    }

    #[test]
    fn test_relative_base_url_rejected() {
        let err = validate_config(&config_with_url("companies.example.com")).unwrap_err();
        assert!(err.to_string().contains("not a valid URL"));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let err = validate_config(&config_with_url("ftp://example.com")).unwrap_err();
        assert!(err.to_string().contains("must use http or https"));
    }

    #[test]
    fn test_zero_request_timeout_rejected() {
        let mut config = PaydeskConfig::default();
        config.api.request_timeout_secs = Some(0);
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("request_timeout_secs"));
    }

    #[test]
    fn test_zero_message_timeout_rejected() {
        let mut config = PaydeskConfig::default();
        config.ui.message_timeout_ms = Some(0);
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("message_timeout_ms"));
    }
}
