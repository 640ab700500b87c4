use std::error::Error;

/// Base trait for all application errors
pub trait PaydeskError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type PaydeskResult<T> = Result<T, Box<dyn PaydeskError>>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Failed to read config file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl PaydeskError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigParseError { .. } | ConfigError::InvalidConfiguration { .. }
        )
    }
}
