//! # Configuration System
//!
//! Hierarchical TOML configuration for paydesk.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.paydesk/config.toml` (global user preferences)
//! 3. **Project config** - `./.paydesk/config.toml` (directory-specific overrides)
//! 4. **Environment** - `PAYDESK_BASE_URL`
//! 5. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.paydesk/config.toml
//! [api]
//! base_url = "https://bit-stock-api.vercel.app"
//! request_timeout_secs = 10
//!
//! [ui]
//! message_timeout_ms = 3000
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use paydesk_core::config::PaydeskConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PaydeskConfig::load_hierarchy()?;
//!     println!("talking to {}", config.api.base_url());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{ApiConfig, PaydeskConfig, UiConfig};
pub use validation::validate_config;

impl PaydeskConfig {
    /// Load configuration from the hierarchy of config files and the environment.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
