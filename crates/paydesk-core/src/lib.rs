//! paydesk-core: Core library for company payment-block administration
//!
//! This library holds everything the dashboard and the CLI share: the
//! company domain types, the HTTP client for the companies API, error
//! types, configuration loading and logging setup.
//!
//! # Main Entry Points
//!
//! - [`companies`] - Company types and the `CompanyApi` client
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging initialization

pub mod companies;
pub mod config;
pub mod errors;
pub mod events;
pub mod logging;

pub use companies::{ApiError, ApiOperation, Company, CompanyApi, CompanyId, HttpCompanyApi};
pub use config::{ApiConfig, PaydeskConfig, UiConfig};
pub use errors::{ConfigError, PaydeskError};

pub use logging::{init_file_logging, init_logging};
