//! Companies: the domain entity and the client for the remote companies API.

pub mod client;
pub mod errors;
pub mod http;
pub mod types;

pub use client::CompanyApi;
pub use errors::{ApiError, ApiOperation};
pub use http::HttpCompanyApi;
pub use types::{Company, CompanyId, ToggleAction};
