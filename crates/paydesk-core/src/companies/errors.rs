use std::fmt;

use crate::errors::PaydeskError;

/// The API call that failed, used to pick the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOperation {
    ListCompanies,
    CreateCompany,
    UpdateCompany,
}

impl ApiOperation {
    /// Message shown to the user when this operation fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            ApiOperation::ListCompanies => "Failed to load companies. Please try again.",
            ApiOperation::CreateCompany => "Failed to create company. Please try again.",
            ApiOperation::UpdateCompany => "Failed to update company. Please try again.",
        }
    }
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ApiOperation::ListCompanies => "load companies",
            ApiOperation::CreateCompany => "create company",
            ApiOperation::UpdateCompany => "update company",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx status, transport failure, or an undecodable success body.
    #[error("Failed to {operation}: {reason}")]
    RequestFailed {
        operation: ApiOperation,
        /// HTTP status when the server answered at all.
        status: Option<u16>,
        reason: String,
        /// Response body of a failed request, truncated.
        detail: Option<String>,
    },

    #[error("Invalid API base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },
}

impl ApiError {
    pub fn operation(&self) -> Option<ApiOperation> {
        match self {
            ApiError::RequestFailed { operation, .. } => Some(*operation),
            ApiError::InvalidBaseUrl { .. } => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status, .. } => *status,
            ApiError::InvalidBaseUrl { .. } => None,
        }
    }
}

impl PaydeskError for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            ApiError::RequestFailed { .. } => "API_REQUEST_FAILED",
            ApiError::InvalidBaseUrl { .. } => "API_INVALID_BASE_URL",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ApiError::InvalidBaseUrl { .. })
    }
}
