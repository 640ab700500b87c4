//! reqwest-backed implementation of [`CompanyApi`].

use reqwest::{RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::client::CompanyApi;
use super::errors::{ApiError, ApiOperation};
use super::types::{Company, CompanyId};
use crate::config::ApiConfig;

/// Longest response body kept on a failed request.
const MAX_ERROR_DETAIL_CHARS: usize = 512;

/// HTTP client for the companies API.
///
/// Cheap to clone; the underlying `reqwest::Client` pools connections.
#[derive(Debug, Clone)]
pub struct HttpCompanyApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpCompanyApi {
    /// Build a client from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = parse_base_url(config.base_url())?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            warn!(
                event = "core.api.client_build_failed",
                error = %e,
                "Falling back to default HTTP client settings"
            );
            reqwest::Client::new()
        });

        debug!(event = "core.api.client_created", base_url = %base_url);

        Ok(Self { client, base_url })
    }

    /// Build a client for the given base URL with transport defaults.
    pub fn with_base_url(base_url: &str) -> Result<Self, ApiError> {
        Self::new(&ApiConfig {
            base_url: Some(base_url.to_string()),
            request_timeout_secs: None,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL, keeping any base path prefix.
    /// Segments are percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                message: "URL cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request and turn any non-2xx status into `RequestFailed`.
    async fn execute(
        &self,
        operation: ApiOperation,
        request: RequestBuilder,
    ) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed {
                operation,
                status: None,
                reason: e.to_string(),
                detail: None,
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let detail = response
            .text()
            .await
            .ok()
            .map(|body| truncate_detail(body.trim()))
            .filter(|body| !body.is_empty());

        Err(ApiError::RequestFailed {
            operation,
            status: Some(status.as_u16()),
            reason: format!("HTTP {}", status),
            detail,
        })
    }

    async fn decode<T: DeserializeOwned>(
        operation: ApiOperation,
        response: Response,
    ) -> Result<T, ApiError> {
        let status = response.status().as_u16();
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::RequestFailed {
                operation,
                status: Some(status),
                reason: format!("invalid response body: {}", e),
                detail: None,
            })
    }
}

impl CompanyApi for HttpCompanyApi {
    async fn list_companies(&self) -> Result<Vec<Company>, ApiError> {
        let operation = ApiOperation::ListCompanies;
        let url = self.endpoint(&["companies"])?;
        info!(event = "core.api.list_started", url = %url);

        let result = async {
            let response = self.execute(operation, self.client.get(url)).await?;
            Self::decode::<Vec<Company>>(operation, response).await
        }
        .await;

        match &result {
            Ok(companies) => info!(event = "core.api.list_completed", count = companies.len()),
            Err(e) => log_failure(e),
        }
        result
    }

    async fn create_company(&self, name: &str) -> Result<Company, ApiError> {
        let operation = ApiOperation::CreateCompany;
        let url = self.endpoint(&["companies"])?;
        info!(event = "core.api.create_started", name = name);

        let body = serde_json::json!({ "name": name });
        let result = async {
            let response = self
                .execute(operation, self.client.post(url).json(&body))
                .await?;
            Self::decode::<Company>(operation, response).await
        }
        .await;

        match &result {
            Ok(company) => info!(
                event = "core.api.create_completed",
                company_id = %company.id,
                is_paid = company.is_paid
            ),
            Err(e) => log_failure(e),
        }
        result
    }

    async fn set_paid_status(&self, id: &CompanyId, is_paid: bool) -> Result<(), ApiError> {
        let operation = ApiOperation::UpdateCompany;
        let url = self.endpoint(&["companies", id.as_str()])?;
        info!(
            event = "core.api.set_paid_started",
            company_id = %id,
            is_paid = is_paid
        );

        let body = serde_json::json!({ "isPaid": is_paid });
        // The success body is not used
        let result = self
            .execute(operation, self.client.patch(url).json(&body))
            .await
            .map(|_| ());

        match &result {
            Ok(()) => info!(
                event = "core.api.set_paid_completed",
                company_id = %id,
                is_paid = is_paid
            ),
            Err(e) => log_failure(e),
        }
        result
    }
}

fn parse_base_url(base_url: &str) -> Result<Url, ApiError> {
    let url = Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl {
        url: base_url.to_string(),
        message: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            message: "expected an absolute http or https URL".to_string(),
        });
    }

    Ok(url)
}

fn truncate_detail(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_DETAIL_CHARS {
        body.to_string()
    } else {
        let truncated: String = body.chars().take(MAX_ERROR_DETAIL_CHARS).collect();
        format!("{}...", truncated)
    }
}

fn log_failure(error: &ApiError) {
    match error {
        ApiError::RequestFailed {
            operation,
            status,
            reason,
            detail,
        } => warn!(
            event = "core.api.request_failed",
            operation = %operation,
            status = ?status,
            reason = %reason,
            detail = ?detail
        ),
        ApiError::InvalidBaseUrl { url, message } => warn!(
            event = "core.api.invalid_base_url",
            url = %url,
            message = %message
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_appends_to_root() {
        let api = HttpCompanyApi::with_base_url("https://bit-stock-api.vercel.app").unwrap();
        let url = api.endpoint(&["companies"]).unwrap();
        assert_eq!(url.as_str(), "https://bit-stock-api.vercel.app/companies");
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        let api = HttpCompanyApi::with_base_url("http://localhost:8080/api/").unwrap();
        let url = api.endpoint(&["companies", "42"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/companies/42");
    }

    #[test]
    fn test_endpoint_percent_encodes_id() {
        let api = HttpCompanyApi::with_base_url("http://localhost:8080").unwrap();
        let url = api.endpoint(&["companies", "a/b c"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/companies/a%2Fb%20c");
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let err = HttpCompanyApi::with_base_url("mailto:ops@example.com").unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_rejects_relative_base_url() {
        let err = HttpCompanyApi::with_base_url("/companies").unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_truncate_detail_limits_length() {
        let long = "x".repeat(MAX_ERROR_DETAIL_CHARS + 10);
        let truncated = truncate_detail(&long);
        assert_eq!(truncated.chars().count(), MAX_ERROR_DETAIL_CHARS + 3);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncate_detail("short"), "short");
    }
}
