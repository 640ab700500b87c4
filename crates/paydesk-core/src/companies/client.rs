use std::future::Future;

use super::errors::ApiError;
use super::types::{Company, CompanyId};

/// Client for the remote companies API.
///
/// Decouples callers from the transport so the dashboard can run against a
/// test double. Implementations must be shareable across tasks.
///
/// # Semantics
///
/// - **Success**: an HTTP status in the 2xx range. Anything else, or a
///   transport failure, is `ApiError::RequestFailed`.
/// - **No retries**: a failed create may or may not have happened server-side.
///   Callers do not reconcile; the operator reloads.
/// - **No idempotency**: each call is a fresh request.
pub trait CompanyApi: Send + Sync {
    /// `GET /companies`, in server order.
    fn list_companies(&self) -> impl Future<Output = Result<Vec<Company>, ApiError>> + Send;

    /// `POST /companies`. The server assigns the id and the initial paid status.
    fn create_company(&self, name: &str)
    -> impl Future<Output = Result<Company, ApiError>> + Send;

    /// `PATCH /companies/{id}` with the new paid status.
    fn set_paid_status(
        &self,
        id: &CompanyId,
        is_paid: bool,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}
