//! Background request dispatch for paydesk-ui.
//!
//! Each API call runs as a task on the tokio runtime and reports back to the
//! UI thread as a [`UiEvent`]. Every request carries the [`RequestToken`] of
//! the controller generation that issued it, so results that arrive after a
//! teardown or remount can be recognized and dropped.

use std::future::Future;
use std::sync::Arc;

use paydesk_core::{ApiError, Company, CompanyApi, CompanyId};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::state::MessageId;

/// Generation stamp attached to every request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken {
    generation: u64,
}

impl RequestToken {
    pub(crate) fn new(generation: u64) -> Self {
        Self { generation }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Results delivered back to the UI thread.
#[derive(Debug)]
pub enum UiEvent {
    CompaniesLoaded {
        token: RequestToken,
        result: Result<Vec<Company>, ApiError>,
    },
    CompanyCreated {
        token: RequestToken,
        result: Result<Company, ApiError>,
    },
    PaidStatusSet {
        token: RequestToken,
        company_id: CompanyId,
        /// The status that was sent.
        is_paid: bool,
        result: Result<(), ApiError>,
    },
    MessageExpired {
        message_id: MessageId,
    },
}

/// Spawns API calls and forwards their results as [`UiEvent`]s.
///
/// All tasks watch one shutdown token; cancelling it abandons every
/// outstanding request without delivering a result.
pub struct ActionRunner<A> {
    api: Arc<A>,
    runtime: Handle,
    events: UnboundedSender<UiEvent>,
    shutdown: CancellationToken,
}

impl<A> ActionRunner<A> {
    /// Cancel every outstanding request task.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.shutdown.is_cancelled()
    }
}

impl<A: CompanyApi + 'static> ActionRunner<A> {
    pub fn new(api: Arc<A>, runtime: Handle, events: UnboundedSender<UiEvent>) -> Self {
        Self {
            api,
            runtime,
            events,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn load_companies(&self, token: RequestToken) {
        let api = Arc::clone(&self.api);
        self.spawn("load_companies", async move {
            let result = api.list_companies().await;
            UiEvent::CompaniesLoaded { token, result }
        });
    }

    pub fn create_company(&self, token: RequestToken, name: String) {
        let api = Arc::clone(&self.api);
        self.spawn("create_company", async move {
            let result = api.create_company(&name).await;
            UiEvent::CompanyCreated { token, result }
        });
    }

    pub fn set_paid_status(&self, token: RequestToken, company_id: CompanyId, is_paid: bool) {
        let api = Arc::clone(&self.api);
        self.spawn("set_paid_status", async move {
            let result = api.set_paid_status(&company_id, is_paid).await;
            UiEvent::PaidStatusSet {
                token,
                company_id,
                is_paid,
                result,
            }
        });
    }

    fn spawn<F>(&self, action: &'static str, request: F)
    where
        F: Future<Output = UiEvent> + Send + 'static,
    {
        let shutdown = self.shutdown.clone();
        let events = self.events.clone();

        self.runtime.spawn(async move {
            tokio::select! {
                event = request => {
                    if events.send(event).is_err() {
                        debug!(event = "ui.action.receiver_dropped", action = action);
                    }
                }
                _ = shutdown.cancelled() => {
                    debug!(event = "ui.action.cancelled", action = action);
                }
            }
        });
    }
}
