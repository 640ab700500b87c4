use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::actions::UiEvent;
use crate::state::MessageId;

/// Countdown that dismisses the visible message.
///
/// At most one countdown is pending. Scheduling a new one aborts the old
/// task, and dropping the timer aborts whatever is pending.
pub struct MessageTimer {
    runtime: Handle,
    events: UnboundedSender<UiEvent>,
    timeout: Duration,
    pending: Option<JoinHandle<()>>,
}

impl MessageTimer {
    pub fn new(runtime: Handle, events: UnboundedSender<UiEvent>, timeout: Duration) -> Self {
        Self {
            runtime,
            events,
            timeout,
            pending: None,
        }
    }

    /// Start a fresh countdown for `message_id`, replacing any pending one.
    pub fn schedule(&mut self, message_id: MessageId) {
        self.cancel();

        let events = self.events.clone();
        let deadline = Instant::now() + self.timeout;
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            // Receiver gone means the dashboard already shut down.
            let _ = events.send(UiEvent::MessageExpired { message_id });
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for MessageTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
