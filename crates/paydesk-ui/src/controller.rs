//! View-controller for the companies dashboard.
//!
//! The controller owns the [`AppState`] and is the only thing that mutates
//! it. User input arrives through the `open_*`, `input_*`, `cancel_dialog`
//! and `submit_dialog` methods; request results and message expiries arrive
//! as [`UiEvent`]s on a channel and are applied by [`Controller::handle_event`].

use std::sync::Arc;
use std::time::Duration;

use paydesk_core::companies::ToggleAction;
use paydesk_core::{ApiOperation, CompanyApi, CompanyId};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{debug, error, info, warn};

use crate::actions::{ActionRunner, RequestToken, UiEvent};
use crate::state::{AppState, DialogState, MessageKind, ViewPhase};
use crate::timer::MessageTimer;

const EMPTY_NAME_ERROR: &str = "Company name cannot be empty";
const CREATED_MESSAGE: &str = "Company created successfully!";

/// What a dialog submit resolved to, captured before mutating state.
enum Submission {
    Create(String),
    EmptyName,
    SetPaid { company_id: CompanyId, is_paid: bool },
}

pub struct Controller<A> {
    state: AppState,
    actions: ActionRunner<A>,
    events: UnboundedReceiver<UiEvent>,
    timer: MessageTimer,
    /// Bumped on every mount and on teardown; results from older
    /// generations are dropped.
    generation: u64,
}

impl<A: CompanyApi + 'static> Controller<A> {
    pub fn new(api: Arc<A>, runtime: Handle, message_timeout: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(),
            actions: ActionRunner::new(api, runtime.clone(), tx.clone()),
            events: rx,
            timer: MessageTimer::new(runtime, tx, message_timeout),
            generation: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn phase(&self) -> ViewPhase {
        self.state.phase()
    }

    fn token(&self) -> RequestToken {
        RequestToken::new(self.generation)
    }

    /// Start loading the company list. Only valid from `Idle`.
    pub fn mount(&mut self) {
        if self.actions.is_shut_down() {
            debug!(event = "ui.mount.after_teardown");
            return;
        }
        if self.state.phase() != ViewPhase::Idle {
            debug!(
                event = "ui.mount.not_idle",
                phase = ?self.state.phase(),
                "Ignoring mount while not idle"
            );
            return;
        }

        self.generation += 1;
        info!(event = "ui.companies.load_started", generation = self.generation);
        self.state.set_list_loading();
        self.actions.load_companies(self.token());
    }

    /// Re-run the initial list fetch.
    pub fn reload(&mut self) {
        info!(event = "ui.companies.reload_requested");
        self.mount();
    }

    pub fn open_create_dialog(&mut self) {
        if self.state.phase() != ViewPhase::Idle {
            debug!(event = "ui.create_dialog.open_ignored", phase = ?self.state.phase());
            return;
        }
        self.state.open_create_dialog();
        info!(event = "ui.create_dialog.opened");
    }

    /// Open the block/unblock confirmation for the company with `id`.
    pub fn open_confirm_dialog(&mut self, id: &CompanyId) {
        if self.state.phase() != ViewPhase::Idle {
            debug!(event = "ui.confirm_dialog.open_ignored", phase = ?self.state.phase());
            return;
        }
        let Some(company) = self.state.companies().iter().find(|c| &c.id == id).cloned() else {
            warn!(
                event = "ui.confirm_dialog.company_not_found",
                company_id = %id,
                "Company not in list - ignoring"
            );
            return;
        };

        info!(
            event = "ui.confirm_dialog.opened",
            company_id = %company.id,
            action = company.toggle_action().verb()
        );
        self.state.open_confirm_dialog(company);
    }

    /// Open the confirmation for the row under the cursor.
    pub fn open_confirm_for_cursor(&mut self) {
        let Some(id) = self.state.cursor_company().map(|c| c.id.clone()) else {
            debug!(event = "ui.confirm_dialog.no_cursor_row");
            return;
        };
        self.open_confirm_dialog(&id);
    }

    pub fn cursor_next(&mut self) {
        self.state.cursor_next();
    }

    pub fn cursor_prev(&mut self) {
        self.state.cursor_prev();
    }

    pub fn input_char(&mut self, c: char) {
        if self.state.is_dialog_loading() {
            return;
        }
        if let DialogState::Create { form, error } = self.state.dialog_mut() {
            form.push_char(c);
            *error = None;
        }
    }

    pub fn input_backspace(&mut self) {
        if self.state.is_dialog_loading() {
            return;
        }
        if let DialogState::Create { form, .. } = self.state.dialog_mut() {
            form.backspace();
        }
    }

    /// Close the open dialog, discarding input and the selected company.
    pub fn cancel_dialog(&mut self) {
        if self.state.is_dialog_loading() {
            debug!(event = "ui.dialog_cancel.already_in_flight");
            return;
        }
        if self.state.dialog().is_open() {
            self.state.close_dialog();
            info!(event = "ui.dialog.cancelled");
        }
    }

    /// Submit the open dialog: create the company or send the toggle.
    pub fn submit_dialog(&mut self) {
        if self.state.is_busy() {
            debug!(event = "ui.dialog_submit.already_in_flight");
            return;
        }
        if self.actions.is_shut_down() {
            debug!(event = "ui.dialog_submit.after_teardown");
            return;
        }

        let submission = match self.state.dialog() {
            DialogState::None => {
                error!(
                    event = "ui.dialog_submit.no_dialog",
                    "Submit called without an open dialog"
                );
                return;
            }
            DialogState::Create { form, .. } => match form.submitted_name() {
                Some(name) => Submission::Create(name.to_string()),
                None => Submission::EmptyName,
            },
            DialogState::Confirm { company, .. } => Submission::SetPaid {
                company_id: company.id.clone(),
                is_paid: !company.is_paid,
            },
        };

        match submission {
            Submission::EmptyName => {
                warn!(
                    event = "ui.create_dialog.validation_failed",
                    reason = "empty company name"
                );
                self.state.set_dialog_error(EMPTY_NAME_ERROR.to_string());
            }
            Submission::Create(name) => {
                info!(event = "ui.create_company.started", name = %name);
                self.state.set_dialog_loading();
                self.actions.create_company(self.token(), name);
            }
            Submission::SetPaid {
                company_id,
                is_paid,
            } => {
                info!(
                    event = "ui.set_paid.started",
                    company_id = %company_id,
                    is_paid = is_paid
                );
                self.state.set_dialog_loading();
                self.actions.set_paid_status(self.token(), company_id, is_paid);
            }
        }
    }

    /// Apply a request result or message expiry to the state.
    pub fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::MessageExpired { message_id } => {
                if self.state.clear_message(message_id) {
                    debug!(event = "ui.message.expired");
                }
            }
            UiEvent::CompaniesLoaded { token, result } => {
                if !self.is_current(token) {
                    return;
                }
                self.state.clear_list_loading();
                match result {
                    Ok(companies) => {
                        info!(event = "ui.companies.load_completed", count = companies.len());
                        self.state.set_companies(companies);
                    }
                    Err(e) => {
                        warn!(event = "ui.companies.load_failed", error = %e);
                        self.show_message(
                            MessageKind::Error,
                            ApiOperation::ListCompanies.failure_message(),
                        );
                    }
                }
            }
            UiEvent::CompanyCreated { token, result } => {
                if !self.is_current(token) {
                    return;
                }
                self.state.clear_dialog_loading();
                self.state.close_dialog();
                match result {
                    Ok(company) => {
                        info!(
                            event = "ui.create_company.completed",
                            company_id = %company.id
                        );
                        self.state.append_company(company);
                        self.show_message(MessageKind::Success, CREATED_MESSAGE);
                    }
                    Err(e) => {
                        warn!(event = "ui.create_company.failed", error = %e);
                        self.show_message(
                            MessageKind::Error,
                            ApiOperation::CreateCompany.failure_message(),
                        );
                    }
                }
            }
            UiEvent::PaidStatusSet {
                token,
                company_id,
                is_paid,
                result,
            } => {
                if !self.is_current(token) {
                    return;
                }
                self.state.clear_dialog_loading();
                self.state.close_dialog();
                match result {
                    Ok(()) => {
                        if !self.state.set_company_paid(&company_id, is_paid) {
                            warn!(
                                event = "ui.set_paid.company_missing",
                                company_id = %company_id,
                                "Company left the list before the update completed"
                            );
                        }
                        info!(
                            event = "ui.set_paid.completed",
                            company_id = %company_id,
                            is_paid = is_paid
                        );
                        self.show_message(
                            MessageKind::Success,
                            ToggleAction::for_new_status(is_paid).success_message(),
                        );
                    }
                    Err(e) => {
                        warn!(
                            event = "ui.set_paid.failed",
                            company_id = %company_id,
                            error = %e
                        );
                        self.show_message(
                            MessageKind::Error,
                            ApiOperation::UpdateCompany.failure_message(),
                        );
                    }
                }
            }
        }
    }

    /// Apply every event already queued. Returns how many were applied.
    pub fn drain_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event);
            applied += 1;
        }
        applied
    }

    /// Wait for the next event and apply it.
    ///
    /// Returns false once no sender is left.
    pub async fn process_next_event(&mut self) -> bool {
        match self.events.recv().await {
            Some(event) => {
                self.handle_event(event);
                true
            }
            None => false,
        }
    }

    /// Stop all background work. Later results are dropped.
    pub fn teardown(&mut self) {
        if self.actions.is_shut_down() {
            return;
        }
        self.generation += 1;
        self.actions.shutdown();
        self.timer.cancel();
        info!(event = "ui.controller.teardown_completed");
    }

    fn is_current(&self, token: RequestToken) -> bool {
        if token.generation() == self.generation && !self.actions.is_shut_down() {
            return true;
        }
        debug!(
            event = "ui.event.stale_dropped",
            token_generation = token.generation(),
            generation = self.generation
        );
        false
    }

    fn show_message(&mut self, kind: MessageKind, text: &str) {
        let id = self.state.set_message(kind, text);
        self.timer.schedule(id);
    }
}

impl<A> Drop for Controller<A> {
    fn drop(&mut self) {
        self.actions.shutdown();
        self.timer.cancel();
    }
}
