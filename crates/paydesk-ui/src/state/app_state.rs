use paydesk_core::{Company, CompanyId};

use super::companies::CompanyStore;
use super::dialog::DialogState;
use super::loading::LoadingState;
use super::message::{MessageId, MessageKind, MessageSlot, TransientMessage};
use super::selection::SelectionState;

/// Which dialog is open, as seen by the phase machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    Confirm(CompanyId),
}

/// The dashboard's phase, derived from the underlying state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewPhase {
    Idle,
    Loading,
    ModalOpen(ModalMode),
    Submitting,
}

/// Main application state.
///
/// All fields are private - access state through the facade methods below.
/// This ensures all state mutations go through controlled methods that
/// maintain invariants and provide a consistent API.
#[derive(Debug, Default)]
pub struct AppState {
    /// Company rows in server order.
    companies: CompanyStore,

    /// Current dialog state (mutually exclusive - only one dialog can be open).
    dialog: DialogState,

    /// In-flight request flags.
    loading: LoadingState,

    /// The single visible transient message.
    message: MessageSlot,

    /// Row cursor for the table.
    cursor: SelectionState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ViewPhase {
        if self.loading.is_dialog() {
            return ViewPhase::Submitting;
        }
        if self.loading.is_list() {
            return ViewPhase::Loading;
        }
        match &self.dialog {
            DialogState::None => ViewPhase::Idle,
            DialogState::Create { .. } => ViewPhase::ModalOpen(ModalMode::Create),
            DialogState::Confirm { company, .. } => {
                ViewPhase::ModalOpen(ModalMode::Confirm(company.id.clone()))
            }
        }
    }

    /// True while any request is in flight.
    pub fn is_busy(&self) -> bool {
        self.loading.is_any()
    }

    // =========================================================================
    // Company list facade methods
    // =========================================================================

    pub fn companies(&self) -> &[Company] {
        self.companies.companies()
    }

    /// Replace the list with a fresh fetch and clamp the cursor.
    pub fn set_companies(&mut self, companies: Vec<Company>) {
        self.companies.replace(companies);
        self.cursor.clamp_to(self.companies.companies());
    }

    pub fn append_company(&mut self, company: Company) {
        self.companies.append(company);
        self.cursor.clamp_to(self.companies.companies());
    }

    /// Set a company's paid status. Returns false if the id is not listed.
    pub fn set_company_paid(&mut self, id: &CompanyId, is_paid: bool) -> bool {
        self.companies.set_paid(id, is_paid)
    }

    // =========================================================================
    // Cursor facade methods
    // =========================================================================

    /// The company under the row cursor.
    pub fn cursor_company(&self) -> Option<&Company> {
        self.cursor.id().and_then(|id| self.companies.find(id))
    }

    pub fn cursor_index(&self) -> Option<usize> {
        self.cursor.index_in(self.companies.companies())
    }

    pub fn cursor_next(&mut self) {
        self.cursor.move_next(self.companies.companies());
    }

    pub fn cursor_prev(&mut self) {
        self.cursor.move_prev(self.companies.companies());
    }

    // =========================================================================
    // Dialog facade methods
    // =========================================================================

    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    /// Get mutable access to the dialog state (for form input).
    pub fn dialog_mut(&mut self) -> &mut DialogState {
        &mut self.dialog
    }

    /// Close any open dialog.
    pub fn close_dialog(&mut self) {
        self.dialog = DialogState::None;
    }

    /// Open the create dialog.
    pub fn open_create_dialog(&mut self) {
        self.dialog = DialogState::open_create();
    }

    /// Open the confirm dialog with a snapshot of `company`.
    pub fn open_confirm_dialog(&mut self, company: Company) {
        self.dialog = DialogState::open_confirm(company);
    }

    /// Set error message in the current dialog.
    /// No-op if no dialog is open.
    pub fn set_dialog_error(&mut self, error: String) {
        match &mut self.dialog {
            DialogState::None => {
                tracing::warn!(
                    event = "ui.state.set_dialog_error_no_dialog",
                    "Attempted to set dialog error but no dialog is open"
                );
            }
            DialogState::Create { error: e, .. } | DialogState::Confirm { error: e, .. } => {
                *e = Some(error);
            }
        }
    }

    /// The company the confirm dialog targets.
    ///
    /// Only returned while a company with that id is still in the list.
    pub fn selected_company(&self) -> Option<&Company> {
        match &self.dialog {
            DialogState::Confirm { company, .. } => self.companies.find(&company.id),
            _ => None,
        }
    }

    // =========================================================================
    // Loading facade methods
    // =========================================================================

    pub fn set_list_loading(&mut self) {
        self.loading.set_list();
    }

    pub fn clear_list_loading(&mut self) {
        self.loading.clear_list();
    }

    pub fn is_list_loading(&self) -> bool {
        self.loading.is_list()
    }

    pub fn set_dialog_loading(&mut self) {
        self.loading.set_dialog();
    }

    pub fn clear_dialog_loading(&mut self) {
        self.loading.clear_dialog();
    }

    pub fn is_dialog_loading(&self) -> bool {
        self.loading.is_dialog()
    }

    // =========================================================================
    // Message facade methods
    // =========================================================================

    /// Show a message, replacing any visible one.
    pub fn set_message(&mut self, kind: MessageKind, text: impl Into<String>) -> MessageId {
        self.message.set(kind, text)
    }

    /// Clear the message if `id` is still the visible one.
    pub fn clear_message(&mut self, id: MessageId) -> bool {
        self.message.clear_if(id)
    }

    pub fn message(&self) -> Option<&TransientMessage> {
        self.message.current()
    }
}
