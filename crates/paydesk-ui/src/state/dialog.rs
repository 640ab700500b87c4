use paydesk_core::Company;

/// Dialog state for the dashboard.
///
/// Only one dialog can be open at a time. This enum enforces mutual exclusion
/// at compile-time, preventing impossible states like having both the create
/// and confirm dialogs open simultaneously.
#[derive(Clone, Debug, Default)]
pub enum DialogState {
    /// No dialog is open.
    #[default]
    None,
    /// Create company dialog is open.
    Create {
        form: CreateFormState,
        error: Option<String>,
    },
    /// Block/unblock confirmation dialog is open.
    Confirm {
        /// Snapshot of the row taken when the dialog was opened.
        company: Company,
        error: Option<String>,
    },
}

impl DialogState {
    /// Returns true if the create dialog is open.
    pub fn is_create(&self) -> bool {
        matches!(self, DialogState::Create { .. })
    }

    /// Returns true if the confirm dialog is open.
    pub fn is_confirm(&self) -> bool {
        matches!(self, DialogState::Confirm { .. })
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, DialogState::None)
    }

    /// Open the create dialog with an empty name.
    pub fn open_create() -> Self {
        DialogState::Create {
            form: CreateFormState::default(),
            error: None,
        }
    }

    /// Open the confirm dialog for toggling a company.
    pub fn open_confirm(company: Company) -> Self {
        DialogState::Confirm {
            company,
            error: None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            DialogState::None => None,
            DialogState::Create { error, .. } | DialogState::Confirm { error, .. } => {
                error.as_deref()
            }
        }
    }
}

/// Form state for creating a new company.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateFormState {
    pub name: String,
}

impl CreateFormState {
    /// Append a typed character. Control characters are ignored.
    pub fn push_char(&mut self, c: char) {
        if !c.is_control() {
            self.name.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.name.pop();
    }

    /// The name to submit, or None when it is blank.
    pub fn submitted_name(&self) -> Option<&str> {
        let name = self.name.trim();
        (!name.is_empty()).then_some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paydesk_core::CompanyId;

    fn company() -> Company {
        Company {
            id: CompanyId::from("1"),
            name: "Acme".to_string(),
            is_paid: false,
        }
    }

    #[test]
    fn test_open_create_starts_with_empty_name() {
        let dialog = DialogState::open_create();
        assert!(dialog.is_create());
        assert!(!dialog.is_confirm());
        if let DialogState::Create { form, error } = dialog {
            assert!(form.name.is_empty());
            assert!(error.is_none());
        }
    }

    #[test]
    fn test_open_confirm_keeps_snapshot() {
        let dialog = DialogState::open_confirm(company());
        assert!(dialog.is_confirm());
        assert!(dialog.is_open());
        if let DialogState::Confirm { company, .. } = dialog {
            assert_eq!(company.name, "Acme");
        }
    }

    #[test]
    fn test_none_is_not_open() {
        assert!(!DialogState::None.is_open());
        assert!(DialogState::None.error().is_none());
    }

    #[test]
    fn test_push_char_ignores_control_characters() {
        let mut form = CreateFormState::default();
        form.push_char('A');
        form.push_char('\n');
        form.push_char('\t');
        form.push_char('b');
        assert_eq!(form.name, "Ab");
    }

    #[test]
    fn test_backspace_on_empty_name_is_noop() {
        let mut form = CreateFormState::default();
        form.backspace();
        assert!(form.name.is_empty());
    }

    #[test]
    fn test_submitted_name_trims_whitespace() {
        let form = CreateFormState {
            name: "  Acme Corp  ".to_string(),
        };
        assert_eq!(form.submitted_name(), Some("Acme Corp"));
    }

    #[test]
    fn test_submitted_name_rejects_blank() {
        let form = CreateFormState {
            name: "   ".to_string(),
        };
        assert_eq!(form.submitted_name(), None);
        assert_eq!(CreateFormState::default().submitted_name(), None);
    }
}
