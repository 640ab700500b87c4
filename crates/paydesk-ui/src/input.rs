//! Keyboard handling for paydesk-ui.
//!
//! Key events are first mapped to an [`InputAction`] based on which dialog
//! is open, then applied to the controller.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use paydesk_core::CompanyApi;

use crate::controller::Controller;
use crate::state::DialogState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    OpenCreate,
    OpenConfirm,
    CursorNext,
    CursorPrev,
    Reload,
    Cancel,
    Submit,
    InsertChar(char),
    Backspace,
}

pub fn map_key(key: KeyEvent, dialog: &DialogState) -> Option<InputAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputAction::Quit);
    }

    match dialog {
        DialogState::None => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(InputAction::Quit),
            KeyCode::Char('c') => Some(InputAction::OpenCreate),
            KeyCode::Enter | KeyCode::Char('t') => Some(InputAction::OpenConfirm),
            KeyCode::Down | KeyCode::Char('j') => Some(InputAction::CursorNext),
            KeyCode::Up | KeyCode::Char('k') => Some(InputAction::CursorPrev),
            KeyCode::Char('r') => Some(InputAction::Reload),
            _ => None,
        },
        DialogState::Create { .. } => match key.code {
            KeyCode::Esc => Some(InputAction::Cancel),
            KeyCode::Enter => Some(InputAction::Submit),
            KeyCode::Backspace => Some(InputAction::Backspace),
            KeyCode::Char(c) => Some(InputAction::InsertChar(c)),
            _ => None,
        },
        DialogState::Confirm { .. } => match key.code {
            KeyCode::Esc | KeyCode::Char('n') => Some(InputAction::Cancel),
            KeyCode::Enter | KeyCode::Char('y') => Some(InputAction::Submit),
            _ => None,
        },
    }
}

/// Apply an action to the controller. Returns false when the user quit.
pub fn apply<A: CompanyApi + 'static>(controller: &mut Controller<A>, action: InputAction) -> bool {
    match action {
        InputAction::Quit => return false,
        InputAction::OpenCreate => controller.open_create_dialog(),
        InputAction::OpenConfirm => controller.open_confirm_for_cursor(),
        InputAction::CursorNext => controller.cursor_next(),
        InputAction::CursorPrev => controller.cursor_prev(),
        InputAction::Reload => controller.reload(),
        InputAction::Cancel => controller.cancel_dialog(),
        InputAction::Submit => controller.submit_dialog(),
        InputAction::InsertChar(c) => controller.input_char(c),
        InputAction::Backspace => controller.input_backspace(),
    }
    true
}
