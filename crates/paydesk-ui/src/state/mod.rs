//! Application state for paydesk-ui.
//!
//! Centralized state management for the dashboard. The main type is
//! `AppState`, which provides a facade over internal state modules. Use
//! `AppState` methods to interact with state; internal modules are
//! implementation details.

pub mod app_state;
pub mod companies;
pub mod dialog;
pub mod loading;
pub mod message;
pub mod selection;

// Re-export all public types at module level so consumers use `crate::state::*`
pub use app_state::{AppState, ModalMode, ViewPhase};
pub use dialog::{CreateFormState, DialogState};
pub use message::{MessageId, MessageKind, TransientMessage};
