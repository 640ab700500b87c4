//! View components for paydesk-ui.
//!
//! This module contains the view layer of the application:
//! - `main_view` - Root view that composes header, banner, table, and dialogs
//! - `company_table` - Company rows with paid status and row action
//! - `message_banner` - The transient success/error message
//! - `create_dialog` - Modal dialog for creating new companies
//! - `confirm_dialog` - Modal dialog for confirming a block/unblock

pub mod company_table;
pub mod confirm_dialog;
pub mod create_dialog;
pub mod main_view;
pub mod message_banner;

pub use main_view::render;

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// A rect of the given size centered in `area`. Height is in rows.
pub(crate) fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [v_area] = vertical.areas(area);
    let [h_area] = horizontal.areas(v_area);
    h_area
}
