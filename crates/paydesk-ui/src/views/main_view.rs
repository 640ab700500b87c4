//! Main view for paydesk-ui.
//!
//! Root view that composes the header, message banner, company table, key
//! hints, and whichever dialog is open.

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{AppState, DialogState};
use crate::views::{company_table, confirm_dialog, create_dialog, message_banner};

const TABLE_HINTS: &str = "c Create | ↑↓/jk Move | Enter/t Block/Unblock | r Reload | q Quit";

pub fn render(frame: &mut Frame, state: &AppState) {
    let [header, banner, table, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let mut title = vec![
        Span::styled("Companies", Style::default().bold()),
        Span::raw("  "),
        Span::styled("[c] Create Company", Style::default().fg(Color::Cyan)),
    ];
    if state.is_list_loading() {
        title.push(Span::raw("  "));
        title.push(Span::styled("Loading...", Style::default().fg(Color::DarkGray)));
    }
    frame.render_widget(Paragraph::new(Line::from(title)), header);

    message_banner::render_message_banner(frame, banner, state.message());
    company_table::render_company_table(frame, table, state);

    frame.render_widget(
        Paragraph::new(TABLE_HINTS).style(Style::default().fg(Color::DarkGray)),
        footer,
    );

    let submitting = state.is_dialog_loading();
    match state.dialog() {
        DialogState::None => {}
        DialogState::Create { form, error } => {
            create_dialog::render_create_dialog(frame, form, error.as_deref(), submitting);
        }
        DialogState::Confirm { company, error } => {
            confirm_dialog::render_confirm_dialog(frame, company, error.as_deref(), submitting);
        }
    }
}
