//! Create company dialog component.
//!
//! Modal dialog with a single name field.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::state::CreateFormState;
use crate::views::centered_rect;

/// Render the create company dialog.
///
/// While `submitting`, the confirm hint reads "Processing..." and no
/// cursor is shown.
pub fn render_create_dialog(
    frame: &mut Frame,
    form: &CreateFormState,
    error: Option<&str>,
    submitting: bool,
) {
    let popup_area = centered_rect(60, 11, frame.area());
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Create Company ")
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let [_, label, input, error_line, _, hint] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new("Company Name:").style(Style::default().bold()),
        label,
    );
    frame.render_widget(
        Paragraph::new(form.name.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        ),
        input,
    );

    if let Some(error) = error {
        frame.render_widget(
            Paragraph::new(error).style(Style::default().fg(Color::Red)),
            error_line,
        );
    }

    let confirm = if submitting {
        "Processing..."
    } else {
        "Enter Create"
    };
    frame.render_widget(
        Paragraph::new(format!("Esc Cancel | {confirm}"))
            .style(Style::default().fg(Color::DarkGray))
            .centered(),
        hint,
    );

    if !submitting {
        // +1 for border
        let max_x = input.width.saturating_sub(2);
        let cursor_x = (form.name.chars().count() as u16).min(max_x);
        frame.set_cursor_position(Position::new(input.x + 1 + cursor_x, input.y + 1));
    }
}
