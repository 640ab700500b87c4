//! Block/unblock confirmation dialog component.

use paydesk_core::Company;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::views::centered_rect;

pub fn confirm_prompt(company: &Company) -> String {
    format!(
        "Are you sure you want to {} {}?",
        company.toggle_action().verb(),
        company.name
    )
}

/// Render the confirmation dialog for the company snapshot taken on open.
pub fn render_confirm_dialog(
    frame: &mut Frame,
    company: &Company,
    error: Option<&str>,
    submitting: bool,
) {
    let popup_area = centered_rect(60, 9, frame.area());
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Confirmation ")
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let [_, prompt, error_line, _, hint] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(confirm_prompt(company))
            .wrap(Wrap { trim: true })
            .centered(),
        prompt,
    );

    if let Some(error) = error {
        frame.render_widget(
            Paragraph::new(error)
                .style(Style::default().fg(Color::Red))
                .centered(),
            error_line,
        );
    }

    let hint_text = if submitting {
        "Processing...".to_string()
    } else {
        format!("Esc/n Cancel | Enter/y {}", company.toggle_action().label())
    };
    frame.render_widget(
        Paragraph::new(hint_text)
            .style(Style::default().fg(Color::DarkGray))
            .centered(),
        hint,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use crate::views::test_support::{render_lines, screen_contains};
    use paydesk_core::CompanyId;

    fn company(is_paid: bool) -> Company {
        Company {
            id: CompanyId::from("1"),
            name: "Acme".to_string(),
            is_paid,
        }
    }

    #[test]
    fn test_prompt_names_action_and_company() {
        assert_eq!(
            confirm_prompt(&company(false)),
            "Are you sure you want to block Acme?"
        );
        assert_eq!(
            confirm_prompt(&company(true)),
            "Are you sure you want to unblock Acme?"
        );
    }

    #[test]
    fn test_confirm_dialog_renders_prompt_and_action() {
        let mut state = AppState::new();
        state.set_companies(vec![company(false)]);
        state.open_confirm_dialog(company(false));

        let lines = render_lines(&state, 80, 24);

        assert!(screen_contains(&lines, "Confirmation"));
        assert!(screen_contains(&lines, "Are you sure you want to block Acme?"));
        assert!(screen_contains(&lines, "Enter/y Block"));
    }

    #[test]
    fn test_confirm_dialog_processing_label() {
        let mut state = AppState::new();
        state.open_confirm_dialog(company(true));
        state.set_dialog_loading();

        let lines = render_lines(&state, 80, 24);

        assert!(screen_contains(&lines, "Processing..."));
    }
}
