use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    widgets::Paragraph,
};

use crate::state::{MessageKind, TransientMessage};

/// Render the transient message line. Renders nothing when no message is set.
pub fn render_message_banner(frame: &mut Frame, area: Rect, message: Option<&TransientMessage>) {
    let Some(message) = message else {
        return;
    };

    let style = match message.kind {
        MessageKind::Success => Style::default().fg(Color::Green).bold(),
        MessageKind::Error => Style::default().fg(Color::Red).bold(),
    };
    frame.render_widget(Paragraph::new(message.text.as_str()).style(style), area);
}

#[cfg(test)]
mod tests {
    use crate::state::{AppState, MessageKind};
    use crate::views::test_support::{render_lines, screen_contains};

    #[test]
    fn test_banner_shows_current_message() {
        let mut state = AppState::new();
        state.set_message(MessageKind::Success, "Company created successfully!");

        let lines = render_lines(&state, 80, 20);

        assert!(screen_contains(&lines, "Company created successfully!"));
    }

    #[test]
    fn test_banner_hidden_after_clear() {
        let mut state = AppState::new();
        let id = state.set_message(MessageKind::Error, "Failed to load companies. Please try again.");
        state.clear_message(id);

        let lines = render_lines(&state, 80, 20);

        assert!(!screen_contains(&lines, "Failed to load companies"));
    }
}
