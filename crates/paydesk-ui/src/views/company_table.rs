//! Company table component.
//!
//! One row per company in server order, with its pay status and the action
//! a confirm would perform.

use paydesk_core::Company;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::state::AppState;

const HEADERS: [&str; 3] = ["Company Name", "Pay Status", "Action"];

/// Display values for one table row.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyRow<'a> {
    pub name: &'a str,
    pub status: &'static str,
    pub action: &'static str,
    pub is_paid: bool,
}

pub fn company_rows(companies: &[Company]) -> Vec<CompanyRow<'_>> {
    companies
        .iter()
        .map(|company| CompanyRow {
            name: &company.name,
            status: company.status_label(),
            action: company.toggle_action().label(),
            is_paid: company.is_paid,
        })
        .collect()
}

pub fn render_company_table(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().title(" Companies ").borders(Borders::ALL);

    if state.companies().is_empty() {
        let text = if state.is_list_loading() {
            "Loading..."
        } else {
            "No companies found."
        };
        frame.render_widget(
            Paragraph::new(text)
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    }

    let rows = company_rows(state.companies()).into_iter().map(|row| {
        let status_style = if row.is_paid {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Yellow)
        };
        Row::new(vec![
            Cell::from(row.name.to_string()),
            Cell::from(row.status).style(status_style),
            Cell::from(format!("[{}]", row.action)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Fill(1),
            Constraint::Length(12),
            Constraint::Length(11),
        ],
    )
    .header(Row::new(HEADERS).style(Style::default().bold()))
    .block(block)
    .row_highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
    .highlight_symbol("> ");

    let mut table_state = TableState::default().with_selected(state.cursor_index());
    frame.render_stateful_widget(table, area, &mut table_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_support::{line_of, render_lines, screen_contains};
    use paydesk_core::CompanyId;

    fn company(id: &str, name: &str, is_paid: bool) -> Company {
        Company {
            id: CompanyId::from(id),
            name: name.to_string(),
            is_paid,
        }
    }

    #[test]
    fn test_company_rows_labels() {
        let companies = vec![company("1", "Acme", false), company("2", "Globex", true)];

        let rows = company_rows(&companies);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Acme");
        assert_eq!(rows[0].status, "Unpaid");
        assert_eq!(rows[0].action, "Block");
        assert_eq!(rows[1].status, "Paid");
        assert_eq!(rows[1].action, "Unblock");
    }

    #[test]
    fn test_renders_one_row_per_company_in_order() {
        let mut state = AppState::new();
        state.set_companies(vec![
            company("3", "Initech", false),
            company("1", "Acme", true),
            company("2", "Globex", false),
        ]);

        let lines = render_lines(&state, 80, 20);

        let initech = line_of(&lines, "Initech").unwrap();
        let acme = line_of(&lines, "Acme").unwrap();
        let globex = line_of(&lines, "Globex").unwrap();
        assert!(initech < acme && acme < globex);
        assert!(lines[acme].contains("Paid"));
        assert!(lines[initech].contains("Unpaid"));
        assert!(screen_contains(&lines, "Company Name"));
    }

    #[test]
    fn test_empty_list_shows_placeholder() {
        let state = AppState::new();
        let lines = render_lines(&state, 80, 20);
        assert!(screen_contains(&lines, "No companies found."));
    }

    #[test]
    fn test_loading_placeholder_while_fetching() {
        let mut state = AppState::new();
        state.set_list_loading();
        let lines = render_lines(&state, 80, 20);
        assert!(screen_contains(&lines, "Loading..."));
        assert!(!screen_contains(&lines, "No companies found."));
    }
}
