use paydesk_core::Company;

pub struct TableFormatter {
    name_width: usize,
    status_width: usize,
    id_width: usize,
}

impl TableFormatter {
    pub fn new(companies: &[Company]) -> Self {
        let name_width = companies
            .iter()
            .map(|c| c.name.chars().count())
            .max()
            .unwrap_or(16)
            .clamp(4, 40); // Between "Name" header min and reasonable terminal width max

        let id_width = companies
            .iter()
            .map(|c| c.id.as_str().chars().count())
            .max()
            .unwrap_or(2)
            .clamp(2, 36);

        Self {
            name_width,
            status_width: 6,
            id_width,
        }
    }

    pub fn print_table(&self, companies: &[Company]) {
        for line in self.render(companies) {
            println!("{}", line);
        }
    }

    fn render(&self, companies: &[Company]) -> Vec<String> {
        let mut lines = vec![self.top_border(), self.header_row(), self.separator()];
        lines.extend(companies.iter().map(|c| self.row(c)));
        lines.push(self.bottom_border());
        lines
    }

    fn row(&self, company: &Company) -> String {
        format!(
            "│ {} │ {} │ {} │",
            truncate(&company.name, self.name_width),
            truncate(company.status_label(), self.status_width),
            truncate(company.id.as_str(), self.id_width),
        )
    }

    fn header_row(&self) -> String {
        format!(
            "│ {} │ {} │ {} │",
            truncate("Name", self.name_width),
            truncate("Status", self.status_width),
            truncate("ID", self.id_width),
        )
    }

    fn top_border(&self) -> String {
        self.border('┌', '┬', '┐')
    }

    fn separator(&self) -> String {
        self.border('├', '┼', '┤')
    }

    fn bottom_border(&self) -> String {
        self.border('└', '┴', '┘')
    }

    fn border(&self, left: char, mid: char, right: char) -> String {
        format!(
            "{left}{}{mid}{}{mid}{}{right}",
            "─".repeat(self.name_width + 2),
            "─".repeat(self.status_width + 2),
            "─".repeat(self.id_width + 2),
        )
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings
/// including emoji and multi-byte characters.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        // Safely truncate at character boundaries, not byte boundaries
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
