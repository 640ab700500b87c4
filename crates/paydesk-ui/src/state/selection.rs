use paydesk_core::{Company, CompanyId};

/// Row cursor over the company table.
///
/// Tracks the highlighted company by id rather than by index, so appending
/// rows or flipping a status never moves the cursor to a different company.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    /// ID of the highlighted company, or None if the table is empty.
    selected_id: Option<CompanyId>,
}

impl SelectionState {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a company by ID.
    #[allow(dead_code)]
    pub fn select(&mut self, id: CompanyId) {
        self.selected_id = Some(id);
    }

    /// Get the selected company ID, if any.
    pub fn id(&self) -> Option<&CompanyId> {
        self.selected_id.as_ref()
    }

    /// Index of the selected company within `companies`.
    pub fn index_in(&self, companies: &[Company]) -> Option<usize> {
        let id = self.selected_id.as_ref()?;
        companies.iter().position(|c| &c.id == id)
    }

    /// Keep the cursor on a company that exists after the list changed.
    ///
    /// Falls back to the first row when the selected id is gone, and clears
    /// the cursor when the list is empty.
    pub fn clamp_to(&mut self, companies: &[Company]) {
        if self.index_in(companies).is_some() {
            return;
        }
        self.selected_id = companies.first().map(|c| c.id.clone());
    }

    pub fn move_next(&mut self, companies: &[Company]) {
        let next = match self.index_in(companies) {
            Some(index) => (index + 1).min(companies.len().saturating_sub(1)),
            None => 0,
        };
        self.selected_id = companies.get(next).map(|c| c.id.clone());
    }

    pub fn move_prev(&mut self, companies: &[Company]) {
        let prev = self
            .index_in(companies)
            .map(|index| index.saturating_sub(1))
            .unwrap_or(0);
        self.selected_id = companies.get(prev).map(|c| c.id.clone());
    }
}
