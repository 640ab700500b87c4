use paydesk_core::{Company, CompanyId};

/// The company rows shown in the table, in server order.
#[derive(Clone, Debug, Default)]
pub struct CompanyStore {
    companies: Vec<Company>,
}

impl CompanyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    /// Replace the whole list with a fresh fetch.
    pub fn replace(&mut self, companies: Vec<Company>) {
        self.companies = companies;
    }

    /// Add a newly created company at the end.
    pub fn append(&mut self, company: Company) {
        self.companies.push(company);
    }

    pub fn find(&self, id: &CompanyId) -> Option<&Company> {
        self.companies.iter().find(|c| &c.id == id)
    }

    /// Set the paid status of the company with `id`.
    ///
    /// Returns false when no such company is in the list.
    pub fn set_paid(&mut self, id: &CompanyId, is_paid: bool) -> bool {
        match self.companies.iter_mut().find(|c| &c.id == id) {
            Some(company) => {
                company.is_paid = is_paid;
                true
            }
            None => false,
        }
    }
}
