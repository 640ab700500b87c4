use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque company identifier assigned by the server.
///
/// The API has been seen returning ids both as JSON strings and as JSON
/// numbers; both decode into the same textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CompanyId(String);

impl CompanyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CompanyId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for CompanyId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => CompanyId(id),
            RawId::Number(id) => CompanyId(id.to_string()),
        })
    }
}

/// A company as returned by the companies API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    /// Missing on the wire means unpaid (the server's default on create).
    #[serde(default)]
    pub is_paid: bool,
}

impl Company {
    /// Status column label.
    pub fn status_label(&self) -> &'static str {
        if self.is_paid { "Paid" } else { "Unpaid" }
    }

    /// The action toggling this company would perform.
    pub fn toggle_action(&self) -> ToggleAction {
        ToggleAction::for_current(self.is_paid)
    }
}

/// Direction of a paid-status toggle.
///
/// Marking a company paid is reported as blocking it, marking it unpaid as
/// unblocking it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Block,
    Unblock,
}

impl ToggleAction {
    /// Action that negates the given current status.
    pub fn for_current(is_paid: bool) -> Self {
        if is_paid {
            ToggleAction::Unblock
        } else {
            ToggleAction::Block
        }
    }

    /// Action that results in the given new status.
    pub fn for_new_status(is_paid: bool) -> Self {
        Self::for_current(!is_paid)
    }

    /// Button label, e.g. "Block".
    pub fn label(&self) -> &'static str {
        match self {
            ToggleAction::Block => "Block",
            ToggleAction::Unblock => "Unblock",
        }
    }

    /// Lowercase verb for prompts, e.g. "block".
    pub fn verb(&self) -> &'static str {
        match self {
            ToggleAction::Block => "block",
            ToggleAction::Unblock => "unblock",
        }
    }

    /// Success message shown once the toggle went through.
    pub fn success_message(&self) -> &'static str {
        match self {
            ToggleAction::Block => "Company blocked successfully!",
            ToggleAction::Unblock => "Company unblocked successfully!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_deserializes_camel_case() {
        let company: Company =
            serde_json::from_str(r#"{"id":"1","name":"Acme","isPaid":true}"#).unwrap();
        assert_eq!(company.id, CompanyId::new("1"));
        assert_eq!(company.name, "Acme");
        assert!(company.is_paid);
    }

    #[test]
    fn test_numeric_id_decodes_as_text() {
        let company: Company =
            serde_json::from_str(r#"{"id":42,"name":"Globex","isPaid":false}"#).unwrap();
        assert_eq!(company.id.as_str(), "42");
    }

    #[test]
    fn test_missing_is_paid_defaults_to_unpaid() {
        let company: Company = serde_json::from_str(r#"{"id":"7","name":"Initech"}"#).unwrap();
        assert!(!company.is_paid);
        assert_eq!(company.status_label(), "Unpaid");
    }

    #[test]
    fn test_company_serializes_wire_names() {
        let company = Company {
            id: CompanyId::new("1"),
            name: "Acme".to_string(),
            is_paid: false,
        };
        let json = serde_json::to_value(&company).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "1", "name": "Acme", "isPaid": false})
        );
    }

    #[test]
    fn test_toggle_action_labels_follow_new_status() {
        assert_eq!(ToggleAction::for_current(false), ToggleAction::Block);
        assert_eq!(ToggleAction::for_current(true), ToggleAction::Unblock);

        assert_eq!(
            ToggleAction::for_new_status(true).success_message(),
            "Company blocked successfully!"
        );
        assert_eq!(
            ToggleAction::for_new_status(false).success_message(),
            "Company unblocked successfully!"
        );
    }

    #[test]
    fn test_company_toggle_action() {
        let unpaid = Company {
            id: CompanyId::new("1"),
            name: "Acme".to_string(),
            is_paid: false,
        };
        assert_eq!(unpaid.toggle_action().label(), "Block");
        assert_eq!(unpaid.toggle_action().verb(), "block");
    }
}
