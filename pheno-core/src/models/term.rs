use serde::{Deserialize, Serialize};

/// Reference to an ontology-coded concept: an opaque identifier plus an
/// optional human-readable label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl TermRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    pub fn with_name(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
        }
    }

    /// Two references denote the same term iff identifiers are equal,
    /// case-sensitive.
    pub fn same_term(&self, other: &TermRef) -> bool {
        self.id == other.id
    }
}
