use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An ontology term resolved against the term store: identity plus the
/// minimum hop count to every ancestor in the directed-acyclic ancestor
/// graph. The term itself appears in `ancestors` at distance 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTerm {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub ancestors: BTreeMap<String, u32>,
}

impl ResolvedTerm {
    /// Minimum hop count to the given ancestor, if reachable.
    pub fn distance_to(&self, ancestor_id: &str) -> Option<u32> {
        self.ancestors.get(ancestor_id).copied()
    }
}

/// Read-only term-resolution oracle. Implementations are populated once
/// at startup and must be safe for concurrent reads; scoring never
/// writes through this trait.
pub trait OntologyLookup: Send + Sync {
    /// Resolve a term identifier, or `None` when the term is unknown.
    fn resolve(&self, id: &str) -> Option<ResolvedTerm>;
}
