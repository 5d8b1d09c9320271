use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::term::TermRef;

/// A typed, ontology-coded qualifier of a feature (e.g. an age-of-onset
/// term).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadatum {
    pub term: TermRef,
    /// Metadata type name, e.g. `age_of_onset`.
    pub meta_type: String,
}

impl Metadatum {
    pub fn new(meta_type: impl Into<String>, term: TermRef) -> Self {
        Self {
            term,
            meta_type: meta_type.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.term.id
    }

    pub fn name(&self) -> Option<&str> {
        self.term.name.as_deref()
    }
}

/// A patient's recorded clinical observation: an ontology term, a
/// category label, a presence flag (observed vs explicitly absent), and
/// metadata keyed by type name.
///
/// Immutable snapshot owned by the patient record it was read from.
/// Metadata uses a BTreeMap so iteration order is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub term: TermRef,
    /// Category label, e.g. `phenotype`.
    pub feature_type: String,
    /// True when observed, false when explicitly ruled out.
    pub present: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, Metadatum>,
}

impl Feature {
    pub fn new(term: TermRef, feature_type: impl Into<String>, present: bool) -> Self {
        Self {
            term,
            feature_type: feature_type.into(),
            present,
            metadata: BTreeMap::new(),
        }
    }

    /// Attach a metadatum, keyed by its type name.
    pub fn with_metadatum(mut self, metadatum: Metadatum) -> Self {
        self.metadata.insert(metadatum.meta_type.clone(), metadatum);
        self
    }

    pub fn id(&self) -> &str {
        &self.term.id
    }

    pub fn name(&self) -> Option<&str> {
        self.term.name.as_deref()
    }

    pub fn metadatum(&self, meta_type: &str) -> Option<&Metadatum> {
        self.metadata.get(meta_type)
    }
}
