use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::disorder::Disorder;
use super::feature::Feature;

/// Read-only snapshot of a patient record, supplied whole by the
/// external patient store. Scoring and views never mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Identity/document reference.
    pub document: String,
    /// Reporting-user reference.
    pub reporter: String,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub disorders: Vec<Disorder>,
}

impl Patient {
    pub fn new(document: impl Into<String>, reporter: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            reporter: reporter.into(),
            features: Vec::new(),
            disorders: Vec::new(),
        }
    }

    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }

    pub fn with_disorder(mut self, disorder: Disorder) -> Self {
        self.disorders.push(disorder);
        self
    }

    /// Distinct disorder ids present on both patients, in lexicographic
    /// order.
    pub fn shared_disorder_ids<'a>(&'a self, other: &'a Patient) -> Vec<&'a str> {
        let mine: BTreeSet<&str> = self.disorders.iter().map(|d| d.id.as_str()).collect();
        let theirs: BTreeSet<&str> = other.disorders.iter().map(|d| d.id.as_str()).collect();
        mine.intersection(&theirs).copied().collect()
    }
}
