//! Symmetric term-pair similarity from ontology ancestor distance.

use std::sync::Arc;

use pheno_core::models::TermRef;
use pheno_core::traits::{OntologyLookup, ResolvedTerm};
use pheno_core::SimilarityConfig;

/// Scores two ontology term references in [-1.0, 1.0] (NaN when the
/// comparison is undefined).
///
/// Identical identifiers score exactly 1.0. Otherwise both terms are
/// resolved and the shortest path through a common ancestor is mapped
/// to `1 / (1 + distance)`, clamped to exactly 0.0 past
/// `max_term_distance`. Symmetric by construction.
pub struct TermSimilarityScorer {
    ontology: Arc<dyn OntologyLookup>,
    max_distance: u32,
}

impl TermSimilarityScorer {
    pub fn new(ontology: Arc<dyn OntologyLookup>) -> Self {
        Self::with_config(ontology, &SimilarityConfig::default())
    }

    pub fn with_config(ontology: Arc<dyn OntologyLookup>, config: &SimilarityConfig) -> Self {
        Self {
            ontology,
            max_distance: config.max_term_distance,
        }
    }

    /// Score a term pair. Either side absent, or either side failing to
    /// resolve, yields NaN.
    pub fn score(&self, match_term: Option<&TermRef>, reference: Option<&TermRef>) -> f64 {
        let (m, r) = match (match_term, reference) {
            (Some(m), Some(r)) => (m, r),
            _ => return f64::NAN,
        };
        if m.same_term(r) {
            return 1.0;
        }

        let (rm, rr) = match (self.ontology.resolve(&m.id), self.ontology.resolve(&r.id)) {
            (Some(rm), Some(rr)) => (rm, rr),
            _ => return f64::NAN,
        };
        // The store may canonicalize synonyms onto one term.
        if rm.id == rr.id {
            return 1.0;
        }

        match shortest_common_path(&rm, &rr) {
            Some(distance) if distance <= self.max_distance => 1.0 / (1.0 + f64::from(distance)),
            // Too far apart to distinguish from unrelated.
            Some(_) => 0.0,
            // Disconnected.
            None => 0.0,
        }
    }
}

/// Length of the shortest path between two resolved terms through any
/// common ancestor, or `None` when the terms are disconnected.
fn shortest_common_path(a: &ResolvedTerm, b: &ResolvedTerm) -> Option<u32> {
    let mut best: Option<u32> = None;
    for (ancestor, da) in &a.ancestors {
        if let Some(db) = b.distance_to(ancestor) {
            let total = da + db;
            best = Some(best.map_or(total, |prev| prev.min(total)));
        }
    }
    tracing::trace!(a = %a.id, b = %b.id, distance = ?best, "term distance");
    best
}
