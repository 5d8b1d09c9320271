//! Feature-pair scoring: term similarity adjusted by presence and
//! shared metadata.

use pheno_core::models::Feature;

use crate::metadata::MetadataScorerRegistry;
use crate::term::TermSimilarityScorer;

/// Combines a base term score with presence agreement and metadata
/// agreement into an adjusted feature-pair score in [-1.0, 1.0].
pub struct FeatureSimilarityEngine {
    term_scorer: Option<TermSimilarityScorer>,
    metadata: MetadataScorerRegistry,
}

impl FeatureSimilarityEngine {
    pub fn new(term_scorer: TermSimilarityScorer, metadata: MetadataScorerRegistry) -> Self {
        Self {
            term_scorer: Some(term_scorer),
            metadata,
        }
    }

    /// Degraded mode for when no ontology collaborator is available:
    /// exact-match-only base scoring, same presence and metadata rules.
    pub fn exact_match_only(metadata: MetadataScorerRegistry) -> Self {
        Self {
            term_scorer: None,
            metadata,
        }
    }

    /// Score a feature pair. Either side missing, or unresolvable
    /// terms, yield NaN.
    pub fn score(&self, match_side: Option<&Feature>, reference: Option<&Feature>) -> f64 {
        let (m, r) = match (match_side, reference) {
            (Some(m), Some(r)) => (m, r),
            _ => return f64::NAN,
        };

        let base = match &self.term_scorer {
            Some(scorer) => scorer.score(Some(&m.term), Some(&r.term)),
            None if m.term.same_term(&r.term) => 1.0,
            None => 0.0,
        };
        if base.is_nan() {
            return f64::NAN;
        }

        // A term match where one side is affirmed and the other
        // explicitly negated is evidence against similarity.
        let signed = if m.present == r.present { base } else { -base };
        if signed == 0.0 {
            return signed;
        }

        match self.metadata_agreement(m, r) {
            Some(agreement) => {
                let adjusted = signed + signed.signum() * agreement * (1.0 - signed.abs());
                adjusted.clamp(-1.0, 1.0)
            }
            None => signed,
        }
    }

    /// Mean metadata score over types present on BOTH sides. One-sided
    /// metadata is ignored; non-finite per-type results are recorded as
    /// absent. `None` when no shared type produced a finite score.
    fn metadata_agreement(&self, m: &Feature, r: &Feature) -> Option<f64> {
        let mut sum = 0.0;
        let mut count = 0u32;
        for (meta_type, mm) in &m.metadata {
            let Some(rm) = r.metadata.get(meta_type) else {
                continue;
            };
            let score = self.metadata.scorer(meta_type).score(Some(mm), Some(rm));
            if score.is_finite() {
                sum += score;
                count += 1;
            }
        }
        (count > 0).then(|| sum / f64::from(count))
    }
}
