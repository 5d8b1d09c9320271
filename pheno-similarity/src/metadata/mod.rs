//! Per-type metadata scoring strategies and their registry.

pub mod scales;

use std::collections::HashMap;

use pheno_core::constants;
use pheno_core::models::Metadatum;
use pheno_core::traits::MetadatumScorer;

pub use scales::OrdinalScaleScorer;

/// Type-agnostic fallback scorer: identical identifiers score 1.0, both
/// present but different score -1.0, either side absent or blank is NaN.
#[derive(Debug, Default)]
pub struct DefaultMetadatumScorer;

impl MetadatumScorer for DefaultMetadatumScorer {
    fn score(&self, match_side: Option<&Metadatum>, reference: Option<&Metadatum>) -> f64 {
        let (m, r) = match (match_side, reference) {
            (Some(m), Some(r)) => (m, r),
            _ => return f64::NAN,
        };
        if m.id().is_empty() || r.id().is_empty() {
            return f64::NAN;
        }
        if m.id() == r.id() {
            1.0
        } else {
            -1.0
        }
    }
}

/// Strategy map from metadata type name to scorer, with a guaranteed
/// default entry. Lookup never fails: unknown types fall back to the
/// default scorer. Populated once at startup; reads are `&self` only.
pub struct MetadataScorerRegistry {
    scorers: HashMap<String, Box<dyn MetadatumScorer>>,
    default: DefaultMetadatumScorer,
}

impl MetadataScorerRegistry {
    /// An empty registry: every type resolves to the default scorer.
    pub fn new() -> Self {
        Self {
            scorers: HashMap::new(),
            default: DefaultMetadatumScorer,
        }
    }

    /// A registry with the standard HPO-style scales registered for
    /// age of onset, speed of onset, and pace of progression.
    pub fn with_standard_scales() -> Self {
        let mut registry = Self::new();
        registry.register(constants::META_AGE_OF_ONSET, Box::new(scales::age_of_onset()));
        registry.register(
            constants::META_SPEED_OF_ONSET,
            Box::new(scales::speed_of_onset()),
        );
        registry.register(
            constants::META_PACE_OF_PROGRESSION,
            Box::new(scales::pace_of_progression()),
        );
        registry
    }

    pub fn register(&mut self, meta_type: impl Into<String>, scorer: Box<dyn MetadatumScorer>) {
        self.scorers.insert(meta_type.into(), scorer);
    }

    /// The scorer for a metadata type, falling back to the default.
    pub fn scorer(&self, meta_type: &str) -> &dyn MetadatumScorer {
        self.scorers
            .get(meta_type)
            .map(|s| s.as_ref())
            .unwrap_or(&self.default)
    }

    /// Whether a specialized scorer is registered for this type.
    pub fn has_specialized(&self, meta_type: &str) -> bool {
        self.scorers.contains_key(meta_type)
    }
}

impl Default for MetadataScorerRegistry {
    fn default() -> Self {
        Self::with_standard_scales()
    }
}
