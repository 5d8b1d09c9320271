use crate::models::Metadatum;

/// Per-type metadata scoring strategy.
///
/// Implementations return a symmetric score in [-1.0, 1.0], or NaN when
/// the comparison is undefined for that strategy. They must never panic
/// on missing sides.
pub trait MetadatumScorer: Send + Sync {
    fn score(&self, match_side: Option<&Metadatum>, reference: Option<&Metadatum>) -> f64;
}
