//! # pheno-similarity
//!
//! Similarity scoring between patient clinical records: ontology-distance
//! term scoring, per-type metadata scales, feature-pair adjustment, and
//! patient-level aggregation. All scoring is pure computation over
//! read-only snapshots; every score is in [-1.0, 1.0] or NaN.

pub mod feature;
pub mod metadata;
pub mod ontology;
pub mod patient;
pub mod term;

pub use feature::FeatureSimilarityEngine;
pub use metadata::{DefaultMetadatumScorer, MetadataScorerRegistry};
pub use ontology::MemoryOntology;
pub use patient::PatientAggregateScorer;
pub use term::TermSimilarityScorer;
