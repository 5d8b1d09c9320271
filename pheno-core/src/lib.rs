//! # pheno-core
//!
//! Foundation crate for the pheno patient-similarity system.
//! Defines the data model, access tiers, collaborator traits, errors,
//! config, and constants. Every other crate in the workspace depends
//! on this.

pub mod access;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use access::{AccessTier, Permission};
pub use config::SimilarityConfig;
pub use errors::{PhenoError, PhenoResult};
pub use models::{Disorder, Feature, Metadatum, Patient, TermRef};
pub use traits::{MetadatumScorer, OntologyLookup, ResolvedTerm};
