pub mod ontology;
pub mod scorer;

pub use ontology::{OntologyLookup, ResolvedTerm};
pub use scorer::MetadatumScorer;
