//! # pheno-views
//!
//! Tier-restricted projections of one (match, reference) comparison.
//! Every accessor and every JSON projector consults the single
//! disclosure policy table in [`policy`]; no view checks the tier ad
//! hoc. Views hold borrowed snapshots for the duration of one
//! comparison and never mutate them.

pub mod disorder;
pub mod feature;
pub mod metadatum;
pub mod patient;
pub mod policy;

pub use disorder::RestrictedDisorderView;
pub use feature::RestrictedFeatureView;
pub use metadatum::RestrictedMetadatumView;
pub use patient::RestrictedPatientView;
pub use policy::FieldCategory;
