pub mod disorder;
pub mod feature;
pub mod patient;
pub mod term;

pub use disorder::Disorder;
pub use feature::{Feature, Metadatum};
pub use patient::Patient;
pub use term::TermRef;
