/// Errors raised by the pheno scoring and view layers.
///
/// Almost everything in this system degrades (NaN scores, absent fields)
/// rather than failing; the variants here cover the few cases where
/// construction-time input is genuinely invalid.
#[derive(Debug, thiserror::Error)]
pub enum PhenoError {
    /// A patient-level view needs at least one side of the pair.
    #[error("cannot build a similarity view with neither match nor reference")]
    EmptyPair,

    #[error("config parse failed: {0}")]
    Config(#[from] toml::de::Error),
}

pub type PhenoResult<T> = Result<T, PhenoError>;
