//! The declarative disclosure policy: tier × field category → allowed.
//!
//! Centralizing the table here avoids the bug class of "one accessor
//! forgot to check the tier".

use pheno_core::AccessTier;

/// What kind of field an accessor or projector is about to disclose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldCategory {
    /// Match-owned identifying fields: id, name, type, document, reporter.
    MatchIdentity,
    /// Reference-side "query" fields. Never secret to the requester.
    QueryIdentity,
    /// Numeric similarity scores read through accessors. Always
    /// computable; the value never depends on the tier.
    Score,
    /// Score emission in JSON projections. Suppressed for private
    /// tiers; patient-level JSON is gated separately as the strictest
    /// gate.
    SerializedScore,
    /// Child entries (metadata, features, disorders) present on both
    /// sides of the pair.
    MatchedChildren,
    /// Child entries present on the match side only.
    UnmatchedChildren,
}

/// Whether the given tier may disclose the given field category.
pub fn allows(tier: AccessTier, field: FieldCategory) -> bool {
    use FieldCategory::*;
    if tier.is_open_access() {
        return true;
    }
    if tier.is_limited_access() {
        return matches!(field, QueryIdentity | Score | SerializedScore | MatchedChildren);
    }
    // Private: the score stays computable internally; everything
    // match-owned and every serialized score is withheld.
    matches!(field, QueryIdentity | Score)
}
