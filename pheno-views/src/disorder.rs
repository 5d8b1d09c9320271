use serde_json::{Map, Value};

use pheno_core::models::Disorder;
use pheno_core::AccessTier;

use crate::policy::{allows, FieldCategory};

/// Tier-restricted pairing of a match disorder against a reference
/// disorder.
pub struct RestrictedDisorderView<'a> {
    match_side: Option<&'a Disorder>,
    reference: Option<&'a Disorder>,
    access: AccessTier,
}

impl<'a> RestrictedDisorderView<'a> {
    pub fn new(
        match_side: Option<&'a Disorder>,
        reference: Option<&'a Disorder>,
        access: AccessTier,
    ) -> Self {
        Self {
            match_side,
            reference,
            access,
        }
    }

    /// True iff both sides are present, regardless of tier.
    pub fn is_matching_pair(&self) -> bool {
        self.match_side.is_some() && self.reference.is_some()
    }

    /// Match-side identifier. Open access falls back to the reference
    /// side when the match is absent.
    pub fn id(&self) -> Option<&str> {
        if !allows(self.access, FieldCategory::MatchIdentity) {
            return None;
        }
        self.match_side
            .or(self.reference)
            .map(|d| d.id.as_str())
    }

    pub fn name(&self) -> Option<&str> {
        if !allows(self.access, FieldCategory::MatchIdentity) {
            return None;
        }
        self.match_side.or(self.reference).and_then(|d| d.name.as_deref())
    }

    /// Reference-side identifier; never tier-gated beyond query access.
    pub fn query_id(&self) -> Option<&str> {
        if !allows(self.access, FieldCategory::QueryIdentity) {
            return None;
        }
        self.reference.map(|d| d.id.as_str())
    }

    /// The reference disorder is never secret to its own requester.
    pub fn reference(&self) -> Option<&Disorder> {
        self.reference
    }

    /// Exact-match disorder score: equal ids 1.0, both present but
    /// different -1.0, either side missing NaN. Tier-blind.
    pub fn score(&self) -> f64 {
        match (self.match_side, self.reference) {
            (Some(m), Some(r)) if m.id == r.id => 1.0,
            (Some(_), Some(_)) => -1.0,
            _ => f64::NAN,
        }
    }

    /// JSON projection. Absent values are omitted, never `null`; a
    /// fully-absent pair projects to JSON null.
    pub fn to_json(&self) -> Value {
        if self.match_side.is_none() && self.reference.is_none() {
            return Value::Null;
        }
        let mut obj = Map::new();
        if let Some(id) = self.id() {
            obj.insert("id".into(), id.into());
        }
        if let Some(name) = self.name() {
            obj.insert("name".into(), name.into());
        }
        if let Some(query_id) = self.query_id() {
            obj.insert("queryId".into(), query_id.into());
        }
        let score = self.score();
        if allows(self.access, FieldCategory::SerializedScore) && score.is_finite() {
            obj.insert("score".into(), score.into());
        }
        Value::Object(obj)
    }
}
