use serde_json::{Map, Value};

use pheno_core::models::Patient;
use pheno_core::{AccessTier, PhenoError, PhenoResult};
use pheno_similarity::PatientAggregateScorer;

use crate::disorder::RestrictedDisorderView;
use crate::feature::RestrictedFeatureView;
use crate::policy::{allows, FieldCategory};

/// Tier-restricted view over one whole (match, reference) comparison.
///
/// Construction with both sides absent is rejected outright; every
/// other missing input degrades per accessor.
pub struct RestrictedPatientView<'a> {
    match_side: Option<&'a Patient>,
    reference: Option<&'a Patient>,
    access: AccessTier,
    scorer: &'a PatientAggregateScorer,
}

impl<'a> RestrictedPatientView<'a> {
    pub fn new(
        match_side: Option<&'a Patient>,
        reference: Option<&'a Patient>,
        access: AccessTier,
        scorer: &'a PatientAggregateScorer,
    ) -> PhenoResult<Self> {
        if match_side.is_none() && reference.is_none() {
            return Err(PhenoError::EmptyPair);
        }
        Ok(Self {
            match_side,
            reference,
            access,
            scorer,
        })
    }

    pub fn access(&self) -> AccessTier {
        self.access
    }

    pub fn is_matching_pair(&self) -> bool {
        self.match_side.is_some() && self.reference.is_some()
    }

    /// Match document reference. Open access falls back to the
    /// reference side when the match is absent.
    pub fn id(&self) -> Option<&str> {
        if !allows(self.access, FieldCategory::MatchIdentity) {
            return None;
        }
        self.match_side
            .or(self.reference)
            .map(|p| p.document.as_str())
    }

    /// Match reporting-user reference.
    pub fn owner(&self) -> Option<&str> {
        if !allows(self.access, FieldCategory::MatchIdentity) {
            return None;
        }
        self.match_side
            .or(self.reference)
            .map(|p| p.reporter.as_str())
    }

    /// Whether the match patient was reported by the same user as the
    /// reference patient (the requester comparing against their own
    /// case).
    pub fn my_case(&self) -> Option<bool> {
        if !allows(self.access, FieldCategory::MatchIdentity) {
            return None;
        }
        match (self.match_side, self.reference) {
            (Some(m), Some(r)) => Some(m.reporter == r.reporter),
            _ => None,
        }
    }

    /// The reference patient is never secret to its own requester.
    pub fn reference(&self) -> Option<&Patient> {
        self.reference
    }

    /// Aggregate similarity score. Tier-blind: the numeric value never
    /// depends on the access tier, only its disclosure does.
    pub fn score(&self) -> f64 {
        match (self.match_side, self.reference) {
            (Some(m), Some(r)) => self.scorer.score(m, r),
            _ => f64::NAN,
        }
    }

    /// Number of match-side features disclosable under this tier.
    /// Counting the full record would leak how many features a limited
    /// viewer cannot see, so the count covers exactly what `features`
    /// returns.
    pub fn features_count(&self) -> Option<usize> {
        if !allows(self.access, FieldCategory::MatchedChildren) {
            return None;
        }
        self.match_side.map(|_| self.features().len())
    }

    /// Feature child views, in match-side order. Pairing is by exact
    /// term id against the reference side. Limited access keeps only
    /// pairs present on both sides; private keeps nothing.
    pub fn features(&self) -> Vec<RestrictedFeatureView<'a>> {
        let Some(m) = self.match_side else {
            return Vec::new();
        };
        let matched = allows(self.access, FieldCategory::MatchedChildren);
        let unmatched = allows(self.access, FieldCategory::UnmatchedChildren);
        let engine = self.scorer.feature_engine();
        let mut views = Vec::new();
        for mf in &m.features {
            let rf = self
                .reference
                .and_then(|r| r.features.iter().find(|f| f.term.same_term(&mf.term)));
            let disclosed = if rf.is_some() { matched } else { unmatched };
            if disclosed {
                views.push(RestrictedFeatureView::new(
                    Some(mf),
                    rf,
                    self.access,
                    engine,
                ));
            }
        }
        views
    }

    /// Disorder child views, in match-side order, paired by identifier.
    pub fn disorders(&self) -> Vec<RestrictedDisorderView<'a>> {
        let Some(m) = self.match_side else {
            return Vec::new();
        };
        let matched = allows(self.access, FieldCategory::MatchedChildren);
        let unmatched = allows(self.access, FieldCategory::UnmatchedChildren);
        let mut views = Vec::new();
        for md in &m.disorders {
            let rd = self
                .reference
                .and_then(|r| r.disorders.iter().find(|d| d.id == md.id));
            let disclosed = if rd.is_some() { matched } else { unmatched };
            if disclosed {
                views.push(RestrictedDisorderView::new(Some(md), rd, self.access));
            }
        }
        views
    }

    /// JSON projection. Patient-level serialization is the strictest
    /// gate: anything short of open access projects to the empty
    /// object, even though some accessors would still return
    /// query-side data.
    pub fn to_json(&self) -> Value {
        if !self.access.is_open_access() {
            return Value::Object(Map::new());
        }
        let mut obj = Map::new();
        if let Some(id) = self.id() {
            obj.insert("id".into(), id.into());
        }
        obj.insert("access".into(), self.access.tag().into());
        if let Some(owner) = self.owner() {
            obj.insert("owner".into(), owner.into());
        }
        if let Some(my_case) = self.my_case() {
            obj.insert("myCase".into(), my_case.into());
        }
        let score = self.score();
        if score.is_finite() {
            obj.insert("score".into(), score.into());
        }
        if let Some(count) = self.features_count() {
            obj.insert("featuresCount".into(), count.into());
        }
        let features: Vec<Value> = self.features().iter().map(|f| f.to_json()).collect();
        if !features.is_empty() {
            obj.insert("features".into(), Value::Array(features));
        }
        let disorders: Vec<Value> = self.disorders().iter().map(|d| d.to_json()).collect();
        if !disorders.is_empty() {
            obj.insert("disorders".into(), Value::Array(disorders));
        }
        Value::Object(obj)
    }
}
