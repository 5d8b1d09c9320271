use serde_json::{Map, Value};

use pheno_core::models::Feature;
use pheno_core::AccessTier;
use pheno_similarity::FeatureSimilarityEngine;

use crate::metadatum::RestrictedMetadatumView;
use crate::policy::{allows, FieldCategory};

/// Tier-restricted pairing of a match feature against a reference
/// feature. Scoring delegates to the feature engine and is tier-blind;
/// only disclosure is gated.
pub struct RestrictedFeatureView<'a> {
    match_side: Option<&'a Feature>,
    reference: Option<&'a Feature>,
    access: AccessTier,
    engine: &'a FeatureSimilarityEngine,
}

impl<'a> RestrictedFeatureView<'a> {
    pub fn new(
        match_side: Option<&'a Feature>,
        reference: Option<&'a Feature>,
        access: AccessTier,
        engine: &'a FeatureSimilarityEngine,
    ) -> Self {
        Self {
            match_side,
            reference,
            access,
            engine,
        }
    }

    pub fn is_matching_pair(&self) -> bool {
        self.match_side.is_some() && self.reference.is_some()
    }

    /// Match-side category label. Open access falls back to the
    /// reference side when the match is absent.
    pub fn feature_type(&self) -> Option<&str> {
        if !allows(self.access, FieldCategory::MatchIdentity) {
            return None;
        }
        self.match_side
            .or(self.reference)
            .map(|f| f.feature_type.as_str())
    }

    /// Reference-side category label.
    pub fn query_type(&self) -> Option<&str> {
        if !allows(self.access, FieldCategory::QueryIdentity) {
            return None;
        }
        self.reference.map(|f| f.feature_type.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        if !allows(self.access, FieldCategory::MatchIdentity) {
            return None;
        }
        self.match_side.or(self.reference).map(|f| f.id())
    }

    pub fn name(&self) -> Option<&str> {
        if !allows(self.access, FieldCategory::MatchIdentity) {
            return None;
        }
        self.match_side.or(self.reference).and_then(|f| f.name())
    }

    pub fn query_id(&self) -> Option<&str> {
        if !allows(self.access, FieldCategory::QueryIdentity) {
            return None;
        }
        self.reference.map(|f| f.id())
    }

    /// Match-side presence flag, gated with the other match-owned
    /// fields.
    pub fn is_present(&self) -> Option<bool> {
        if !allows(self.access, FieldCategory::MatchIdentity) {
            return None;
        }
        self.match_side.map(|f| f.present)
    }

    pub fn reference(&self) -> Option<&Feature> {
        self.reference
    }

    /// Feature-pair score via the engine. Tier-blind; NaN when either
    /// side is missing or a term is unresolvable.
    pub fn score(&self) -> f64 {
        self.engine.score(self.match_side, self.reference)
    }

    /// Metadata child views. Open access shows every match-side
    /// metadatum (paired with the reference metadatum of the same type
    /// when one exists); limited access shows matching pairs only;
    /// private shows nothing.
    pub fn metadata(&self) -> Vec<RestrictedMetadatumView<'a>> {
        let Some(m) = self.match_side else {
            return Vec::new();
        };
        let matched = allows(self.access, FieldCategory::MatchedChildren);
        let unmatched = allows(self.access, FieldCategory::UnmatchedChildren);
        let mut views = Vec::new();
        for (meta_type, mm) in &m.metadata {
            let rm = self
                .reference
                .and_then(|r| r.metadata.get(meta_type));
            let disclosed = if rm.is_some() { matched } else { unmatched };
            if disclosed {
                views.push(RestrictedMetadatumView::new(Some(mm), rm, self.access));
            }
        }
        views
    }

    /// JSON projection. Absent values are omitted; `isPresent` is
    /// emitted only when explicitly false; a fully-absent pair projects
    /// to JSON null.
    pub fn to_json(&self) -> Value {
        if self.match_side.is_none() && self.reference.is_none() {
            return Value::Null;
        }
        let mut obj = Map::new();
        if let Some(feature_type) = self.feature_type() {
            obj.insert("type".into(), feature_type.into());
        }
        if let Some(query_type) = self.query_type() {
            obj.insert("queryType".into(), query_type.into());
        }
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
        if self.is_present() == Some(false) {
            obj.insert("isPresent".into(), false.into());
        }
        let metadata: Vec<Value> = self.metadata().iter().map(|m| m.to_json()).collect();
        if !metadata.is_empty() {
            obj.insert("metadata".into(), Value::Array(metadata));
        }
        Value::Object(obj)
    }
}
