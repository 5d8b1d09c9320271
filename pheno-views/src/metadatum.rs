use serde_json::{Map, Value};

use pheno_core::models::Metadatum;
use pheno_core::AccessTier;

use crate::policy::{allows, FieldCategory};

/// Tier-restricted pairing of a match metadatum against a reference
/// metadatum of the same type.
pub struct RestrictedMetadatumView<'a> {
    match_side: Option<&'a Metadatum>,
    reference: Option<&'a Metadatum>,
    access: AccessTier,
}

impl<'a> RestrictedMetadatumView<'a> {
    pub fn new(
        match_side: Option<&'a Metadatum>,
        reference: Option<&'a Metadatum>,
        access: AccessTier,
    ) -> Self {
        Self {
            match_side,
            reference,
            access,
        }
    }

    pub fn is_matching_pair(&self) -> bool {
        self.match_side.is_some() && self.reference.is_some()
    }

    /// The metadata type name. For a matching pair both sides carry the
    /// same type, so this is disclosable from the reference side even
    /// when match identity is withheld.
    pub fn meta_type(&self) -> Option<&str> {
        if allows(self.access, FieldCategory::MatchIdentity) {
            self.match_side
                .or(self.reference)
                .map(|m| m.meta_type.as_str())
        } else {
            self.reference.map(|m| m.meta_type.as_str())
        }
    }

    pub fn id(&self) -> Option<&str> {
        if !allows(self.access, FieldCategory::MatchIdentity) {
            return None;
        }
        self.match_side.or(self.reference).map(|m| m.id())
    }

    pub fn name(&self) -> Option<&str> {
        if !allows(self.access, FieldCategory::MatchIdentity) {
            return None;
        }
        self.match_side.or(self.reference).and_then(|m| m.name())
    }

    pub fn query_id(&self) -> Option<&str> {
        if !allows(self.access, FieldCategory::QueryIdentity) {
            return None;
        }
        self.reference.map(|m| m.id())
    }

    pub fn reference(&self) -> Option<&Metadatum> {
        self.reference
    }

    /// JSON projection carrying `type`, `id`, `queryId`, `name`.
    pub fn to_json(&self) -> Value {
        if self.match_side.is_none() && self.reference.is_none() {
            return Value::Null;
        }
        let mut obj = Map::new();
        if let Some(meta_type) = self.meta_type() {
            obj.insert("type".into(), meta_type.into());
        }
        if let Some(id) = self.id() {
            obj.insert("id".into(), id.into());
        }
        if let Some(query_id) = self.query_id() {
            obj.insert("queryId".into(), query_id.into());
        }
        if let Some(name) = self.name() {
            obj.insert("name".into(), name.into());
        }
        Value::Object(obj)
    }
}
