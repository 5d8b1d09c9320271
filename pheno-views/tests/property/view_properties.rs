use std::sync::Arc;

use proptest::prelude::*;
use serde_json::Value;

use pheno_core::models::{Feature, TermRef};
use pheno_core::{AccessTier, Permission};
use pheno_similarity::{
    FeatureSimilarityEngine, MemoryOntology, MetadataScorerRegistry, TermSimilarityScorer,
};
use pheno_views::RestrictedFeatureView;

fn engine() -> FeatureSimilarityEngine {
    let mut onto = MemoryOntology::new();
    for rec in test_fixtures::load_ontology_records() {
        let parents: Vec<&str> = rec.parents.iter().map(|s| s.as_str()).collect();
        onto.insert(&rec.id, rec.name.as_deref(), &parents);
    }
    FeatureSimilarityEngine::new(
        TermSimilarityScorer::new(Arc::new(onto)),
        MetadataScorerRegistry::with_standard_scales(),
    )
}

const FIXTURE_IDS: [&str; 5] = [
    "HP:0001382",
    "HP:0001388",
    "HP:0002829",
    "HP:0001250",
    "HP:9999999",
];

fn tier() -> impl Strategy<Value = AccessTier> {
    proptest::sample::select(vec![
        AccessTier::new(Permission::None),
        AccessTier::new(Permission::Match),
        AccessTier::new(Permission::View),
        AccessTier::new(Permission::Edit),
        AccessTier::new(Permission::Owner),
    ])
}

fn feature() -> impl Strategy<Value = Feature> {
    (proptest::sample::select(&FIXTURE_IDS[..]), any::<bool>())
        .prop_map(|(id, present)| Feature::new(TermRef::new(id), "phenotype", present))
}

fn count_nulls(value: &Value) -> usize {
    match value {
        Value::Null => 1,
        Value::Object(obj) => obj.values().map(count_nulls).sum(),
        Value::Array(items) => items.iter().map(count_nulls).sum(),
        _ => 0,
    }
}

fn keys_of(value: &Value) -> Vec<String> {
    match value {
        Value::Object(obj) => obj.keys().cloned().collect(),
        _ => Vec::new(),
    }
}

proptest! {
    // ── No accessor leaks a null into JSON ───────────────────────────────

    #[test]
    fn feature_json_never_contains_nested_nulls(
        m in feature(),
        r in feature(),
        t in tier()
    ) {
        let engine = engine();
        let view = RestrictedFeatureView::new(Some(&m), Some(&r), t, &engine);
        prop_assert_eq!(count_nulls(&view.to_json()), 0);
    }

    // ── Disclosure grows with the tier, never shrinks ────────────────────

    #[test]
    fn open_json_keys_are_a_superset_of_limited(
        m in feature(),
        r in feature()
    ) {
        let engine = engine();
        let open = RestrictedFeatureView::new(
            Some(&m), Some(&r), AccessTier::new(Permission::Owner), &engine,
        );
        let limited = RestrictedFeatureView::new(
            Some(&m), Some(&r), AccessTier::new(Permission::Match), &engine,
        );
        let open_keys = keys_of(&open.to_json());
        for key in keys_of(&limited.to_json()) {
            prop_assert!(open_keys.contains(&key), "open lost key {}", key);
        }
    }

    // ── The score accessor never depends on the tier ─────────────────────

    #[test]
    fn score_accessor_is_tier_blind(
        m in feature(),
        r in feature(),
        a in tier(),
        b in tier()
    ) {
        let engine = engine();
        let va = RestrictedFeatureView::new(Some(&m), Some(&r), a, &engine);
        let vb = RestrictedFeatureView::new(Some(&m), Some(&r), b, &engine);
        let sa = va.score();
        let sb = vb.score();
        prop_assert!(sa == sb || (sa.is_nan() && sb.is_nan()));
    }
}
