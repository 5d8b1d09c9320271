use std::sync::Arc;

use pheno_core::constants;
use pheno_core::models::{Feature, Metadatum, TermRef};
use pheno_similarity::{
    FeatureSimilarityEngine, MemoryOntology, MetadataScorerRegistry, TermSimilarityScorer,
};

fn ontology() -> Arc<MemoryOntology> {
    let mut onto = MemoryOntology::new();
    for rec in test_fixtures::load_ontology_records() {
        let parents: Vec<&str> = rec.parents.iter().map(|s| s.as_str()).collect();
        onto.insert(&rec.id, rec.name.as_deref(), &parents);
    }
    Arc::new(onto)
}

fn engine() -> FeatureSimilarityEngine {
    FeatureSimilarityEngine::new(
        TermSimilarityScorer::new(ontology()),
        MetadataScorerRegistry::with_standard_scales(),
    )
}

fn present(id: &str) -> Feature {
    Feature::new(TermRef::new(id), "phenotype", true)
}

fn absent(id: &str) -> Feature {
    Feature::new(TermRef::new(id), "phenotype", false)
}

fn onset(id: &str) -> Metadatum {
    Metadatum::new(constants::META_AGE_OF_ONSET, TermRef::new(id))
}

fn pace(id: &str) -> Metadatum {
    Metadatum::new(constants::META_PACE_OF_PROGRESSION, TermRef::new(id))
}

// ── Missing input and NaN short-circuit ──────────────────────────────────

#[test]
fn missing_feature_scores_nan() {
    let e = engine();
    let f = present("HP:0001382");
    assert!(e.score(None, Some(&f)).is_nan());
    assert!(e.score(Some(&f), None).is_nan());
    assert!(e.score(None, None).is_nan());
}

#[test]
fn unresolvable_term_short_circuits_to_nan() {
    let e = engine();
    let known = present("HP:0001382");
    let unknown = present("HP:7777777");
    assert!(e.score(Some(&known), Some(&unknown)).is_nan());
}

// ── Presence rule ────────────────────────────────────────────────────────

#[test]
fn identical_present_features_score_one() {
    let e = engine();
    let a = present("HP:0001382");
    assert_eq!(e.score(Some(&a), Some(&a)), 1.0);
}

#[test]
fn identical_term_opposite_presence_inverts_the_score() {
    let e = engine();
    let observed = present("HP:0001382");
    let excluded = absent("HP:0001382");
    assert_eq!(e.score(Some(&observed), Some(&excluded)), -1.0);
}

#[test]
fn related_terms_with_opposite_presence_invert_the_base() {
    let e = engine();
    let observed = present("HP:0001382");
    let excluded = absent("HP:0001388");
    let base = e.score(Some(&observed), Some(&present("HP:0001388")));
    assert_eq!(e.score(Some(&observed), Some(&excluded)), -base);
}

#[test]
fn both_absent_features_agree() {
    let e = engine();
    let a = absent("HP:0001382");
    assert_eq!(e.score(Some(&a), Some(&a)), 1.0);
}

// ── Metadata adjustment ──────────────────────────────────────────────────

#[test]
fn zero_shared_metadata_yields_the_base_score() {
    let e = engine();
    let plain = present("HP:0001382");
    let with_meta = present("HP:0001388").with_metadatum(onset("HP:0011463"));
    let base = e.score(Some(&plain), Some(&present("HP:0001388")));
    // Metadata on only one side must not influence the score.
    assert_eq!(e.score(Some(&plain), Some(&with_meta)), base);
}

#[test]
fn agreeing_metadata_pulls_a_positive_score_toward_one() {
    let e = engine();
    let base = e.score(
        Some(&present("HP:0001382")),
        Some(&present("HP:0001388")),
    );
    let m = present("HP:0001382").with_metadatum(onset("HP:0011463"));
    let r = present("HP:0001388").with_metadatum(onset("HP:0011463"));
    let adjusted = e.score(Some(&m), Some(&r));
    assert!(
        adjusted > base,
        "agreement must raise the score: {adjusted} vs {base}"
    );
    assert!(adjusted <= 1.0);
}

#[test]
fn disagreeing_metadata_pulls_toward_the_opposite_sign() {
    let e = engine();
    let base = e.score(
        Some(&present("HP:0001382")),
        Some(&present("HP:0001388")),
    );
    let m = present("HP:0001382").with_metadatum(onset("HP:0030674"));
    let r = present("HP:0001388").with_metadatum(onset("HP:0003584"));
    let adjusted = e.score(Some(&m), Some(&r));
    assert!(
        adjusted < base,
        "disagreement must lower the score: {adjusted} vs {base}"
    );
    assert!(adjusted >= -1.0);
}

#[test]
fn adding_an_agreeing_type_never_decreases_a_positive_score() {
    let e = engine();
    let m1 = present("HP:0001382").with_metadatum(onset("HP:0011463"));
    let r1 = present("HP:0001388").with_metadatum(onset("HP:0011463"));
    let one_type = e.score(Some(&m1), Some(&r1));

    let m2 = m1.clone().with_metadatum(pace("HP:0003677"));
    let r2 = r1.clone().with_metadatum(pace("HP:0003677"));
    let two_types = e.score(Some(&m2), Some(&r2));

    assert!(two_types >= one_type);
}

#[test]
fn adding_a_disagreeing_type_never_increases_a_positive_score() {
    let e = engine();
    let m1 = present("HP:0001382").with_metadatum(onset("HP:0011463"));
    let r1 = present("HP:0001388").with_metadatum(onset("HP:0011463"));
    let agreeing_only = e.score(Some(&m1), Some(&r1));

    let m2 = m1.clone().with_metadatum(pace("HP:0003680"));
    let r2 = r1.clone().with_metadatum(pace("HP:0003678"));
    let with_disagreement = e.score(Some(&m2), Some(&r2));

    assert!(with_disagreement <= agreeing_only);
}

#[test]
fn full_agreement_on_an_exact_match_stays_exactly_one() {
    let e = engine();
    let f = present("HP:0001382").with_metadatum(onset("HP:0011463"));
    assert_eq!(e.score(Some(&f), Some(&f)), 1.0);
}

// ── Degraded exact-match-only mode ───────────────────────────────────────

#[test]
fn exact_match_only_scores_equal_terms_by_presence() {
    let e = FeatureSimilarityEngine::exact_match_only(MetadataScorerRegistry::new());
    let observed = present("HP:0001382");
    let excluded = absent("HP:0001382");
    assert_eq!(e.score(Some(&observed), Some(&observed)), 1.0);
    assert_eq!(e.score(Some(&observed), Some(&excluded)), -1.0);
}

#[test]
fn exact_match_only_scores_different_terms_zero() {
    let e = FeatureSimilarityEngine::exact_match_only(MetadataScorerRegistry::new());
    let a = present("HP:0001382");
    let b = present("HP:0001388");
    assert_eq!(e.score(Some(&a), Some(&b)), 0.0);
}
