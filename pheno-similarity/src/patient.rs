//! Patient-level aggregation: deterministic feature pairing, union
//! normalization, and the shared-disorder bonus.

use rayon::prelude::*;

use pheno_core::models::Patient;
use pheno_core::SimilarityConfig;

use crate::feature::FeatureSimilarityEngine;

/// A feature pairing chosen by the aggregate scorer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeaturePair {
    /// Index into the match patient's features.
    pub match_index: usize,
    /// Index into the reference patient's features.
    pub reference_index: usize,
    pub score: f64,
}

/// Combines all feature-pair and disorder-pair evidence into a single
/// patient-level score in [-1.0, 1.0].
pub struct PatientAggregateScorer {
    features: FeatureSimilarityEngine,
    disorder_bonus: f64,
}

impl PatientAggregateScorer {
    pub fn new(features: FeatureSimilarityEngine) -> Self {
        Self::with_config(features, &SimilarityConfig::default())
    }

    pub fn with_config(features: FeatureSimilarityEngine, config: &SimilarityConfig) -> Self {
        Self {
            features,
            disorder_bonus: config.disorder_bonus,
        }
    }

    /// The feature engine this scorer aggregates over.
    pub fn feature_engine(&self) -> &FeatureSimilarityEngine {
        &self.features
    }

    /// Score one (match, reference) pair. The result never depends on
    /// the access tier; only disclosure does.
    pub fn score(&self, match_patient: &Patient, reference: &Patient) -> f64 {
        let total = match_patient.features.len() + reference.features.len();
        if total == 0 {
            return 0.0;
        }

        let pairs = self.pair_features(match_patient, reference);
        let paired_sum: f64 = pairs.iter().map(|p| p.score).sum();
        // Union count: paired features count once, unpaired features
        // dilute the magnitude without flipping the sign.
        let denominator = (total - pairs.len()) as f64;
        let mut score = (paired_sum / denominator).clamp(-1.0, 1.0);

        let shared = match_patient.shared_disorder_ids(reference);
        if score > 0.0 {
            for _ in &shared {
                score += (1.0 - score) * self.disorder_bonus;
            }
        }

        tracing::debug!(
            paired = pairs.len(),
            total,
            shared_disorders = shared.len(),
            score,
            "scored patient pair"
        );
        score
    }

    /// Score many independent pairs in parallel, preserving input order.
    pub fn score_all(&self, pairs: &[(&Patient, &Patient)]) -> Vec<f64> {
        pairs
            .par_iter()
            .map(|(m, r)| self.score(m, r))
            .collect()
    }

    /// Maximum-weight pairing over finite, non-zero feature-pair
    /// scores, found by exhaustive search over candidate matchings
    /// (patient feature sets are small). Weight is |score| so that a
    /// strong negative pair (same term, opposite presence) still
    /// pairs; picking the jointly best assignment means the locally
    /// strongest edge never strands two weaker but viable pairs.
    /// Ties prefer more pairs, then the lexicographically smallest
    /// (match term id, reference term id) sequence, so the pairing
    /// never depends on input iteration order.
    pub fn pair_features<'p>(
        &self,
        match_patient: &'p Patient,
        reference: &'p Patient,
    ) -> Vec<FeaturePair> {
        let mut groups: Vec<Vec<Edge<'p>>> = Vec::new();
        for (mi, mf) in match_patient.features.iter().enumerate() {
            let mut edges = Vec::new();
            for (ri, rf) in reference.features.iter().enumerate() {
                let score = self.features.score(Some(mf), Some(rf));
                if score.is_finite() && score != 0.0 {
                    edges.push(Edge {
                        pair: FeaturePair {
                            match_index: mi,
                            reference_index: ri,
                            score,
                        },
                        match_id: mf.term.id.as_str(),
                        reference_id: rf.term.id.as_str(),
                    });
                }
            }
            if !edges.is_empty() {
                edges.sort_by(|a, b| a.reference_id.cmp(b.reference_id));
                groups.push(edges);
            }
        }
        // Canonical exploration order: candidate comparison is id-based,
        // so the winner is independent of input iteration order.
        groups.sort_by(|a, b| a[0].match_id.cmp(b[0].match_id));

        let mut used = vec![false; reference.features.len()];
        let mut current = Vec::new();
        let mut best = None;
        search_matchings(&groups, 0, &mut used, &mut current, &mut best);
        best.map(|s: Matching<'p>| s.pairs).unwrap_or_default()
    }
}

struct Edge<'p> {
    pair: FeaturePair,
    match_id: &'p str,
    reference_id: &'p str,
}

struct Matching<'p> {
    weight: f64,
    pairs: Vec<FeaturePair>,
    key: Vec<(&'p str, &'p str)>,
}

/// Walks every matching: each match feature is either left unpaired or
/// paired with one still-free reference feature it has an edge to.
fn search_matchings<'p, 'e>(
    groups: &'e [Vec<Edge<'p>>],
    position: usize,
    used: &mut [bool],
    current: &mut Vec<&'e Edge<'p>>,
    best: &mut Option<Matching<'p>>,
) {
    if position == groups.len() {
        let weight: f64 = current.iter().map(|e| e.pair.score.abs()).sum();
        let key: Vec<(&str, &str)> = current
            .iter()
            .map(|e| (e.match_id, e.reference_id))
            .collect();
        let better = match best {
            None => true,
            Some(b) if weight != b.weight => weight > b.weight,
            Some(b) if current.len() != b.pairs.len() => current.len() > b.pairs.len(),
            Some(b) => key < b.key,
        };
        if better {
            *best = Some(Matching {
                weight,
                pairs: current.iter().map(|e| e.pair).collect(),
                key,
            });
        }
        return;
    }
    search_matchings(groups, position + 1, used, current, best);
    for edge in &groups[position] {
        if used[edge.pair.reference_index] {
            continue;
        }
        used[edge.pair.reference_index] = true;
        current.push(edge);
        search_matchings(groups, position + 1, used, current, best);
        current.pop();
        used[edge.pair.reference_index] = false;
    }
}
