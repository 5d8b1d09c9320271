//! Ordinal scale scorers for the standard metadata types.

use pheno_core::models::Metadatum;
use pheno_core::traits::MetadatumScorer;

/// Scores a metadata type whose known term values sit on an explicit
/// ordinal scale.
///
/// Equal values score 1.0, opposite ends -1.0, intermediate distances
/// interpolate linearly (`1 - 2·|i-j|/(n-1)`). A designated
/// "variable/indeterminate" value forces 0.0 regardless of the other
/// side, as do off-scale, blank, or missing values.
pub struct OrdinalScaleScorer {
    scale: Vec<&'static str>,
    variable: Option<&'static str>,
}

impl OrdinalScaleScorer {
    pub fn new(scale: Vec<&'static str>) -> Self {
        Self {
            scale,
            variable: None,
        }
    }

    pub fn with_variable(mut self, variable: &'static str) -> Self {
        self.variable = Some(variable);
        self
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.scale.iter().position(|v| *v == id)
    }
}

impl MetadatumScorer for OrdinalScaleScorer {
    fn score(&self, match_side: Option<&Metadatum>, reference: Option<&Metadatum>) -> f64 {
        let (m, r) = match (match_side, reference) {
            (Some(m), Some(r)) => (m, r),
            _ => return 0.0,
        };
        if m.id().is_empty() || r.id().is_empty() {
            return 0.0;
        }
        if self.variable == Some(m.id()) || self.variable == Some(r.id()) {
            return 0.0;
        }
        let (i, j) = match (self.position(m.id()), self.position(r.id())) {
            (Some(i), Some(j)) => (i, j),
            _ => return 0.0,
        };
        if self.scale.len() < 2 {
            return 1.0;
        }
        let span = (self.scale.len() - 1) as f64;
        1.0 - 2.0 * (i.abs_diff(j) as f64) / span
    }
}

/// Age of onset, earliest to latest.
pub fn age_of_onset() -> OrdinalScaleScorer {
    OrdinalScaleScorer::new(vec![
        "HP:0030674", // Antenatal onset
        "HP:0003577", // Congenital onset
        "HP:0003623", // Neonatal onset
        "HP:0003593", // Infantile onset
        "HP:0011463", // Childhood onset
        "HP:0003621", // Juvenile onset
        "HP:0003581", // Adult onset
        "HP:0003584", // Late onset
    ])
}

/// Speed of onset, most sudden to most insidious.
pub fn speed_of_onset() -> OrdinalScaleScorer {
    OrdinalScaleScorer::new(vec![
        "HP:0011009", // Acute
        "HP:0011011", // Subacute
        "HP:0011010", // Chronic
        "HP:0003674", // Insidious onset
    ])
}

/// Pace of progression, static to fastest. "Variable progression"
/// carries no ordinal information and forces 0.0.
pub fn pace_of_progression() -> OrdinalScaleScorer {
    OrdinalScaleScorer::new(vec![
        "HP:0003680", // Nonprogressive
        "HP:0003677", // Slow progression
        "HP:0003676", // Progressive
        "HP:0003678", // Rapidly progressive
    ])
    .with_variable("HP:0003682") // Variable progression
}
