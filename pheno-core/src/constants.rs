/// Pheno system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Ancestor-path length beyond which two terms score exactly 0.0.
pub const DEFAULT_MAX_TERM_DISTANCE: u32 = 4;

/// Fraction of remaining headroom granted per shared disorder.
pub const DEFAULT_DISORDER_BONUS: f64 = 0.5;

/// Standard metadata type names carried by clinical features.
pub const META_AGE_OF_ONSET: &str = "age_of_onset";
pub const META_SPEED_OF_ONSET: &str = "speed_of_onset";
pub const META_PACE_OF_PROGRESSION: &str = "pace_of_progression";
