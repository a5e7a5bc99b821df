use serde::{Deserialize, Serialize};

/// How a "No lo sé" answer takes part in aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DontKnowPolicy {
    /// Counts toward the maximum with zero points, like "0. No iniciado".
    #[default]
    ScoreAsZero,
    /// Dropped from numerator and denominator, like "No aplica".
    Exclude,
}

impl DontKnowPolicy {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "zero" | "score_as_zero" => Some(Self::ScoreAsZero),
            "exclude" | "skip" => Some(Self::Exclude),
            _ => None,
        }
    }
}

/// Tunables for the scoring engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub dont_know: DontKnowPolicy,
}
