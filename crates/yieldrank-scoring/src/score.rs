//! Scored result shared by the stability and liquidity scorers.

use serde::{Deserialize, Serialize};

/// Neutral starting point for every score.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// A score in `[0, 1]` with the factors that produced it, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    /// Final clamped score.
    pub score: f64,
    /// One line per applied rule.
    pub factors: Vec<String>,
}

/// Credit and structural stability of a bond.
pub type StabilityScore = FactorScore;

/// Ease of trading a bond.
pub type LiquidityScore = FactorScore;

impl FactorScore {
    /// Neutral score with a single explanatory factor.
    #[must_use]
    pub fn neutral(reason: impl Into<String>) -> Self {
        Self {
            score: NEUTRAL_SCORE,
            factors: vec![reason.into()],
        }
    }

    pub(crate) fn finish(raw: f64, factors: Vec<String>) -> Self {
        // NaN collapses to 0.0 via f64::max
        Self {
            score: raw.max(0.0).min(1.0),
            factors,
        }
    }
}
