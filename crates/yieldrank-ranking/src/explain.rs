//! Plain-language explanation of a ranked bond.

use serde::{Deserialize, Serialize};

use crate::candidate::RankedBond;

/// Stability at or above this reads as high.
pub const HIGH_STABILITY: f64 = 0.8;

/// Stability at or above this reads as moderate.
pub const MODERATE_STABILITY: f64 = 0.6;

/// Liquidity at or above this reads as good.
pub const GOOD_LIQUIDITY: f64 = 0.7;

/// Liquidity at or above this reads as fair.
pub const FAIR_LIQUIDITY: f64 = 0.5;

/// Qualitative stability band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StabilityTier {
    /// Score of 0.8 or more.
    High,
    /// Score of 0.6 or more.
    Moderate,
    /// Anything lower.
    Lower,
}

impl StabilityTier {
    /// Classifies a stability score.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_STABILITY {
            Self::High
        } else if score >= MODERATE_STABILITY {
            Self::Moderate
        } else {
            Self::Lower
        }
    }

    /// Lower-case label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Moderate => "moderate",
            Self::Lower => "lower",
        }
    }
}

/// Qualitative liquidity band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiquidityTier {
    /// Score of 0.7 or more.
    Good,
    /// Score of 0.5 or more.
    Fair,
    /// Anything lower.
    Limited,
}

impl LiquidityTier {
    /// Classifies a liquidity score.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= GOOD_LIQUIDITY {
            Self::Good
        } else if score >= FAIR_LIQUIDITY {
            Self::Fair
        } else {
            Self::Limited
        }
    }

    /// Lower-case label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Limited => "limited",
        }
    }
}

/// Summary line plus supporting bullets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    /// One-line headline, e.g. `Rank #1: Fairfax County 4% 2034`.
    pub summary: String,
    /// Supporting points in display order.
    pub bullets: Vec<String>,
}

/// Builds an [`Explanation`] from a ranked bond.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplanationBuilder;

impl ExplanationBuilder {
    /// Creates a builder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Explains `bond`.
    #[must_use]
    pub fn explain(&self, bond: &RankedBond) -> Explanation {
        let headline = format!(
            "{} {}% {}",
            bond.issuer.name,
            bond.bond.coupon,
            bond.bond.maturity.year()
        );
        let summary = match bond.rank {
            Some(rank) => format!("Rank #{rank}: {headline}"),
            None => format!("Unranked: {headline}"),
        };

        let mut bullets = vec![
            format!(
                "After-tax yield {:.2}% (pre-tax {:.2}%)",
                bond.atytw, bond.pre_tax_ytw
            ),
            format!(
                "{} credit stability ({:.2})",
                capitalize(StabilityTier::from_score(bond.stability_score).label()),
                bond.stability_score
            ),
            format!(
                "{} liquidity ({:.2})",
                capitalize(LiquidityTier::from_score(bond.liquidity_score).label()),
                bond.liquidity_score
            ),
        ];

        if let Some(days) = bond.days_since_last_trade() {
            bullets.push(format!("Last traded {days}d ago"));
        }

        Explanation { summary, bullets }
    }
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
