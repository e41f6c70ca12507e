//! Investor screening criteria applied before ranking.

use serde::{Deserialize, Serialize};
use yieldrank_core::types::CreditRating;

use crate::candidate::RankedBond;

/// Hard limits a candidate must satisfy to be ranked at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreeningCriteria {
    /// Weakest acceptable rating. Unrated bonds fail any floor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_floor: Option<CreditRating>,

    /// Longest acceptable duration in years. Bonds without a duration pass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<f64>,

    /// Lowest acceptable price per 100 par.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_floor: Option<f64>,
}

impl ScreeningCriteria {
    /// Creates criteria that admit everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rating floor.
    #[must_use]
    pub fn with_rating_floor(mut self, floor: CreditRating) -> Self {
        self.rating_floor = Some(floor);
        self
    }

    /// Sets the duration ceiling.
    #[must_use]
    pub fn with_max_duration(mut self, years: f64) -> Self {
        self.max_duration = Some(years);
        self
    }

    /// Sets the price floor.
    #[must_use]
    pub fn with_price_floor(mut self, price: f64) -> Self {
        self.price_floor = Some(price);
        self
    }

    /// Returns true if `candidate` passes the rating and price floors.
    ///
    /// The duration ceiling is applied by the ranking engine itself.
    #[must_use]
    pub fn admits(&self, candidate: &RankedBond) -> bool {
        if let Some(floor) = self.rating_floor {
            let rated = candidate
                .credit
                .rating
                .is_some_and(|rating| rating.meets_floor(floor));
            if !rated {
                return false;
            }
        }
        if let Some(floor) = self.price_floor {
            if candidate.bond.price < floor {
                return false;
            }
        }
        true
    }
}

/// Returns true if `candidate` fits under `max_duration`.
///
/// Bonds with no known duration always fit.
pub(crate) fn within_duration(candidate: &RankedBond, max_duration: Option<f64>) -> bool {
    match (max_duration, candidate.duration()) {
        (Some(max), Some(duration)) => duration <= max,
        _ => true,
    }
}
