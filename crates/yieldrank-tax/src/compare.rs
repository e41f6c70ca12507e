//! Side-by-side after-tax comparison of two bonds.

use serde::{Deserialize, Serialize};
use yieldrank_core::types::{BondData, TaxProfile};

use crate::atytw::{AtytwCalculator, AtytwResult};

/// After-tax yields within this many percentage points are treated as equal.
pub const EQUIVALENT_YIELD_TOLERANCE: f64 = 0.001;

/// Which side of a comparison comes out ahead after tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preference {
    /// The first bond.
    Left,
    /// The second bond.
    Right,
    /// Within [`EQUIVALENT_YIELD_TOLERANCE`].
    Equivalent,
}

/// Result of comparing two bonds for the same investor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondComparison {
    /// After-tax result for the first bond.
    pub left: AtytwResult,
    /// After-tax result for the second bond.
    pub right: AtytwResult,
    /// `(left.atytw - right.atytw) * 100`.
    pub advantage_bps: f64,
    /// Preferred side.
    pub preferred: Preference,
}

impl AtytwCalculator {
    /// Computes both bonds' after-tax yields and reports which is ahead.
    #[must_use]
    pub fn compare(&self, left: &BondData, right: &BondData, profile: &TaxProfile) -> BondComparison {
        let left = self.compute(left, profile);
        let right = self.compute(right, profile);
        let diff = left.atytw - right.atytw;

        let preferred = if diff.abs() < EQUIVALENT_YIELD_TOLERANCE {
            Preference::Equivalent
        } else if diff > 0.0 {
            Preference::Left
        } else {
            Preference::Right
        };

        BondComparison {
            advantage_bps: diff * 100.0,
            preferred,
            left,
            right,
        }
    }
}
