//! Original-issue and market discount adjustment.
//!
//! A bond bought below par accretes toward 100 by maturity, and that
//! accretion is taxed. The evaluator spreads the discount evenly over the
//! remaining life and converts the tax drag into basis points of yield.
//!
//! The de minimis threshold is `100 - 0.25 * years_to_maturity`. Below the
//! threshold the accretion is charged at the ordinary income rate (37%);
//! between the threshold and par it is charged at the capital gains rate
//! (15%).

use serde::{Deserialize, Serialize};
use yieldrank_core::types::{BondData, Date};

/// Par price.
pub const PAR: f64 = 100.0;

/// Threshold drop per year to maturity, in price points.
pub const DEMINIMIS_POINTS_PER_YEAR: f64 = 0.25;

/// Rate charged on accretion below the de minimis threshold.
pub const ORDINARY_INCOME_RATE: f64 = 0.37;

/// Rate charged on accretion between the threshold and par.
pub const CAPITAL_GAINS_RATE: f64 = 0.15;

/// Outcome of a discount evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OidAssessment {
    /// A discount adjustment applies.
    pub has_oid: bool,
    /// Set on the ordinary-income branch (price below the threshold).
    pub deminimis: bool,
    /// Yield drag in basis points; zero when no adjustment applies.
    pub adjustment_bps: f64,
    /// De minimis threshold price.
    pub threshold: f64,
    /// Years from the as-of date to maturity.
    pub years_to_maturity: f64,
    /// Lines describing what was applied.
    pub explanation: Vec<String>,
}

impl OidAssessment {
    /// Adjustment in basis points, `None` when no discount branch applied.
    #[must_use]
    pub fn adjustment(&self) -> Option<f64> {
        self.has_oid.then_some(self.adjustment_bps)
    }

    fn none(threshold: f64, years_to_maturity: f64, explanation: Vec<String>) -> Self {
        Self {
            has_oid: false,
            deminimis: false,
            adjustment_bps: 0.0,
            threshold,
            years_to_maturity,
            explanation,
        }
    }
}

/// Detects discount or premium pricing and computes the yield adjustment.
#[derive(Debug, Clone, Copy)]
pub struct OidMarketDiscountEvaluator {
    as_of: Date,
}

impl OidMarketDiscountEvaluator {
    /// Creates an evaluator measuring time to maturity from `as_of`.
    #[must_use]
    pub fn new(as_of: Date) -> Self {
        Self { as_of }
    }

    /// Creates an evaluator as of today.
    #[must_use]
    pub fn today() -> Self {
        Self::new(Date::today())
    }

    /// The as-of date.
    #[must_use]
    pub fn as_of(&self) -> Date {
        self.as_of
    }

    /// Evaluates `bond` at its quoted price.
    ///
    /// A bond maturing on or before the as-of date gets no adjustment.
    #[must_use]
    pub fn evaluate(&self, bond: &BondData) -> OidAssessment {
        let years = self.as_of.years_until(&bond.maturity);
        let threshold = PAR - DEMINIMIS_POINTS_PER_YEAR * years;
        let price = bond.price;

        if years <= 0.0 {
            log::warn!(
                "{}: maturity {} is not after as-of date {}; skipping discount adjustment",
                bond.cusip,
                bond.maturity,
                self.as_of
            );
            return OidAssessment::none(
                threshold,
                years,
                vec![format!(
                    "Matured or maturing on {}: no discount adjustment",
                    bond.maturity
                )],
            );
        }

        if price < threshold {
            let adjustment = annual_accretion(price, years) * ORDINARY_INCOME_RATE * 100.0;
            return OidAssessment {
                has_oid: true,
                deminimis: true,
                adjustment_bps: adjustment,
                threshold,
                years_to_maturity: years,
                explanation: vec![format!(
                    "Market discount: price {price:.3} below de minimis threshold {threshold:.3}, \
                     {adjustment:.1} bps taxed as ordinary income"
                )],
            };
        }

        if price < PAR {
            let adjustment = annual_accretion(price, years) * CAPITAL_GAINS_RATE * 100.0;
            return OidAssessment {
                has_oid: true,
                deminimis: false,
                adjustment_bps: adjustment,
                threshold,
                years_to_maturity: years,
                explanation: vec![format!(
                    "Market discount: price {price:.3} within de minimis threshold {threshold:.3}, \
                     {adjustment:.1} bps taxed as capital gain"
                )],
            };
        }

        let explanation = if price > PAR {
            vec![format!(
                "Premium bond: price {price:.3} above par, amortizable premium"
            )]
        } else {
            Vec::new()
        };
        OidAssessment::none(threshold, years, explanation)
    }
}

fn annual_accretion(price: f64, years: f64) -> f64 {
    (PAR - price) / years
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use yieldrank_core::types::BondType;

    fn as_of() -> Date {
        Date::from_ymd(2025, 1, 1).unwrap()
    }

    fn bond_at(price: f64, maturity: Date) -> BondData {
        BondData::new("64966QAA8", BondType::Municipal, 3.5, price, 3.0, maturity)
    }

    fn ten_years_out() -> Date {
        // 3653 days = 10.0013 years on a 365.25-day year
        as_of() + 3653
    }

    #[test]
    fn test_deep_discount_uses_ordinary_rate() {
        let evaluator = OidMarketDiscountEvaluator::new(as_of());
        let result = evaluator.evaluate(&bond_at(90.0, ten_years_out()));
        let years = 3653.0 / 365.25;

        assert!(result.has_oid);
        assert!(result.deminimis);
        assert_relative_eq!(result.years_to_maturity, years);
        assert_relative_eq!(result.threshold, 100.0 - 0.25 * years);
        assert_relative_eq!(result.adjustment_bps, 10.0 / years * 0.37 * 100.0);
        assert_eq!(result.adjustment(), Some(result.adjustment_bps));
    }

    #[test]
    fn test_shallow_discount_uses_capital_gains_rate() {
        let evaluator = OidMarketDiscountEvaluator::new(as_of());
        let result = evaluator.evaluate(&bond_at(98.0, ten_years_out()));
        let years = 3653.0 / 365.25;

        assert!(result.has_oid);
        assert!(!result.deminimis);
        assert_relative_eq!(result.adjustment_bps, 2.0 / years * 0.15 * 100.0);
    }

    #[test]
    fn test_price_at_threshold_takes_capital_gains_branch() {
        let evaluator = OidMarketDiscountEvaluator::new(as_of());
        let maturity = ten_years_out();
        let threshold = 100.0 - 0.25 * as_of().years_until(&maturity);
        let result = evaluator.evaluate(&bond_at(threshold, maturity));

        assert!(result.has_oid);
        assert!(!result.deminimis);
    }

    #[test]
    fn test_premium_is_informational() {
        let evaluator = OidMarketDiscountEvaluator::new(as_of());
        let result = evaluator.evaluate(&bond_at(104.25, ten_years_out()));

        assert!(!result.has_oid);
        assert_eq!(result.adjustment_bps, 0.0);
        assert_eq!(result.adjustment(), None);
        assert_eq!(result.explanation.len(), 1);
        assert!(result.explanation[0].contains("amortizable premium"));
    }

    #[test]
    fn test_par_emits_nothing() {
        let evaluator = OidMarketDiscountEvaluator::new(as_of());
        let result = evaluator.evaluate(&bond_at(100.0, ten_years_out()));
        assert!(!result.has_oid);
        assert!(result.explanation.is_empty());
    }

    #[test]
    fn test_matured_bond_is_disabled() {
        let evaluator = OidMarketDiscountEvaluator::new(as_of());
        for maturity in [as_of(), as_of() - 30] {
            let result = evaluator.evaluate(&bond_at(80.0, maturity));
            assert!(!result.has_oid);
            assert_eq!(result.adjustment_bps, 0.0);
            assert!(result.adjustment_bps.is_finite());
            assert_eq!(result.explanation.len(), 1);
        }
    }
}
