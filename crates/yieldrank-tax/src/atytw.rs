//! After-tax yield-to-worst.

use serde::{Deserialize, Serialize};
use yieldrank_core::types::{BondData, Date, TaxProfile};

use crate::discount::OidMarketDiscountEvaluator;
use crate::treatment::{TaxBreakdown, TaxTreatmentResolver, MAX_EFFECTIVE_RATE};

/// After-tax yield-to-worst for one bond and one investor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtytwResult {
    /// After-tax yield to worst, percent.
    pub atytw: f64,
    /// Quoted yield to worst, percent.
    pub pre_tax_ytw: f64,
    /// Combined marginal rate applied, fraction in `[0, 0.999]`.
    pub effective_tax_rate: f64,
    /// Per-jurisdiction rates.
    pub tax_breakdown: TaxBreakdown,
    /// Discount drag in basis points, present only when a discount branch applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oid_adjustment: Option<f64>,
    /// Computation trail, in the order each step ran.
    pub explanation: Vec<String>,
}

impl AtytwResult {
    /// Fully taxable yield an investor at `taxable_rate` would need to
    /// match this after-tax yield.
    ///
    /// Returns the after-tax yield unchanged when `taxable_rate >= 1`.
    #[must_use]
    pub fn tax_equivalent_yield(&self, taxable_rate: f64) -> f64 {
        let denominator = 1.0 - taxable_rate;
        if denominator <= 0.0 {
            return self.atytw;
        }
        self.atytw / denominator
    }

    /// After-tax give-up versus the quoted yield, in basis points.
    #[must_use]
    pub fn tax_drag_bps(&self) -> f64 {
        (self.pre_tax_ytw - self.atytw) * 100.0
    }
}

/// Composes tax treatment and discount adjustment into an [`AtytwResult`].
///
/// ```text
/// atytw = ytw * (1 - effective_tax_rate) - oid_adjustment_bps / 10000
/// ```
///
/// # Example
///
/// ```rust
/// use yieldrank_core::types::{BondData, BondType, Date, FilingStatus, TaxProfile};
/// use yieldrank_tax::AtytwCalculator;
///
/// let as_of = Date::from_ymd(2025, 1, 2).unwrap();
/// let profile = TaxProfile::new("VA", FilingStatus::Single, 0.24, 0.0575);
/// let muni = BondData::new("927793AA1", BondType::Municipal, 3.0, 100.0, 3.0,
///     Date::from_ymd(2032, 6, 1).unwrap())
///     .with_state("VA")
///     .with_tax_exemptions(true, true);
///
/// let result = AtytwCalculator::new(as_of).compute(&muni, &profile);
/// assert_eq!(result.atytw, 3.0);
/// assert_eq!(result.effective_tax_rate, 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AtytwCalculator {
    resolver: TaxTreatmentResolver,
    discount: OidMarketDiscountEvaluator,
}

impl AtytwCalculator {
    /// Creates a calculator that measures time to maturity from `as_of`.
    #[must_use]
    pub fn new(as_of: Date) -> Self {
        Self {
            resolver: TaxTreatmentResolver::new(),
            discount: OidMarketDiscountEvaluator::new(as_of),
        }
    }

    /// Creates a calculator as of today.
    #[must_use]
    pub fn today() -> Self {
        Self::new(Date::today())
    }

    /// The as-of date used for discount accretion.
    #[must_use]
    pub fn as_of(&self) -> Date {
        self.discount.as_of()
    }

    /// Computes the after-tax yield-to-worst of `bond` for `profile`.
    #[must_use]
    pub fn compute(&self, bond: &BondData, profile: &TaxProfile) -> AtytwResult {
        let treatment = self.resolver.resolve(bond, profile);
        let effective_tax_rate = treatment.breakdown.effective_rate();
        debug_assert!((0.0..=MAX_EFFECTIVE_RATE).contains(&effective_tax_rate));

        let assessment = self.discount.evaluate(bond);
        let oid_adjustment = assessment.adjustment();

        let mut explanation = treatment.explanation;
        explanation.extend(assessment.explanation);

        let atytw =
            bond.ytw * (1.0 - effective_tax_rate) - oid_adjustment.unwrap_or(0.0) / 10_000.0;

        explanation.push(format!(
            "Effective tax rate: {:.2}%",
            effective_tax_rate * 100.0
        ));
        explanation.push(format!("After-tax YTW: {atytw:.3}%"));

        log::trace!(
            "{}: ytw {:.3} -> atytw {:.3} (eff {:.4})",
            bond.cusip,
            bond.ytw,
            atytw,
            effective_tax_rate
        );

        AtytwResult {
            atytw,
            pre_tax_ytw: bond.ytw,
            effective_tax_rate,
            tax_breakdown: treatment.breakdown,
            oid_adjustment,
            explanation,
        }
    }
}
