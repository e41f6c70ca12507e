//! Tax treatment by bond type.
//!
//! Resolves which of the investor's marginal rates apply to a bond's
//! interest. The rules, per bond type:
//!
//! | Bond type    | Federal            | State / local                          | AMT                      | NIIT              |
//! |--------------|--------------------|----------------------------------------|--------------------------|-------------------|
//! | Treasury     | federal rate       | exempt                                 | -                        | 3.8% if applies   |
//! | Municipal    | unless fed-exempt  | unless in-state and state-exempt       | 28% if AMT bond and AMT  | -                 |
//! | Corporate    | federal rate       | state + local                          | -                        | 3.8% if applies   |
//! | Agency       | federal rate       | state + local                          | -                        | 3.8% if applies   |
//! | TaxableMuni  | federal rate       | state + local                          | -                        | -                 |

use serde::{Deserialize, Serialize};
use yieldrank_core::types::{BondData, BondType, TaxProfile};

/// Net investment income tax rate.
pub const NIIT_RATE: f64 = 0.038;

/// Alternative minimum tax rate applied to private-activity interest.
pub const AMT_RATE: f64 = 0.28;

/// Ceiling on the effective tax rate so after-tax yield never reaches zero.
pub const MAX_EFFECTIVE_RATE: f64 = 0.999;

/// Marginal rates that apply to one bond's interest for one investor.
///
/// Each component is a fraction. `amt` is the AMT rate itself, not the
/// excess over the federal rate; [`TaxBreakdown::effective_rate`] adds
/// only the excess.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Federal income tax rate applied.
    pub federal: f64,
    /// State income tax rate applied.
    pub state: f64,
    /// Local income tax rate applied.
    pub local: f64,
    /// AMT rate applied (zero when AMT does not bind).
    pub amt: f64,
    /// Net investment income tax rate applied.
    pub niit: f64,
}

impl TaxBreakdown {
    /// Combined rate `federal + state + local + max(amt - federal, 0) + niit`,
    /// clamped to `[0, MAX_EFFECTIVE_RATE]`.
    ///
    /// NaN components resolve to zero.
    #[must_use]
    pub fn effective_rate(&self) -> f64 {
        let amt_excess = (self.amt - self.federal).max(0.0);
        let total = self.federal + self.state + self.local + amt_excess + self.niit;
        total.max(0.0).min(MAX_EFFECTIVE_RATE)
    }
}

/// A resolved breakdown with the rules that produced it, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxTreatment {
    /// Rates that apply.
    pub breakdown: TaxBreakdown,
    /// One line per applied rule.
    pub explanation: Vec<String>,
}

/// Maps a bond and an investor profile to the applicable tax rates.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaxTreatmentResolver;

impl TaxTreatmentResolver {
    /// Creates a resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Resolves the tax treatment of `bond` for `profile`.
    ///
    /// Total over every [`BondType`]; never fails.
    #[must_use]
    pub fn resolve(&self, bond: &BondData, profile: &TaxProfile) -> TaxTreatment {
        let mut breakdown = TaxBreakdown::default();
        let mut explanation = Vec::new();

        match bond.bond_type {
            BondType::Treasury => {
                breakdown.federal = profile.federal_rate;
                explanation.push("Treasury: Federal taxable, state/local exempt".to_string());
                apply_niit(profile, &mut breakdown, &mut explanation);
            }
            BondType::Municipal => {
                resolve_municipal(bond, profile, &mut breakdown, &mut explanation);
            }
            BondType::Corporate => {
                apply_fully_taxable(profile, &mut breakdown);
                explanation.push("Corporate: Fully taxable (federal, state, local)".to_string());
                apply_niit(profile, &mut breakdown, &mut explanation);
            }
            BondType::Agency => {
                apply_fully_taxable(profile, &mut breakdown);
                explanation.push("Agency: Fully taxable (federal, state, local)".to_string());
                apply_niit(profile, &mut breakdown, &mut explanation);
            }
            BondType::TaxableMuni => {
                apply_fully_taxable(profile, &mut breakdown);
                explanation.push("Taxable municipal: Federal and state taxable".to_string());
            }
        }

        TaxTreatment {
            breakdown,
            explanation,
        }
    }
}

fn resolve_municipal(
    bond: &BondData,
    profile: &TaxProfile,
    breakdown: &mut TaxBreakdown,
    explanation: &mut Vec<String>,
) {
    if bond.federal_tax_exempt {
        explanation.push("Municipal: Federal tax-exempt".to_string());
    } else {
        breakdown.federal = profile.federal_rate;
        explanation.push("Municipal: Federal taxable (no federal exemption)".to_string());
    }

    let in_state = bond.is_in_state(profile);
    if in_state && bond.state_tax_exempt {
        explanation.push(format!(
            "Municipal: In-state ({}), state tax exempt",
            profile.state
        ));
    } else {
        breakdown.state = profile.state_rate;
        breakdown.local = profile.local_rate_or_zero();
        if in_state {
            explanation.push(format!(
                "Municipal: In-state ({}) but not state tax exempt",
                profile.state
            ));
        } else {
            explanation.push(format!(
                "Municipal: Out-of-state, subject to {} state tax",
                profile.state
            ));
        }
        if breakdown.local > 0.0 {
            explanation.push(format!(
                "Local tax: {:.2}% applies",
                breakdown.local * 100.0
            ));
        }
    }

    if bond.amt && profile.amt_applies {
        breakdown.amt = AMT_RATE;
        explanation.push("Municipal: Subject to AMT (28%)".to_string());
    }
}

fn apply_fully_taxable(profile: &TaxProfile, breakdown: &mut TaxBreakdown) {
    breakdown.federal = profile.federal_rate;
    breakdown.state = profile.state_rate;
    breakdown.local = profile.local_rate_or_zero();
}

fn apply_niit(profile: &TaxProfile, breakdown: &mut TaxBreakdown, explanation: &mut Vec<String>) {
    if profile.niit_applies {
        breakdown.niit = NIIT_RATE;
        explanation.push("NIIT: 3.8% net investment income tax applies".to_string());
    }
}
