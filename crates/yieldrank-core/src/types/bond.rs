//! Bond terms relevant to after-tax yield.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{BondType, Date, TaxProfile};
use crate::error::{CoreError, CoreResult};

/// Static and quoted terms of a single bond.
///
/// `ytw` and `coupon` are in percent units (4.75 means 4.75%); `price` is
/// per 100 of par.
///
/// # Example
///
/// ```rust
/// use yieldrank_core::types::{BondData, BondType, Date};
///
/// let bond = BondData::new(
///     "93974DZZ0",
///     BondType::Municipal,
///     3.10,
///     100.0,
///     4.0,
///     Date::from_ymd(2034, 6, 1).unwrap(),
/// )
/// .with_state("WA")
/// .with_tax_exemptions(true, true);
///
/// assert!(bond.federal_tax_exempt);
/// assert_eq!(bond.state.as_deref(), Some("WA"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondData {
    /// CUSIP identifier.
    pub cusip: String,

    /// Tax classification.
    pub bond_type: BondType,

    /// Issuing state, for municipal in-state treatment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Yield to worst, percent.
    pub ytw: f64,

    /// Clean price per 100 par.
    pub price: f64,

    /// Annual coupon, percent.
    pub coupon: f64,

    /// Final maturity date.
    pub maturity: Date,

    /// Interest exempt from federal income tax.
    #[serde(default)]
    pub federal_tax_exempt: bool,

    /// Interest exempt from state income tax for in-state holders.
    #[serde(default)]
    pub state_tax_exempt: bool,

    /// Private-activity bond subject to AMT.
    #[serde(default)]
    pub amt: bool,

    /// Callable before maturity.
    #[serde(default)]
    pub callable: bool,

    /// Call schedule as supplied by the data provider. Not interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_schedule: Option<serde_json::Value>,

    /// Minimum tradable denomination in dollars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_denomination: Option<Decimal>,
}

impl BondData {
    /// Creates a fully taxable, non-callable bond with no state of issue.
    #[must_use]
    pub fn new(
        cusip: impl Into<String>,
        bond_type: BondType,
        ytw: f64,
        price: f64,
        coupon: f64,
        maturity: Date,
    ) -> Self {
        Self {
            cusip: cusip.into(),
            bond_type,
            state: None,
            ytw,
            price,
            coupon,
            maturity,
            federal_tax_exempt: false,
            state_tax_exempt: false,
            amt: false,
            callable: false,
            call_schedule: None,
            min_denomination: None,
        }
    }

    /// Sets the issuing state.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Sets the federal and state exemption flags.
    #[must_use]
    pub fn with_tax_exemptions(mut self, federal: bool, state: bool) -> Self {
        self.federal_tax_exempt = federal;
        self.state_tax_exempt = state;
        self
    }

    /// Marks the bond as a private-activity (AMT) bond.
    #[must_use]
    pub fn with_amt(mut self, amt: bool) -> Self {
        self.amt = amt;
        self
    }

    /// Sets the call schedule and marks the bond callable.
    #[must_use]
    pub fn with_call_schedule(mut self, schedule: serde_json::Value) -> Self {
        self.callable = true;
        self.call_schedule = Some(schedule);
        self
    }

    /// Sets the minimum denomination.
    #[must_use]
    pub fn with_min_denomination(mut self, amount: Decimal) -> Self {
        self.min_denomination = Some(amount);
        self
    }

    /// Returns true if the bond was issued in the investor's state of residence.
    ///
    /// A bond with no recorded state is never in-state.
    #[must_use]
    pub fn is_in_state(&self, profile: &TaxProfile) -> bool {
        self.state
            .as_deref()
            .is_some_and(|s| s.trim().eq_ignore_ascii_case(profile.state.trim()))
    }

    /// Checks quoted values are finite and the price is positive.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidField` naming the first bad field.
    pub fn validate(&self) -> CoreResult<()> {
        if self.cusip.trim().is_empty() {
            return Err(CoreError::invalid_field("cusip", "must not be empty"));
        }
        if !self.ytw.is_finite() {
            return Err(CoreError::invalid_field("ytw", "must be finite"));
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(CoreError::invalid_field(
                "price",
                format!("must be positive, got {}", self.price),
            ));
        }
        if !self.coupon.is_finite() || self.coupon < 0.0 {
            return Err(CoreError::invalid_field(
                "coupon",
                format!("cannot be negative, got {}", self.coupon),
            ));
        }
        Ok(())
    }
}
