//! Investor tax profile.

use serde::{Deserialize, Serialize};

use super::FilingStatus;
use crate::error::{CoreError, CoreResult};

/// An investor's marginal tax situation.
///
/// Rates are fractions (0.24 = 24%), never percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxProfile {
    /// Two-letter state of residence (e.g. "VA").
    pub state: String,

    /// Federal filing status.
    #[serde(default)]
    pub filing_status: FilingStatus,

    /// Marginal federal income tax rate.
    pub federal_rate: f64,

    /// Marginal state income tax rate.
    pub state_rate: f64,

    /// Marginal local (city/county) income tax rate, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_rate: Option<f64>,

    /// Whether the investor is subject to the alternative minimum tax.
    #[serde(default)]
    pub amt_applies: bool,

    /// Whether the net investment income tax applies.
    #[serde(default)]
    pub niit_applies: bool,
}

impl TaxProfile {
    /// Creates a profile with no local tax, AMT, or NIIT exposure.
    #[must_use]
    pub fn new(
        state: impl Into<String>,
        filing_status: FilingStatus,
        federal_rate: f64,
        state_rate: f64,
    ) -> Self {
        Self {
            state: state.into(),
            filing_status,
            federal_rate,
            state_rate,
            local_rate: None,
            amt_applies: false,
            niit_applies: false,
        }
    }

    /// Sets the local tax rate.
    #[must_use]
    pub fn with_local_rate(mut self, rate: f64) -> Self {
        self.local_rate = Some(rate);
        self
    }

    /// Sets AMT exposure.
    #[must_use]
    pub fn with_amt(mut self, applies: bool) -> Self {
        self.amt_applies = applies;
        self
    }

    /// Sets NIIT exposure.
    #[must_use]
    pub fn with_niit(mut self, applies: bool) -> Self {
        self.niit_applies = applies;
        self
    }

    /// Local rate, zero when absent.
    #[must_use]
    pub fn local_rate_or_zero(&self) -> f64 {
        self.local_rate.unwrap_or(0.0)
    }

    /// Checks every rate is a finite fraction in `[0, 1]` and the state is set.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRate` or `CoreError::InvalidField`.
    pub fn validate(&self) -> CoreResult<()> {
        if self.state.trim().is_empty() {
            return Err(CoreError::invalid_field("state", "must not be empty"));
        }
        check_rate("federal_rate", self.federal_rate)?;
        check_rate("state_rate", self.state_rate)?;
        if let Some(local) = self.local_rate {
            check_rate("local_rate", local)?;
        }
        Ok(())
    }
}

fn check_rate(field: &str, value: f64) -> CoreResult<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::invalid_rate(field, value))
    }
}
