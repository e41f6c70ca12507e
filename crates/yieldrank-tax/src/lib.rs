//! # Yieldrank Tax
//!
//! After-tax yield-to-worst for an individual investor.
//!
//! - [`TaxTreatmentResolver`]: which marginal rates apply to a bond's interest
//! - [`OidMarketDiscountEvaluator`]: discount accretion drag and premium detection
//! - [`AtytwCalculator`]: combines both into an [`AtytwResult`] with an explanation trail
//! - [`AtytwCalculator::compare`]: side-by-side comparison of two bonds
//!
//! Every computation here is total: inputs outside the expected ranges are
//! clamped or skipped, never reported as errors.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::manual_clamp)]
#![allow(clippy::uninlined_format_args)]

pub mod atytw;
pub mod compare;
pub mod discount;
pub mod treatment;

pub use atytw::{AtytwCalculator, AtytwResult};
pub use compare::{BondComparison, Preference, EQUIVALENT_YIELD_TOLERANCE};
pub use discount::{OidAssessment, OidMarketDiscountEvaluator};
pub use treatment::{TaxBreakdown, TaxTreatment, TaxTreatmentResolver, MAX_EFFECTIVE_RATE};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::atytw::{AtytwCalculator, AtytwResult};
    pub use crate::compare::{BondComparison, Preference};
    pub use crate::discount::{OidAssessment, OidMarketDiscountEvaluator};
    pub use crate::treatment::{TaxBreakdown, TaxTreatmentResolver};
}
