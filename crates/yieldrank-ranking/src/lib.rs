//! # Yieldrank Ranking
//!
//! Ranks bonds for an individual investor by after-tax value.
//!
//! ## Pipeline
//!
//! 1. [`score_candidates`]: after-tax yield, stability and liquidity per bond
//!    (in parallel for large batches with the `parallel` feature)
//! 2. [`RankingEngine::rank_screened`]: rating/price screening, duration
//!    ceiling, tie-break ordering and 1-based ranks
//! 3. [`ExplanationBuilder`]: a summary and bullets for any ranked bond
//!
//! ## Example
//!
//! ```rust
//! use yieldrank_core::types::{BondData, BondType, Date, FilingStatus, Issuer, IssuerType, TaxProfile};
//! use yieldrank_ranking::prelude::*;
//! use yieldrank_scoring::ScoreTables;
//!
//! let maturity = Date::from_ymd(2033, 6, 1).unwrap();
//! let profile = TaxProfile::new("VA", FilingStatus::Single, 0.32, 0.0575);
//! let inputs = vec![
//!     CandidateInput::new(
//!         BondData::new("A", BondType::Corporate, 5.0, 100.0, 5.0, maturity),
//!         Issuer::new("Acme Corp", IssuerType::Corporation),
//!     ),
//!     CandidateInput::new(
//!         BondData::new("B", BondType::Municipal, 3.5, 100.0, 4.0, maturity)
//!             .with_state("VA")
//!             .with_tax_exemptions(true, true),
//!         Issuer::new("Arlington County", IssuerType::County),
//!     ),
//! ];
//!
//! let config = RankingConfig::sequential().with_as_of(Date::from_ymd(2025, 1, 2).unwrap());
//! let scored = score_candidates(&inputs, &profile, &config, ScoreTables::standard());
//! let ranked = RankingEngine::new().rank(scored, None);
//!
//! assert_eq!(ranked[0].bond.cusip, "B");
//! assert_eq!(ranked[0].rank, Some(1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::uninlined_format_args)]

pub mod candidate;
pub mod comparator;
pub mod config;
pub mod engine;
pub mod explain;
pub mod parallel;
pub mod screening;

pub use candidate::{score_candidates, CandidateInput, CandidateScorer, RankedBond};
pub use config::RankingConfig;
pub use engine::RankingEngine;
pub use explain::{Explanation, ExplanationBuilder, LiquidityTier, StabilityTier};
pub use screening::ScreeningCriteria;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::candidate::{score_candidates, CandidateInput, RankedBond};
    pub use crate::config::RankingConfig;
    pub use crate::engine::RankingEngine;
    pub use crate::explain::{Explanation, ExplanationBuilder};
    pub use crate::screening::ScreeningCriteria;
}
