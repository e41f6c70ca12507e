//! # Yieldrank Scoring
//!
//! Stability and liquidity scores for bond ranking.
//!
//! - [`StabilityScorer`]: issuer type, sector, state, rating and credit
//!   enhancement, blended from [`ScoreTables`]
//! - [`LiquidityScorer`]: trade recency, activity, spread, denomination and
//!   volume from the latest [`MarketData`](yieldrank_core::types::MarketData)
//!
//! Both return a [`FactorScore`] clamped to `[0, 1]` with the factors that
//! produced it. Scoring never fails; only loading custom tables can.
//!
//! ## Example
//!
//! ```rust
//! use yieldrank_core::types::{CreditProfile, CreditRating, Issuer, IssuerType};
//! use yieldrank_scoring::StabilityScorer;
//!
//! let issuer = Issuer::new("Cobb County", IssuerType::County).with_state("GA");
//! let credit = CreditProfile::rated(CreditRating::AAA);
//!
//! let stability = StabilityScorer::new().score(&issuer, &credit);
//! assert!(stability.score > 0.8);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::manual_clamp)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod liquidity;
pub mod score;
pub mod stability;
pub mod tables;

pub use error::{ScoringError, ScoringResult};
pub use liquidity::LiquidityScorer;
pub use score::{FactorScore, LiquidityScore, StabilityScore};
pub use stability::StabilityScorer;
pub use tables::ScoreTables;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ScoringError, ScoringResult};
    pub use crate::liquidity::LiquidityScorer;
    pub use crate::score::{FactorScore, LiquidityScore, StabilityScore};
    pub use crate::stability::StabilityScorer;
    pub use crate::tables::ScoreTables;
}
