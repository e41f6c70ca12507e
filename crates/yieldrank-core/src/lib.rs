//! # Yieldrank Core
//!
//! Value types shared by every Yieldrank crate.
//!
//! Everything here is an immutable value object: bonds, investor tax
//! profiles, issuers, credit profiles and market snapshots. The tax,
//! scoring and ranking crates consume these and never mutate them.
//!
//! ## Example
//!
//! ```rust
//! use yieldrank_core::prelude::*;
//!
//! let profile = TaxProfile::new("VA", FilingStatus::Single, 0.24, 0.0575).with_niit(true);
//! let bond = BondData::new(
//!     "912828YY0",
//!     BondType::Treasury,
//!     4.50,
//!     99.25,
//!     4.25,
//!     Date::from_ymd(2030, 2, 15).unwrap(),
//! );
//!
//! assert!(profile.validate().is_ok());
//! assert!(!bond.is_in_state(&profile));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

pub use error::{CoreError, CoreResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        BondData, BondType, CreditProfile, CreditRating, Date, FilingStatus, Issuer, IssuerType,
        MarketData, TaxProfile, DAYS_PER_YEAR,
    };
}
