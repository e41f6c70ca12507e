//! Domain types for after-tax bond analysis.
//!
//! - [`BondData`]: terms and quotes of a single bond
//! - [`BondType`] / [`FilingStatus`]: closed tax classifications
//! - [`TaxProfile`]: investor marginal rates and AMT/NIIT exposure
//! - [`Issuer`] / [`CreditProfile`]: who stands behind the bond
//! - [`MarketData`]: latest trading snapshot
//! - [`CreditRating`]: agency-agnostic rating scale
//! - [`Date`]: calendar date

mod bond;
mod bond_type;
mod date;
mod issuer;
mod market;
mod rating;
mod tax_profile;

pub use bond::BondData;
pub use bond_type::{BondType, FilingStatus};
pub use date::{Date, DAYS_PER_YEAR};
pub use issuer::{CreditProfile, Issuer, IssuerType};
pub use market::MarketData;
pub use rating::CreditRating;
pub use tax_profile::TaxProfile;
