//! Bond type and filing status classifications.
//!
//! Both are closed sets: every tax rule in Yieldrank matches them
//! exhaustively, so adding a variant is a compile error until each
//! resolver decides how to treat it.

use serde::{Deserialize, Serialize};

/// Tax-relevant classification of a bond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BondType {
    /// US Treasury bill, note, or bond. Federal taxable, state/local exempt.
    Treasury,
    /// Tax-exempt municipal bond.
    Municipal,
    /// Corporate bond. Fully taxable.
    Corporate,
    /// Government agency or GSE debenture.
    Agency,
    /// Municipal issuer, federally taxable (e.g. Build America Bonds).
    TaxableMuni,
}

impl BondType {
    /// Returns all bond types in a standard order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::Treasury,
            Self::Municipal,
            Self::Corporate,
            Self::Agency,
            Self::TaxableMuni,
        ]
    }

    /// Returns a human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Treasury => "Treasury",
            Self::Municipal => "Municipal",
            Self::Corporate => "Corporate",
            Self::Agency => "Agency",
            Self::TaxableMuni => "Taxable municipal",
        }
    }

    /// Returns true if the issuer is a state or local government.
    #[must_use]
    pub fn is_municipal_issuer(&self) -> bool {
        matches!(self, Self::Municipal | Self::TaxableMuni)
    }
}

impl std::fmt::Display for BondType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Federal income tax filing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FilingStatus {
    /// Single filer.
    #[default]
    Single,
    /// Married filing jointly.
    MarriedJoint,
    /// Married filing separately.
    MarriedSeparate,
    /// Head of household.
    HeadOfHousehold,
}

impl FilingStatus {
    /// Returns a human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::MarriedJoint => "Married filing jointly",
            Self::MarriedSeparate => "Married filing separately",
            Self::HeadOfHousehold => "Head of household",
        }
    }
}

impl std::fmt::Display for FilingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bond_type_all() {
        let all = BondType::all();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0], BondType::Treasury);
        assert_eq!(all[4], BondType::TaxableMuni);
    }

    #[test]
    fn test_municipal_issuer() {
        assert!(BondType::Municipal.is_municipal_issuer());
        assert!(BondType::TaxableMuni.is_municipal_issuer());
        assert!(!BondType::Agency.is_municipal_issuer());
    }

    #[test]
    fn test_display() {
        assert_eq!(BondType::TaxableMuni.to_string(), "Taxable municipal");
        assert_eq!(FilingStatus::MarriedJoint.to_string(), "Married filing jointly");
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&BondType::TaxableMuni).unwrap();
        assert_eq!(json, "\"TaxableMuni\"");
        let parsed: FilingStatus = serde_json::from_str("\"HeadOfHousehold\"").unwrap();
        assert_eq!(parsed, FilingStatus::HeadOfHousehold);
    }
}
