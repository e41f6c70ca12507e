//! Issuer and credit-support descriptors.

use serde::{Deserialize, Serialize};

use super::CreditRating;

/// Legal form of the issuing entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IssuerType {
    /// City, town, or village.
    Municipality,
    /// County government.
    County,
    /// State government.
    State,
    /// Conduit or public authority (revenue-backed).
    Authority,
    /// Independent school district.
    SchoolDistrict,
    /// Private corporation.
    Corporation,
    /// Federal agency or GSE.
    FederalAgency,
    /// US federal government.
    FederalGovernment,
    /// Anything else.
    #[default]
    Other,
}

impl IssuerType {
    /// Returns true for issuers whose debt is typically general obligation,
    /// backed by taxing power rather than a revenue stream.
    #[must_use]
    pub fn is_general_obligation(&self) -> bool {
        matches!(self, Self::Municipality | Self::County)
    }

    /// Returns a human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Municipality => "Municipality",
            Self::County => "County",
            Self::State => "State",
            Self::Authority => "Authority",
            Self::SchoolDistrict => "School district",
            Self::Corporation => "Corporation",
            Self::FederalAgency => "Federal agency",
            Self::FederalGovernment => "Federal government",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for IssuerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The entity behind a bond.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issuer {
    /// Display name (e.g. "Fairfax County").
    pub name: String,

    /// Legal form.
    #[serde(default)]
    pub issuer_type: IssuerType,

    /// Revenue sector for revenue-backed issuers (e.g. "water-sewer").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,

    /// Two-letter state code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl Issuer {
    /// Creates an issuer with no sector or state.
    #[must_use]
    pub fn new(name: impl Into<String>, issuer_type: IssuerType) -> Self {
        Self {
            name: name.into(),
            issuer_type,
            sector: None,
            state: None,
        }
    }

    /// Sets the sector.
    #[must_use]
    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    /// Sets the state.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }
}

/// Credit rating and enhancement for a bond.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditProfile {
    /// Composite rating of the bond as issued (enhanced if insured).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<CreditRating>,

    /// Covered by bond insurance.
    #[serde(default)]
    pub insured: bool,

    /// Stand-alone rating of the issuer beneath any enhancement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underlying_rating: Option<CreditRating>,
}

impl CreditProfile {
    /// Creates an uninsured credit profile with the given rating.
    #[must_use]
    pub fn rated(rating: CreditRating) -> Self {
        Self {
            rating: Some(rating),
            insured: false,
            underlying_rating: None,
        }
    }

    /// Marks the bond insured with the given underlying rating.
    #[must_use]
    pub fn with_insurance(mut self, underlying: Option<CreditRating>) -> Self {
        self.insured = true;
        self.underlying_rating = underlying;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_obligation() {
        assert!(IssuerType::Municipality.is_general_obligation());
        assert!(IssuerType::County.is_general_obligation());
        assert!(!IssuerType::Authority.is_general_obligation());
        assert!(!IssuerType::State.is_general_obligation());
    }

    #[test]
    fn test_issuer_builder() {
        let issuer = Issuer::new("Loudoun County Sanitation Authority", IssuerType::Authority)
            .with_sector("water-sewer")
            .with_state("VA");
        assert_eq!(issuer.sector.as_deref(), Some("water-sewer"));
        assert_eq!(issuer.state.as_deref(), Some("VA"));
    }

    #[test]
    fn test_credit_profile() {
        let credit = CreditProfile::rated(CreditRating::AA).with_insurance(Some(CreditRating::A));
        assert!(credit.insured);
        assert_eq!(credit.underlying_rating, Some(CreditRating::A));
        assert_eq!(CreditProfile::default().rating, None);
    }

    #[test]
    fn test_serde_defaults() {
        let issuer: Issuer = serde_json::from_str(r#"{"name":"Acme Corp"}"#).unwrap();
        assert_eq!(issuer.issuer_type, IssuerType::Other);
        let credit: CreditProfile = serde_json::from_str(r#"{"rating":"AAPlus"}"#).unwrap();
        assert_eq!(credit.rating, Some(CreditRating::AAPlus));
        assert!(!credit.insured);
    }
}
