//! Credit rating types.
//!
//! - [`CreditRating`]: agency-agnostic notch scale (AAA to D, plus NR)

use serde::{Deserialize, Serialize};

/// Normalized credit rating (agency-agnostic).
///
/// Maps to S&P-style notation but parses Moody's notation too. Ordering
/// runs from highest quality (AAA) to lowest (D), with `NotRated` last.
///
/// # Examples
///
/// ```
/// use yieldrank_core::types::CreditRating;
///
/// let rating = CreditRating::parse("Aa1").unwrap(); // Moody's notation
/// assert_eq!(rating, CreditRating::AAPlus);
/// assert!(rating.is_investment_grade());
/// assert!(rating.meets_floor(CreditRating::A));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum CreditRating {
    /// Highest quality
    AAA = 1,
    /// AA+
    AAPlus = 2,
    /// AA
    AA = 3,
    /// AA-
    AAMinus = 4,
    /// A+
    APlus = 5,
    /// A
    A = 6,
    /// A-
    AMinus = 7,
    /// BBB+
    BBBPlus = 8,
    /// BBB
    BBB = 9,
    /// BBB- (lowest investment grade)
    BBBMinus = 10,
    /// BB+
    BBPlus = 11,
    /// BB
    BB = 12,
    /// BB-
    BBMinus = 13,
    /// B+
    BPlus = 14,
    /// B
    B = 15,
    /// B-
    BMinus = 16,
    /// CCC+
    CCCPlus = 17,
    /// CCC
    CCC = 18,
    /// CCC-
    CCCMinus = 19,
    /// CC
    CC = 20,
    /// C
    C = 21,
    /// Default
    D = 22,
    /// Not rated
    #[default]
    NotRated = 99,
}

impl CreditRating {
    /// Returns the numeric notch (1 = AAA, 22 = D, 99 = NR).
    #[must_use]
    pub fn notch(&self) -> u8 {
        *self as u8
    }

    /// Returns true if this is investment grade (BBB- or better).
    #[must_use]
    pub fn is_investment_grade(&self) -> bool {
        *self <= CreditRating::BBBMinus
    }

    /// Returns true if this rating is at least as strong as `floor`.
    ///
    /// An unrated bond never meets a floor.
    #[must_use]
    pub fn meets_floor(&self, floor: CreditRating) -> bool {
        *self != CreditRating::NotRated && *self <= floor
    }

    /// Returns the S&P-style notation.
    #[must_use]
    pub fn sp_notation(&self) -> &'static str {
        match self {
            Self::AAA => "AAA",
            Self::AAPlus => "AA+",
            Self::AA => "AA",
            Self::AAMinus => "AA-",
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BBBPlus => "BBB+",
            Self::BBB => "BBB",
            Self::BBBMinus => "BBB-",
            Self::BBPlus => "BB+",
            Self::BB => "BB",
            Self::BBMinus => "BB-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CCCPlus => "CCC+",
            Self::CCC => "CCC",
            Self::CCCMinus => "CCC-",
            Self::CC => "CC",
            Self::C => "C",
            Self::D => "D",
            Self::NotRated => "NR",
        }
    }

    /// Parses a rating from S&P or Moody's notation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();

        // Moody's notation is case-sensitive ("A1" vs "a1" is never used)
        match s {
            "Aaa" => return Some(Self::AAA),
            "Aa1" => return Some(Self::AAPlus),
            "Aa2" => return Some(Self::AA),
            "Aa3" => return Some(Self::AAMinus),
            "A1" => return Some(Self::APlus),
            "A2" => return Some(Self::A),
            "A3" => return Some(Self::AMinus),
            "Baa1" => return Some(Self::BBBPlus),
            "Baa2" => return Some(Self::BBB),
            "Baa3" => return Some(Self::BBBMinus),
            "Ba1" => return Some(Self::BBPlus),
            "Ba2" => return Some(Self::BB),
            "Ba3" => return Some(Self::BBMinus),
            "B1" => return Some(Self::BPlus),
            "B2" => return Some(Self::B),
            "B3" => return Some(Self::BMinus),
            "Caa1" => return Some(Self::CCCPlus),
            "Caa2" => return Some(Self::CCC),
            "Caa3" => return Some(Self::CCCMinus),
            "Ca" => return Some(Self::CC),
            _ => {}
        }

        match s.to_uppercase().as_str() {
            "AAA" => Some(Self::AAA),
            "AA+" => Some(Self::AAPlus),
            "AA" => Some(Self::AA),
            "AA-" => Some(Self::AAMinus),
            "A+" => Some(Self::APlus),
            "A" => Some(Self::A),
            "A-" => Some(Self::AMinus),
            "BBB+" => Some(Self::BBBPlus),
            "BBB" => Some(Self::BBB),
            "BBB-" => Some(Self::BBBMinus),
            "BB+" => Some(Self::BBPlus),
            "BB" => Some(Self::BB),
            "BB-" => Some(Self::BBMinus),
            "B+" => Some(Self::BPlus),
            "B" => Some(Self::B),
            "B-" => Some(Self::BMinus),
            "CCC+" => Some(Self::CCCPlus),
            "CCC" => Some(Self::CCC),
            "CCC-" => Some(Self::CCCMinus),
            "CC" => Some(Self::CC),
            "C" => Some(Self::C),
            "D" => Some(Self::D),
            "NR" | "NOT RATED" | "NOTRATED" => Some(Self::NotRated),
            _ => None,
        }
    }
}

impl std::fmt::Display for CreditRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sp_notation())
    }
}

impl std::str::FromStr for CreditRating {
    type Err = crate::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
            .ok_or_else(|| crate::CoreError::invalid_field("rating", format!("unknown rating '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_rating_basics() {
        assert!(CreditRating::AAA.is_investment_grade());
        assert!(CreditRating::BBBMinus.is_investment_grade());
        assert!(!CreditRating::BBPlus.is_investment_grade());
        assert!(!CreditRating::NotRated.is_investment_grade());
    }

    #[test]
    fn test_credit_rating_ordering() {
        assert!(CreditRating::AAA < CreditRating::AA);
        assert!(CreditRating::BBBMinus < CreditRating::BBPlus);
        assert_eq!(CreditRating::D.notch(), 22);
    }

    #[test]
    fn test_meets_floor() {
        assert!(CreditRating::AA.meets_floor(CreditRating::A));
        assert!(CreditRating::A.meets_floor(CreditRating::A));
        assert!(!CreditRating::AMinus.meets_floor(CreditRating::A));
        assert!(!CreditRating::NotRated.meets_floor(CreditRating::D));
    }

    #[test]
    fn test_credit_rating_parse() {
        assert_eq!(CreditRating::parse("AAA"), Some(CreditRating::AAA));
        assert_eq!(CreditRating::parse("aa-"), Some(CreditRating::AAMinus));
        assert_eq!(CreditRating::parse("Aa1"), Some(CreditRating::AAPlus));
        assert_eq!(CreditRating::parse("Baa2"), Some(CreditRating::BBB));
        assert_eq!(CreditRating::parse(" BBB- "), Some(CreditRating::BBBMinus));
        assert_eq!(CreditRating::parse("XXX"), None);
        assert!("XXX".parse::<CreditRating>().is_err());
    }

    #[test]
    fn test_sp_notation_round_trips_through_parse() {
        for rating in [
            CreditRating::AAA,
            CreditRating::AAPlus,
            CreditRating::AMinus,
            CreditRating::BBBMinus,
            CreditRating::CCC,
            CreditRating::NotRated,
        ] {
            assert_eq!(CreditRating::parse(rating.sp_notation()), Some(rating));
        }
    }
}
