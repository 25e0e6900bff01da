use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// A star score between 1 and 5 inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Stars(u8);

impl Stars {
    pub const MIN: Stars = Stars(1);
    pub const MAX: Stars = Stars(5);

    pub fn new(value: u8) -> DomainResult<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::RatingOutOfRange(i64::from(value)))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Stars {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<u8> for Stars {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Stars> for u8 {
    fn from(stars: Stars) -> Self {
        stars.0
    }
}

/// Rating a user gave a coffee.
///
/// Older records used any integer above 5 to mean "no rating yet" and the
/// detail screen showed those as zero stars. Here that is an explicit state:
/// every raw value outside 1..=5 collapses to `Unrated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "stars", rename_all = "snake_case")]
pub enum Rating {
    #[default]
    Unrated,
    Rated(Stars),
}

impl Rating {
    /// Interpret a legacy integer rating
    pub fn from_raw(raw: i64) -> Self {
        u8::try_from(raw)
            .ok()
            .and_then(|v| Stars::new(v).ok())
            .map_or(Rating::Unrated, Rating::Rated)
    }

    /// Number of filled stars, 0 when unrated
    pub fn stars(&self) -> u8 {
        match self {
            Rating::Unrated => 0,
            Rating::Rated(stars) => stars.value(),
        }
    }

    pub fn is_rated(&self) -> bool {
        matches!(self, Rating::Rated(_))
    }

    /// Nullable column value
    pub fn to_column(&self) -> Option<i64> {
        match self {
            Rating::Unrated => None,
            Rating::Rated(stars) => Some(i64::from(stars.value())),
        }
    }

    pub fn from_column(value: Option<i64>) -> Self {
        value.map_or(Rating::Unrated, Rating::from_raw)
    }
}

impl From<Stars> for Rating {
    fn from(stars: Stars) -> Self {
        Rating::Rated(stars)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rating::Unrated => write!(f, "Not rated"),
            Rating::Rated(stars) => write!(f, "{}/5", stars.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_bounds() {
        assert!(Stars::new(0).is_err());
        assert!(Stars::new(1).is_ok());
        assert!(Stars::new(5).is_ok());
        assert!(Stars::new(6).is_err());
    }

    #[test]
    fn test_sentinel_above_five_is_unrated() {
        let rating = Rating::from_raw(6);
        assert_eq!(rating, Rating::Unrated);
        assert_eq!(rating.stars(), 0);
        assert_eq!(rating.to_string(), "Not rated");
        assert_ne!(rating.to_string(), "6/5");
    }

    #[test]
    fn test_zero_and_negative_are_unrated() {
        assert_eq!(Rating::from_raw(0), Rating::Unrated);
        assert_eq!(Rating::from_raw(-3), Rating::Unrated);
        assert_eq!(Rating::from_raw(i64::MAX), Rating::Unrated);
    }

    #[test]
    fn test_rated_display() {
        let rating = Rating::from_raw(4);
        assert!(rating.is_rated());
        assert_eq!(rating.stars(), 4);
        assert_eq!(rating.to_string(), "4/5");
    }

    #[test]
    fn test_column_mapping() {
        assert_eq!(Rating::Unrated.to_column(), None);
        assert_eq!(Rating::from_column(None), Rating::Unrated);
        assert_eq!(Rating::from_column(Some(3)).to_column(), Some(3));
    }

    #[test]
    fn test_stars_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<Stars>("7").is_err());
        assert_eq!(serde_json::from_str::<Stars>("2").unwrap().value(), 2);
    }
}
