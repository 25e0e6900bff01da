use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::DomainError;

/// Preparation technique a coffee is bought for, or a shot was pulled with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrewMethod {
    #[default]
    Espresso,
    ColdBrew,
    PourOver,
    FrenchPress,
    Aeropress,
    Chemex,
}

impl BrewMethod {
    /// Every method, in picker order
    pub const ALL: [BrewMethod; 6] = [
        BrewMethod::Espresso,
        BrewMethod::ColdBrew,
        BrewMethod::PourOver,
        BrewMethod::FrenchPress,
        BrewMethod::Aeropress,
        BrewMethod::Chemex,
    ];

    /// Human-readable label shown in pickers and detail screens
    pub fn display_name(&self) -> &'static str {
        match self {
            BrewMethod::Espresso => "Espresso",
            BrewMethod::ColdBrew => "Cold Brew",
            BrewMethod::PourOver => "Pour Over",
            BrewMethod::FrenchPress => "French Press",
            BrewMethod::Aeropress => "Aeropress",
            BrewMethod::Chemex => "Chemex",
        }
    }

    /// Stable key written to the database
    pub fn storage_key(&self) -> &'static str {
        match self {
            BrewMethod::Espresso => "espresso",
            BrewMethod::ColdBrew => "cold_brew",
            BrewMethod::PourOver => "pour_over",
            BrewMethod::FrenchPress => "french_press",
            BrewMethod::Aeropress => "aeropress",
            BrewMethod::Chemex => "chemex",
        }
    }
}

impl FromStr for BrewMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BrewMethod::ALL
            .into_iter()
            .find(|m| m.storage_key() == s)
            .ok_or_else(|| DomainError::UnknownBrewMethod(s.to_string()))
    }
}

impl std::fmt::Display for BrewMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_parses_back() {
        for method in BrewMethod::ALL {
            assert_eq!(method.storage_key().parse::<BrewMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!("Cold Brew".parse::<BrewMethod>().is_err());
    }

    #[test]
    fn test_default_is_espresso() {
        assert_eq!(BrewMethod::default(), BrewMethod::Espresso);
        assert_eq!(BrewMethod::ColdBrew.to_string(), "Cold Brew");
    }
}
