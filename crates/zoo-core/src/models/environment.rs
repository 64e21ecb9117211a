//! Habitat environments shared by animals and enclosures.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ZooError;

/// Habitat type an animal needs and an enclosure provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Aquatic,
    Savannah,
    Jungle,
    Arctic,
    Desert,
    Forest,
    Mountain,
    Grassland,
}

impl Environment {
    /// Every supported environment, in canonical order.
    pub const ALL: [Environment; 8] = [
        Environment::Aquatic,
        Environment::Savannah,
        Environment::Jungle,
        Environment::Arctic,
        Environment::Desert,
        Environment::Forest,
        Environment::Mountain,
        Environment::Grassland,
    ];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Aquatic => "aquatic",
            Environment::Savannah => "savannah",
            Environment::Jungle => "jungle",
            Environment::Arctic => "arctic",
            Environment::Desert => "desert",
            Environment::Forest => "forest",
            Environment::Mountain => "mountain",
            Environment::Grassland => "grassland",
        }
    }

    /// Comma-separated list of valid names, for error messages.
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(|e| e.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ZooError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|e| e.as_str() == lower)
            .ok_or_else(|| {
                ZooError::Validation(format!(
                    "environment '{}' must be one of [{}]",
                    s.trim(),
                    Self::choices()
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        assert_eq!("  Savannah ".parse::<Environment>().unwrap(), Environment::Savannah);
        assert_eq!("ARCTIC".parse::<Environment>().unwrap(), Environment::Arctic);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "swamp".parse::<Environment>().unwrap_err();
        assert!(err.to_string().contains("aquatic"));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Environment::Grassland).unwrap();
        assert_eq!(json, "\"grassland\"");
    }
}
