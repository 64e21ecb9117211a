//! Husbandry rules: the tunable numbers behind enclosure behavior.
//!
//! Rules are plain data with sensible defaults. They can be loaded from a
//! JSON file and adjusted through `ZOO_*` environment variables.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ZooError, ZooResult};
use crate::validation::validate_bool;

/// Square metres each resident needs.
pub const DEFAULT_AREA_PER_ANIMAL: u32 = 100;

/// Cleanliness level of a freshly cleaned enclosure.
pub const DEFAULT_MAX_CLEAN_LEVEL: i32 = 5;

/// Residents fall sick when cleanliness is at or below this level.
pub const DEFAULT_SICKNESS_THRESHOLD: i32 = 2;

/// Tunable husbandry rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HusbandryRules {
    /// Square metres per resident; capacity = max(1, size / area_per_animal)
    pub area_per_animal: u32,
    /// Level an enclosure starts at and is cleaned back to
    pub max_clean_level: i32,
    /// Residents are marked sick when the level is at or below this
    pub sickness_threshold: i32,
    /// Mark residents sick on every decrease at or below the threshold,
    /// not only on the call that crosses it
    pub reapply_sickness: bool,
}

impl Default for HusbandryRules {
    fn default() -> Self {
        Self {
            area_per_animal: DEFAULT_AREA_PER_ANIMAL,
            max_clean_level: DEFAULT_MAX_CLEAN_LEVEL,
            sickness_threshold: DEFAULT_SICKNESS_THRESHOLD,
            reapply_sickness: true,
        }
    }
}

impl HusbandryRules {
    /// Parse rules from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ZooResult<Self> {
        let rules: HusbandryRules = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Load rules from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ZooResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            ZooError::Config(format!("failed to read rules file {}: {}", path.display(), e))
        })?;
        Self::from_json(&contents)
    }

    /// Apply `ZOO_*` environment overrides, then re-validate.
    ///
    /// Recognized: `ZOO_AREA_PER_ANIMAL`, `ZOO_MAX_CLEAN_LEVEL`,
    /// `ZOO_SICKNESS_THRESHOLD`, `ZOO_REAPPLY_SICKNESS`.
    pub fn apply_env_overrides(&mut self) -> ZooResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> ZooResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("ZOO_AREA_PER_ANIMAL") {
            self.area_per_animal = parse_number(&val, "ZOO_AREA_PER_ANIMAL")?;
        }
        if let Some(val) = lookup("ZOO_MAX_CLEAN_LEVEL") {
            self.max_clean_level = parse_number(&val, "ZOO_MAX_CLEAN_LEVEL")?;
        }
        if let Some(val) = lookup("ZOO_SICKNESS_THRESHOLD") {
            self.sickness_threshold = parse_number(&val, "ZOO_SICKNESS_THRESHOLD")?;
        }
        if let Some(val) = lookup("ZOO_REAPPLY_SICKNESS") {
            self.reapply_sickness = validate_bool(&val, "ZOO_REAPPLY_SICKNESS")?;
        }
        self.validate()
    }

    /// Check the rules are internally consistent.
    pub fn validate(&self) -> ZooResult<()> {
        if self.area_per_animal == 0 {
            return Err(ZooError::Config("area_per_animal must be positive".into()));
        }
        if self.max_clean_level <= 0 {
            return Err(ZooError::Config("max_clean_level must be positive".into()));
        }
        if self.sickness_threshold >= self.max_clean_level {
            return Err(ZooError::Config(format!(
                "sickness_threshold ({}) must be below max_clean_level ({})",
                self.sickness_threshold, self.max_clean_level
            )));
        }
        Ok(())
    }

    /// Number of residents an enclosure of `size` square metres can hold.
    pub fn capacity_for(&self, size: u32) -> usize {
        std::cmp::max(1, (size / self.area_per_animal) as usize)
    }
}

fn parse_number<T: std::str::FromStr>(value: &str, key: &str) -> ZooResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| ZooError::Config(format!("{} must be a number, got '{}'", key, value)))
}
