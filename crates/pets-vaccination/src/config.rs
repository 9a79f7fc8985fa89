//! Problem configuration: population per kind and batch size.
//!
//! Configurations are validated when they are built, so a bad population
//! or batch size is rejected up front instead of surfacing mid-search.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default number of chihuahuas in the waiting room at the start
pub const DEFAULT_CHIHUAHUAS: u32 = 3;
/// Default number of cats in the waiting room at the start
pub const DEFAULT_CATS: u32 = 3;
/// Number of animals that go into surgery together
pub const SURGERY_CAPACITY: u32 = 2;
/// Animals of each batch that go back to the waiting room after surgery
pub const RETURNED_PER_BATCH: u32 = 1;

/// Number of animals of each kind held somewhere.
///
/// Chihuahuas are the aggressors, cats are the ones that need protecting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimalCount {
    pub chihuahuas: u32,
    pub cats: u32,
}

impl AnimalCount {
    pub const fn new(chihuahuas: u32, cats: u32) -> Self {
        Self { chihuahuas, cats }
    }

    pub fn total(self) -> u64 {
        u64::from(self.chihuahuas) + u64::from(self.cats)
    }

    /// Chihuahuas attack cats when they outnumber them. A room without
    /// cats is always safe.
    pub fn is_safe(self) -> bool {
        self.cats == 0 || self.chihuahuas <= self.cats
    }
}

impl fmt::Display for AnimalCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Chihuahua {}Cat", self.chihuahuas, self.cats)
    }
}

/// A validated problem configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProblemConfig", into = "RawProblemConfig")]
pub struct ProblemConfig {
    initial: AnimalCount,
    batch_size: u32,
}

impl Default for ProblemConfig {
    fn default() -> Self {
        Self {
            initial: AnimalCount::new(DEFAULT_CHIHUAHUAS, DEFAULT_CATS),
            batch_size: SURGERY_CAPACITY,
        }
    }
}

impl ProblemConfig {
    /// Build a configuration from unchecked input.
    pub fn new(chihuahuas: i64, cats: i64, batch_size: i64) -> Result<Self, ConfigError> {
        let chihuahuas = checked_count("chihuahuas", chihuahuas)?;
        let cats = checked_count("cats", cats)?;
        if batch_size != i64::from(SURGERY_CAPACITY) {
            return Err(ConfigError::UnsupportedBatchSize(batch_size));
        }

        Ok(Self {
            initial: AnimalCount::new(chihuahuas, cats),
            batch_size: SURGERY_CAPACITY,
        })
    }

    /// Configuration with the default batch size
    pub fn with_population(chihuahuas: u32, cats: u32) -> Self {
        Self {
            initial: AnimalCount::new(chihuahuas, cats),
            batch_size: SURGERY_CAPACITY,
        }
    }

    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Initial population of each kind, all of which must be vaccinated
    pub fn initial(&self) -> AnimalCount {
        self.initial
    }

    pub fn batch_size(&self) -> u32 {
        self.batch_size
    }
}

fn checked_count(field: &'static str, value: i64) -> Result<u32, ConfigError> {
    if value < 0 {
        return Err(ConfigError::NegativeCount { field, value });
    }
    u32::try_from(value).map_err(|_| ConfigError::CountTooLarge { field, value })
}

/// On-disk form of [`ProblemConfig`]. Counts are signed so negative input
/// is reported as a configuration error rather than a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawProblemConfig {
    pub chihuahuas: i64,
    pub cats: i64,
    pub batch_size: i64,
}

impl Default for RawProblemConfig {
    fn default() -> Self {
        ProblemConfig::default().into()
    }
}

impl TryFrom<RawProblemConfig> for ProblemConfig {
    type Error = ConfigError;

    fn try_from(raw: RawProblemConfig) -> Result<Self, Self::Error> {
        ProblemConfig::new(raw.chihuahuas, raw.cats, raw.batch_size)
    }
}

impl From<ProblemConfig> for RawProblemConfig {
    fn from(config: ProblemConfig) -> Self {
        Self {
            chihuahuas: i64::from(config.initial.chihuahuas),
            cats: i64::from(config.initial.cats),
            batch_size: i64::from(config.batch_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProblemConfig::default();
        assert_eq!(config.initial(), AnimalCount::new(3, 3));
        assert_eq!(config.batch_size(), 2);
    }

    #[test]
    fn test_negative_counts_rejected() {
        assert_eq!(
            ProblemConfig::new(-1, 3, 2),
            Err(ConfigError::NegativeCount {
                field: "chihuahuas",
                value: -1
            })
        );
        assert_eq!(
            ProblemConfig::new(3, -4, 2),
            Err(ConfigError::NegativeCount {
                field: "cats",
                value: -4
            })
        );
    }

    #[test]
    fn test_oversized_count_rejected() {
        let too_big = i64::from(u32::MAX) + 1;
        assert!(matches!(
            ProblemConfig::new(too_big, 0, 2),
            Err(ConfigError::CountTooLarge { field: "chihuahuas", .. })
        ));
    }

    #[test]
    fn test_batch_size_must_be_two() {
        assert_eq!(
            ProblemConfig::new(3, 3, 3),
            Err(ConfigError::UnsupportedBatchSize(3))
        );
        assert_eq!(
            ProblemConfig::new(3, 3, -2),
            Err(ConfigError::UnsupportedBatchSize(-2))
        );
        assert!(ProblemConfig::new(3, 3, 2).is_ok());
    }

    #[test]
    fn test_json_config() {
        let config = ProblemConfig::from_json(r#"{"chihuahuas": 5, "cats": 1, "batchSize": 2}"#)
            .unwrap();
        assert_eq!(config.initial(), AnimalCount::new(5, 1));

        // Missing keys fall back to the defaults
        let config = ProblemConfig::from_json(r#"{"cats": 4}"#).unwrap();
        assert_eq!(config.initial(), AnimalCount::new(3, 4));

        let err = ProblemConfig::from_json(r#"{"chihuahuas": -2}"#).unwrap_err();
        assert!(err.to_string().contains("must not be negative"));
    }

    #[test]
    fn test_room_safety() {
        assert!(AnimalCount::new(5, 0).is_safe());
        assert!(AnimalCount::new(2, 2).is_safe());
        assert!(AnimalCount::new(0, 3).is_safe());
        assert!(!AnimalCount::new(3, 2).is_safe());
    }
}
