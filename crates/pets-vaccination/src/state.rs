//! Immutable snapshot of where every animal currently is.
//!
//! A state records three groups:
//! - the waiting room, where animals queue for surgery
//! - the recovery room, where vaccinated animals rest
//! - the vaccinated tally, bumped by the whole batch on every surgery
//!
//! Only the two physical rooms are subject to the safety rule.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{AnimalCount, ProblemConfig};
use crate::error::ConfigError;

const ROOM_SEPARATOR: &str = " | ";

/// Canonical identity of a state used for memoization.
///
/// Two states are the same for search purposes iff all six counts match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey([u32; 6]);

impl StateKey {
    pub fn counts(&self) -> [u32; 6] {
        self.0
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a}-{b}-{c}-{d}-{e}-{g}")
    }
}

/// Distribution of both kinds across the waiting room, the recovery room
/// and the vaccinated tally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VaccinationState {
    pub waiting: AnimalCount,
    pub recovery: AnimalCount,
    pub vaccinated: AnimalCount,
}

impl VaccinationState {
    pub const fn new(waiting: AnimalCount, recovery: AnimalCount, vaccinated: AnimalCount) -> Self {
        Self {
            waiting,
            recovery,
            vaccinated,
        }
    }

    /// Starting state: everybody waiting, nobody vaccinated.
    pub fn initial(config: &ProblemConfig) -> Self {
        Self::new(config.initial(), AnimalCount::default(), AnimalCount::default())
    }

    /// Build a state and check that the rooms physically hold the configured
    /// population of each kind.
    pub fn try_new(
        config: &ProblemConfig,
        waiting: AnimalCount,
        recovery: AnimalCount,
        vaccinated: AnimalCount,
    ) -> Result<Self, ConfigError> {
        let expected = config.initial();
        let present_chihuahuas = u64::from(waiting.chihuahuas) + u64::from(recovery.chihuahuas);
        if present_chihuahuas != u64::from(expected.chihuahuas) {
            return Err(ConfigError::PopulationMismatch {
                kind: "chihuahuas",
                expected: expected.chihuahuas,
                actual: present_chihuahuas,
            });
        }
        let present_cats = u64::from(waiting.cats) + u64::from(recovery.cats);
        if present_cats != u64::from(expected.cats) {
            return Err(ConfigError::PopulationMismatch {
                kind: "cats",
                expected: expected.cats,
                actual: present_cats,
            });
        }

        Ok(Self::new(waiting, recovery, vaccinated))
    }

    /// True when no chihuahua gang outnumbers the cats in the waiting or
    /// recovery room.
    pub fn is_valid(&self) -> bool {
        self.waiting.is_safe() && self.recovery.is_safe()
    }

    /// True once the vaccinated tally matches the configured population.
    pub fn is_goal(&self, config: &ProblemConfig) -> bool {
        self.vaccinated == config.initial()
    }

    pub fn key(&self) -> StateKey {
        StateKey([
            self.waiting.chihuahuas,
            self.waiting.cats,
            self.recovery.chihuahuas,
            self.recovery.cats,
            self.vaccinated.chihuahuas,
            self.vaccinated.cats,
        ])
    }
}

impl fmt::Display for VaccinationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Waiting: {}{sep}Recovery: {}{sep}Vaccinated: {}",
            self.waiting,
            self.recovery,
            self.vaccinated,
            sep = ROOM_SEPARATOR
        )
    }
}
