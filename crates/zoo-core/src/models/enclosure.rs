//! Enclosure compatibility and occupancy.
//!
//! An enclosure holds handles to animals owned elsewhere (normally by the
//! [`Zoo`](crate::registry::Zoo)). It enforces three invariants on its
//! resident list:
//!
//! - resident count never exceeds capacity
//! - every resident lives in the enclosure's environment
//! - every resident shares the species of the first one admitted (the
//!   species lock), until the enclosure empties again
//!
//! Cleanliness counts down with each feeding and is reset by cleaning.
//! Once it drops to the sickness threshold the residents fall ill.

use serde::Serialize;

use super::animal::Animal;
use super::environment::Environment;
use super::ids::{AnimalId, EnclosureId, Entity, EntityId};
use crate::config::HusbandryRules;
use crate::error::ZooResult;
use crate::validation::{validate_environment, validate_size};

/// A bounded habitat for animals of one species.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Enclosure {
    id: EnclosureId,
    size: u32,
    environment: Environment,
    capacity: usize,
    clean_level: i32,
    max_clean_level: i32,
    sickness_threshold: i32,
    reapply_sickness: bool,
    residents: Vec<AnimalId>,
    species_lock: Option<String>,
}

impl Enclosure {
    /// Create an enclosure with the default husbandry rules.
    pub fn new(size: i64, environment: &str) -> ZooResult<Self> {
        Self::with_rules(size, environment, &HusbandryRules::default())
    }

    /// Create an enclosure governed by `rules`.
    pub fn with_rules(size: i64, environment: &str, rules: &HusbandryRules) -> ZooResult<Self> {
        let size = validate_size(size)?;
        let environment = validate_environment(environment, "environment")?;

        Ok(Self {
            id: EnclosureId::new(),
            size,
            environment,
            capacity: rules.capacity_for(size),
            clean_level: rules.max_clean_level,
            max_clean_level: rules.max_clean_level,
            sickness_threshold: rules.sickness_threshold,
            reapply_sickness: rules.reapply_sickness,
            residents: Vec::new(),
            species_lock: None,
        })
    }

    pub fn id(&self) -> EnclosureId {
        self.id
    }

    /// Size in square metres.
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Maximum number of residents.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clean_level(&self) -> i32 {
        self.clean_level
    }

    /// Species every resident must share, if any resident is present.
    pub fn species_lock(&self) -> Option<&str> {
        self.species_lock.as_deref()
    }

    /// Residents in admission order.
    pub fn residents(&self) -> &[AnimalId] {
        &self.residents
    }

    pub fn len(&self) -> usize {
        self.residents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residents.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.residents.len() >= self.capacity
    }

    pub fn contains(&self, animal: AnimalId) -> bool {
        self.residents.contains(&animal)
    }

    /// Check whether `animal` could live here: same environment, and same
    /// species as the current residents (case-insensitive).
    pub fn is_compatible(&self, animal: &Animal) -> bool {
        let same_environment = animal.environment() == self.environment;
        let same_species = self
            .species_lock
            .as_deref()
            .map_or(true, |species| animal.is_species(species));
        same_environment && same_species
    }

    /// Admit `animal`.
    ///
    /// Returns `false` without changing anything if the enclosure is full,
    /// the animal is incompatible, or it is already a resident.
    pub fn add_animal(&mut self, animal: &Animal) -> bool {
        if self.contains(animal.id()) {
            tracing::debug!(animal = animal.name(), "Animal already in enclosure");
            return false;
        }

        if self.is_full() {
            tracing::warn!(
                enclosure = %self.environment,
                capacity = self.capacity,
                animal = animal.name(),
                "Enclosure already full"
            );
            return false;
        }

        if !self.is_compatible(animal) {
            tracing::warn!(
                enclosure = %self.environment,
                species = animal.species(),
                animal_environment = %animal.environment(),
                "Enclosure not compatible (species or environment mismatch)"
            );
            return false;
        }

        if self.species_lock.is_none() {
            self.species_lock = Some(animal.species().to_string());
        }

        self.residents.push(animal.id());
        tracing::info!(
            enclosure = %self.environment,
            animal_id = %animal.id(),
            animal = animal.name(),
            "Added animal to enclosure"
        );
        true
    }

    /// Remove a resident. Returns `false` if it was not here.
    ///
    /// Emptying the enclosure clears the species lock.
    pub fn remove_animal(&mut self, animal: AnimalId) -> bool {
        let Some(pos) = self.residents.iter().position(|id| *id == animal) else {
            return false;
        };

        self.residents.remove(pos);
        if self.residents.is_empty() {
            self.species_lock = None;
        }
        tracing::info!(
            enclosure = %self.environment,
            animal_id = %animal,
            "Removed animal from enclosure"
        );
        true
    }

    /// Restore full cleanliness.
    pub fn clean_enclosure(&mut self) {
        self.clean_level = self.max_clean_level;
        tracing::info!(enclosure = %self.environment, "Enclosure cleaned");
    }

    /// Lower cleanliness by one step.
    ///
    /// When the level ends at or below the sickness threshold every resident
    /// found in `animals` is marked unhealthy. Returns the ids marked sick.
    pub fn decrease_cleanliness(&mut self, animals: &mut [Animal]) -> Vec<AnimalId> {
        let was_dirty = self.clean_level <= self.sickness_threshold;
        self.clean_level -= 1;
        tracing::debug!(
            enclosure = %self.environment,
            clean_level = self.clean_level,
            "Enclosure getting dirty"
        );

        if self.clean_level > self.sickness_threshold || (was_dirty && !self.reapply_sickness) {
            return Vec::new();
        }

        let mut sickened = Vec::new();
        for animal in animals.iter_mut().filter(|a| self.residents.contains(&a.id())) {
            animal.set_healthy(false);
            sickened.push(animal.id());
            tracing::warn!(
                animal = animal.name(),
                enclosure = %self.environment,
                "Animal has become sick due to dirty enclosure"
            );
        }
        sickened
    }

    /// Names of the residents, looked up in `animals`.
    pub fn animal_names(&self, animals: &[Animal]) -> Vec<String> {
        self.residents
            .iter()
            .filter_map(|id| animals.iter().find(|a| a.id() == *id))
            .map(|a| a.name().to_string())
            .collect()
    }

    /// Short status report: cleanliness, residents, count and capacity.
    pub fn report_status(&self, animals: &[Animal]) -> String {
        format!(
            "Clean level: {}\nAnimals: {:?}\nNumber of animals: {}\nCapacity: {}",
            self.clean_level,
            self.animal_names(animals),
            self.residents.len(),
            self.capacity
        )
    }
}

impl Entity for Enclosure {
    fn entity_id(&self) -> EntityId {
        EntityId::Enclosure(self.id)
    }

    fn describe(&self) -> String {
        format!(
            "{} enclosure, {} sqm, {}/{} residents, species: {}, clean level: {}",
            self.environment,
            self.size,
            self.residents.len(),
            self.capacity,
            self.species_lock.as_deref().unwrap_or("none"),
            self.clean_level
        )
    }
}
