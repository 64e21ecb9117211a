//! Animal models.

use serde::{Deserialize, Serialize};

use super::environment::Environment;
use super::ids::{AnimalId, Entity, EntityId};
use crate::error::ZooResult;
use crate::validation::{validate_age, validate_environment, validate_string};

/// Biological class of an animal, with its class-specific trait.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "class", rename_all = "lowercase")]
pub enum AnimalClass {
    Mammal { nocturnal: bool },
    Bird { can_fly: bool },
    Reptile { venomous: bool },
}

impl AnimalClass {
    /// Class name for display.
    pub fn name(&self) -> &'static str {
        match self {
            AnimalClass::Mammal { .. } => "mammal",
            AnimalClass::Bird { .. } => "bird",
            AnimalClass::Reptile { .. } => "reptile",
        }
    }
}

/// Unvalidated animal fields as supplied by a caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimalDraft {
    /// Animal name
    pub name: String,
    /// Species (e.g., "Lion")
    pub species: String,
    /// Age in years
    pub age: i64,
    /// Diet description (e.g., "Meat")
    pub diet: String,
    /// Habitat name (e.g., "savannah")
    pub environment: String,
    /// Whether the animal arrives healthy
    pub is_healthy: bool,
    /// Biological class
    pub class: AnimalClass,
}

/// An animal living in the zoo.
///
/// All fields are validated at construction; only the health flag
/// changes afterwards.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Animal {
    id: AnimalId,
    name: String,
    species: String,
    age: u8,
    diet: String,
    environment: Environment,
    is_healthy: bool,
    class: AnimalClass,
}

impl Animal {
    /// Validate a draft and build the animal.
    pub fn from_draft(draft: AnimalDraft) -> ZooResult<Self> {
        let name = validate_string(&draft.name, "name")?.to_string();
        let species = validate_string(&draft.species, "species")?.to_string();
        let age = validate_age(draft.age)?;
        let diet = validate_string(&draft.diet, "diet")?.to_string();
        let environment = validate_environment(&draft.environment, "environment")?;

        Ok(Self {
            id: AnimalId::new(),
            name,
            species,
            age,
            diet,
            environment,
            is_healthy: draft.is_healthy,
            class: draft.class,
        })
    }

    /// Create a mammal (not nocturnal).
    pub fn mammal(
        name: &str,
        species: &str,
        age: i64,
        diet: &str,
        environment: &str,
        is_healthy: bool,
    ) -> ZooResult<Self> {
        Self::build(
            name,
            species,
            age,
            diet,
            environment,
            is_healthy,
            AnimalClass::Mammal { nocturnal: false },
        )
    }

    /// Create a bird that can fly.
    pub fn bird(
        name: &str,
        species: &str,
        age: i64,
        diet: &str,
        environment: &str,
        is_healthy: bool,
    ) -> ZooResult<Self> {
        Self::build(
            name,
            species,
            age,
            diet,
            environment,
            is_healthy,
            AnimalClass::Bird { can_fly: true },
        )
    }

    /// Create a venomous reptile.
    pub fn reptile(
        name: &str,
        species: &str,
        age: i64,
        diet: &str,
        environment: &str,
        is_healthy: bool,
    ) -> ZooResult<Self> {
        Self::build(
            name,
            species,
            age,
            diet,
            environment,
            is_healthy,
            AnimalClass::Reptile { venomous: true },
        )
    }

    fn build(
        name: &str,
        species: &str,
        age: i64,
        diet: &str,
        environment: &str,
        is_healthy: bool,
        class: AnimalClass,
    ) -> ZooResult<Self> {
        Self::from_draft(AnimalDraft {
            name: name.into(),
            species: species.into(),
            age,
            diet: diet.into(),
            environment: environment.into(),
            is_healthy,
            class,
        })
    }

    pub fn id(&self) -> AnimalId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn diet(&self) -> &str {
        &self.diet
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn is_healthy(&self) -> bool {
        self.is_healthy
    }

    pub fn class(&self) -> AnimalClass {
        self.class
    }

    /// Check species equality, ignoring case.
    pub fn is_species(&self, species: &str) -> bool {
        self.species.to_lowercase() == species.trim().to_lowercase()
    }

    /// Mark the animal healthy again.
    pub fn heal(&mut self) {
        self.is_healthy = true;
    }

    /// Update the health flag.
    pub fn set_healthy(&mut self, healthy: bool) {
        self.is_healthy = healthy;
    }

    /// The sound this animal makes.
    pub fn make_sound(&self) -> String {
        match self.class {
            AnimalClass::Mammal { .. } => format!("{} makes a mammal-like sound.", self.name),
            AnimalClass::Bird { .. } => format!("{} chirps or sings.", self.name),
            AnimalClass::Reptile { .. } => format!("{} hisses.", self.name),
        }
    }

    pub fn eat(&self) -> String {
        format!("{} is eating {}.", self.name, self.diet)
    }

    pub fn sleep(&self) -> String {
        format!("{} curls up and sleeps.", self.name)
    }
}

impl Entity for Animal {
    fn entity_id(&self) -> EntityId {
        EntityId::Animal(self.id)
    }

    fn describe(&self) -> String {
        let trait_line = match self.class {
            AnimalClass::Mammal { nocturnal } => format!("Nocturnal: {}", nocturnal),
            AnimalClass::Bird { can_fly } => format!("Can fly: {}", can_fly),
            AnimalClass::Reptile { venomous } => format!("Venomous: {}", venomous),
        };
        format!(
            "{} ({} {}), age {}, eats {}, lives in {}, healthy: {}\n{}",
            self.name,
            self.species,
            self.class.name(),
            self.age,
            self.diet,
            self.environment,
            self.is_healthy,
            trait_line
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_new_mammal_trims_fields() {
        let lion = Animal::mammal(" Simba ", " Lion", 5, "Meat ", " Savannah ", true).unwrap();
        assert_eq!(lion.name(), "Simba");
        assert_eq!(lion.species(), "Lion");
        assert_eq!(lion.age(), 5);
        assert_eq!(lion.diet(), "Meat");
        assert_eq!(lion.environment(), Environment::Savannah);
        assert!(lion.is_healthy());
        assert_eq!(lion.class(), AnimalClass::Mammal { nocturnal: false });
    }

    #[test]
    fn test_invalid_fields_rejected() {
        let cases = [
            ("", "Lion", 5, "Meat", "savannah"),
            ("Simba", "  ", 5, "Meat", "savannah"),
            ("Simba", "Lion", -1, "Meat", "savannah"),
            ("Simba", "Lion", 251, "Meat", "savannah"),
            ("Simba", "Lion", 5, "", "savannah"),
            ("Simba", "Lion", 5, "Meat", "moon"),
        ];
        for (name, species, age, diet, env) in cases {
            let err = Animal::mammal(name, species, age, diet, env, true).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation, "case {:?}", (name, species, age));
        }
    }

    #[test]
    fn test_heal_and_sicken() {
        let mut croc = Animal::reptile("Croc", "Crocodile", 6, "Meat", "jungle", false).unwrap();
        assert!(!croc.is_healthy());
        croc.heal();
        assert!(croc.is_healthy());
        croc.set_healthy(false);
        assert!(!croc.is_healthy());
    }

    #[test]
    fn test_sounds_by_class() {
        let parrot = Animal::bird("Polly", "Parrot", 2, "Seeds", "jungle", true).unwrap();
        assert_eq!(parrot.make_sound(), "Polly chirps or sings.");
        let snake = Animal::reptile("Kaa", "Python", 3, "Mice", "jungle", true).unwrap();
        assert_eq!(snake.make_sound(), "Kaa hisses.");
        assert_eq!(snake.eat(), "Kaa is eating Mice.");
    }

    #[test]
    fn test_species_match_ignores_case() {
        let lion = Animal::mammal("Simba", "Lion", 5, "Meat", "savannah", true).unwrap();
        assert!(lion.is_species("lion"));
        assert!(lion.is_species(" LION "));
        assert!(!lion.is_species("tiger"));
    }

    #[test]
    fn test_describe_mentions_class_trait() {
        let parrot = Animal::bird("Polly", "Parrot", 2, "Seeds", "jungle", true).unwrap();
        let text = parrot.describe();
        assert!(text.contains("Polly (Parrot bird)"));
        assert!(text.contains("Can fly: true"));
        assert_eq!(parrot.entity_id(), EntityId::Animal(parrot.id()));
    }
}
