//! The zoo registry.
//!
//! [`Zoo`] owns every staff member, animal and enclosure. Enclosures and
//! staff only hold ids, so every operation that touches more than one
//! entity goes through the zoo, which keeps those ids pointing at live
//! entities.

mod schedule;
mod search;
mod snapshot;

pub use schedule::*;
pub use search::*;
pub use snapshot::*;

use crate::config::HusbandryRules;
use crate::error::{ZooError, ZooResult};
use crate::models::{
    Animal, AnimalId, Enclosure, EnclosureId, Entity, EntityId, HealthRecord, RecordDraft,
    RecordId, StaffId,
};
use crate::staff::{CareDecisions, Staff, TaskContext, TaskOutcome};
use crate::validation::validate_string;

/// A named zoo and everything in it.
#[derive(Debug, Clone)]
pub struct Zoo {
    name: String,
    rules: HusbandryRules,
    staff: Vec<Staff>,
    animals: Vec<Animal>,
    enclosures: Vec<Enclosure>,
}

impl Zoo {
    /// Create an empty zoo with default husbandry rules.
    pub fn new(name: &str) -> ZooResult<Self> {
        Self::with_rules(name, HusbandryRules::default())
    }

    /// Create an empty zoo whose new enclosures follow `rules`.
    pub fn with_rules(name: &str, rules: HusbandryRules) -> ZooResult<Self> {
        let name = validate_string(name, "zoo name")?.to_string();
        rules.validate()?;
        Ok(Self {
            name,
            rules,
            staff: Vec::new(),
            animals: Vec::new(),
            enclosures: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &HusbandryRules {
        &self.rules
    }

    /// Staff in insertion order.
    pub fn staff(&self) -> &[Staff] {
        &self.staff
    }

    /// Animals in insertion order.
    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    /// Enclosures in insertion order.
    pub fn enclosures(&self) -> &[Enclosure] {
        &self.enclosures
    }

    pub fn staff_member(&self, id: StaffId) -> Option<&Staff> {
        self.staff.iter().find(|s| s.id() == id)
    }

    pub fn animal(&self, id: AnimalId) -> Option<&Animal> {
        self.animals.iter().find(|a| a.id() == id)
    }

    pub fn enclosure(&self, id: EnclosureId) -> Option<&Enclosure> {
        self.enclosures.iter().find(|e| e.id() == id)
    }

    /// Resolve an id of any kind.
    pub fn entity(&self, id: EntityId) -> Option<&dyn Entity> {
        match id {
            EntityId::Animal(id) => self.animal(id).map(|a| a as &dyn Entity),
            EntityId::Enclosure(id) => self.enclosure(id).map(|e| e as &dyn Entity),
            EntityId::Staff(id) => self.staff_member(id).map(|s| s as &dyn Entity),
        }
    }

    // ========================================================================
    // Membership
    // ========================================================================

    /// Add a staff member. Returns `false` if one with the same id is
    /// already registered.
    ///
    /// Assignments to enclosures or animals outside this zoo are dropped.
    pub fn add_staff(&mut self, mut staff: Staff) -> bool {
        if self.staff_member(staff.id()).is_some() {
            return false;
        }

        let foreign_enclosures: Vec<EnclosureId> = staff
            .assigned_enclosures()
            .iter()
            .copied()
            .filter(|id| self.enclosure(*id).is_none())
            .collect();
        let foreign_animals: Vec<AnimalId> = staff
            .assigned_animals()
            .iter()
            .copied()
            .filter(|id| self.animal(*id).is_none())
            .collect();
        if !foreign_enclosures.is_empty() || !foreign_animals.is_empty() {
            tracing::warn!(
                zoo = %self.name,
                staff = staff.name(),
                enclosures = foreign_enclosures.len(),
                animals = foreign_animals.len(),
                "Dropping assignments outside this zoo"
            );
        }
        for id in foreign_enclosures {
            staff.forget_enclosure(id);
        }
        for id in foreign_animals {
            staff.forget_animal(id);
        }

        tracing::info!(
            zoo = %self.name,
            staff = staff.name(),
            role = %staff.role(),
            "Staff member added"
        );
        self.staff.push(staff);
        true
    }

    /// Add an animal. Returns `false` if it is already registered.
    pub fn add_animal(&mut self, animal: Animal) -> bool {
        if self.animal(animal.id()).is_some() {
            return false;
        }
        tracing::info!(
            zoo = %self.name,
            animal = animal.name(),
            species = animal.species(),
            "Animal added"
        );
        self.animals.push(animal);
        true
    }

    /// Add an enclosure. Returns `false` if it is already registered.
    ///
    /// Residents that are not animals of this zoo are turned out first.
    pub fn add_enclosure(&mut self, mut enclosure: Enclosure) -> bool {
        if self.enclosure(enclosure.id()).is_some() {
            return false;
        }

        let strays: Vec<AnimalId> = enclosure
            .residents()
            .iter()
            .copied()
            .filter(|id| self.animal(*id).is_none())
            .collect();
        for id in strays {
            tracing::warn!(zoo = %self.name, animal_id = %id, "Dropping resident outside this zoo");
            enclosure.remove_animal(id);
        }
        tracing::info!(
            zoo = %self.name,
            environment = %enclosure.environment(),
            size = enclosure.size(),
            "Enclosure added"
        );
        self.enclosures.push(enclosure);
        true
    }

    /// Build an enclosure under this zoo's rules and register it.
    pub fn create_enclosure(&mut self, size: i64, environment: &str) -> ZooResult<EnclosureId> {
        let enclosure = Enclosure::with_rules(size, environment, &self.rules)?;
        let id = enclosure.id();
        self.add_enclosure(enclosure);
        Ok(id)
    }

    /// Deactivate a staff member and remove them from the zoo.
    pub fn remove_staff(&mut self, id: StaffId) -> ZooResult<Staff> {
        let pos = self
            .staff
            .iter()
            .position(|s| s.id() == id)
            .ok_or_else(|| not_found("staff member", id))?;

        let mut staff = self.staff.remove(pos);
        staff.deactivate();
        tracing::info!(zoo = %self.name, staff = staff.name(), "Staff member removed");
        Ok(staff)
    }

    /// Remove an animal, taking it out of every enclosure and every
    /// veterinarian's care first.
    pub fn remove_animal(&mut self, id: AnimalId) -> ZooResult<Animal> {
        let pos = self
            .animals
            .iter()
            .position(|a| a.id() == id)
            .ok_or_else(|| not_found("animal", id))?;

        for enclosure in &mut self.enclosures {
            enclosure.remove_animal(id);
        }
        for staff in &mut self.staff {
            staff.forget_animal(id);
        }

        let animal = self.animals.remove(pos);
        tracing::info!(zoo = %self.name, animal = animal.name(), "Animal removed");
        Ok(animal)
    }

    /// Remove an empty enclosure, unassigning it from every zookeeper.
    pub fn remove_enclosure(&mut self, id: EnclosureId) -> ZooResult<Enclosure> {
        let pos = self
            .enclosures
            .iter()
            .position(|e| e.id() == id)
            .ok_or_else(|| not_found("enclosure", id))?;

        if !self.enclosures[pos].is_empty() {
            tracing::warn!(
                zoo = %self.name,
                enclosure_id = %id,
                residents = self.enclosures[pos].len(),
                "Refusing to remove occupied enclosure"
            );
            return Err(ZooError::State(format!(
                "enclosure {} still holds {} animal(s)",
                id,
                self.enclosures[pos].len()
            )));
        }

        for staff in &mut self.staff {
            staff.forget_enclosure(id);
        }

        let enclosure = self.enclosures.remove(pos);
        tracing::info!(
            zoo = %self.name,
            environment = %enclosure.environment(),
            "Enclosure removed"
        );
        Ok(enclosure)
    }

    // ========================================================================
    // Enclosure operations
    // ========================================================================

    /// Put an animal into an enclosure. Returns `false` if the enclosure
    /// rejects it (full, incompatible, or already a resident).
    pub fn house_animal(&mut self, enclosure: EnclosureId, animal: AnimalId) -> ZooResult<bool> {
        let animal = self
            .animals
            .iter()
            .find(|a| a.id() == animal)
            .ok_or_else(|| not_found("animal", animal))?;
        let enclosure = self
            .enclosures
            .iter_mut()
            .find(|e| e.id() == enclosure)
            .ok_or_else(|| not_found("enclosure", enclosure))?;
        Ok(enclosure.add_animal(animal))
    }

    /// Take an animal out of an enclosure. Returns `false` if it was not there.
    pub fn release_animal(&mut self, enclosure: EnclosureId, animal: AnimalId) -> ZooResult<bool> {
        if self.animal(animal).is_none() {
            return Err(not_found("animal", animal));
        }
        Ok(self.enclosure_mut(enclosure)?.remove_animal(animal))
    }

    pub fn clean_enclosure(&mut self, enclosure: EnclosureId) -> ZooResult<()> {
        self.enclosure_mut(enclosure)?.clean_enclosure();
        Ok(())
    }

    /// Lower an enclosure's cleanliness. Returns the animals that fell sick.
    pub fn decrease_cleanliness(&mut self, enclosure: EnclosureId) -> ZooResult<Vec<AnimalId>> {
        let enclosure = self
            .enclosures
            .iter_mut()
            .find(|e| e.id() == enclosure)
            .ok_or_else(|| not_found("enclosure", enclosure))?;
        Ok(enclosure.decrease_cleanliness(&mut self.animals))
    }

    /// Enclosures currently holding `animal`.
    pub fn enclosures_of(&self, animal: AnimalId) -> Vec<&Enclosure> {
        self.enclosures.iter().filter(|e| e.contains(animal)).collect()
    }

    // ========================================================================
    // Staff operations
    // ========================================================================

    /// Assign an enclosure or an animal to a staff member.
    ///
    /// Fails with `State` for an inactive member, `Type` when the target is
    /// not an enclosure or animal, and `Permission` when the target does not
    /// match the member's role.
    pub fn assign(&mut self, staff: StaffId, target: EntityId) -> ZooResult<()> {
        let member = self
            .staff
            .iter_mut()
            .find(|s| s.id() == staff)
            .ok_or_else(|| not_found("staff member", staff))?;

        match target {
            EntityId::Enclosure(id) => {
                let enclosure = self
                    .enclosures
                    .iter()
                    .find(|e| e.id() == id)
                    .ok_or_else(|| not_found("enclosure", id))?;
                member.assign_enclosure(enclosure)
            }
            EntityId::Animal(id) => {
                let animal = self
                    .animals
                    .iter()
                    .find(|a| a.id() == id)
                    .ok_or_else(|| not_found("animal", id))?;
                member.assign_animal(animal)
            }
            EntityId::Staff(_) => {
                if !member.is_active() {
                    return Err(ZooError::State(format!("{} is inactive", member.name())));
                }
                Err(ZooError::Type(format!(
                    "{} is a staff member, expected an enclosure or an animal",
                    target
                )))
            }
        }
    }

    /// Deactivate a staff member without removing them.
    pub fn deactivate_staff(&mut self, staff: StaffId) -> ZooResult<()> {
        self.staff_mut(staff)?.deactivate();
        Ok(())
    }

    /// Open a health record for an animal assigned to the veterinarian `vet`.
    pub fn generate_record(
        &mut self,
        vet: StaffId,
        animal: AnimalId,
        draft: RecordDraft,
    ) -> ZooResult<RecordId> {
        let animal = self
            .animals
            .iter()
            .find(|a| a.id() == animal)
            .ok_or_else(|| not_found("animal", animal))?;
        let member = self
            .staff
            .iter_mut()
            .find(|s| s.id() == vet)
            .ok_or_else(|| not_found("staff member", vet))?;
        let name = member.name().to_string();
        let vet = member
            .as_veterinarian_mut()
            .ok_or_else(|| ZooError::Permission(format!("{} is not a veterinarian", name)))?;
        vet.generate_record(animal, draft)
    }

    /// Have the veterinarian `vet` treat `animal`. Returns the number of
    /// records closed.
    pub fn heal_animal(&mut self, vet: StaffId, animal: AnimalId) -> ZooResult<usize> {
        let animal = self
            .animals
            .iter_mut()
            .find(|a| a.id() == animal)
            .ok_or_else(|| not_found("animal", animal))?;
        let member = self
            .staff
            .iter_mut()
            .find(|s| s.id() == vet)
            .ok_or_else(|| not_found("staff member", vet))?;
        let name = member.name().to_string();
        let vet = member
            .as_veterinarian_mut()
            .ok_or_else(|| ZooError::Permission(format!("{} is not a veterinarian", name)))?;
        vet.heal_animal(animal)
    }

    /// Have a staff member perform a named task of their role.
    pub fn perform_task(
        &mut self,
        staff: StaffId,
        task: &str,
        decisions: &mut dyn CareDecisions,
    ) -> ZooResult<TaskOutcome> {
        let member = self
            .staff
            .iter_mut()
            .find(|s| s.id() == staff)
            .ok_or_else(|| not_found("staff member", staff))?;
        let mut ctx = TaskContext {
            animals: &mut self.animals,
            enclosures: &mut self.enclosures,
            decisions,
        };
        member.perform_task(task, &mut ctx)
    }

    // ========================================================================
    // Health queries
    // ========================================================================

    /// Every record for `animal` across all veterinarians, in staff order
    /// and then in the order each veterinarian wrote them.
    pub fn health_records_for_animal(&self, animal: AnimalId) -> ZooResult<Vec<&HealthRecord>> {
        if self.animal(animal).is_none() {
            return Err(not_found("animal", animal));
        }
        Ok(self
            .staff
            .iter()
            .filter_map(Staff::as_veterinarian)
            .flat_map(|vet| vet.records(animal))
            .collect())
    }

    /// Animals with at least one active health record.
    pub fn animals_under_treatment(&self) -> Vec<&Animal> {
        self.animals
            .iter()
            .filter(|a| {
                self.health_records_for_animal(a.id())
                    .map(|records| records.iter().any(|r| r.is_active()))
                    .unwrap_or(false)
            })
            .collect()
    }

    fn staff_mut(&mut self, id: StaffId) -> ZooResult<&mut Staff> {
        self.staff
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or_else(|| not_found("staff member", id))
    }

    fn enclosure_mut(&mut self, id: EnclosureId) -> ZooResult<&mut Enclosure> {
        self.enclosures
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or_else(|| not_found("enclosure", id))
    }
}

fn not_found(what: &str, id: impl std::fmt::Display) -> ZooError {
    ZooError::NotFound(format!("{} {} is not part of this zoo", what, id))
}
