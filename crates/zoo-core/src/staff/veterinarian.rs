//! Veterinarians: health checks, reports and treatment of assigned animals.

use std::collections::HashMap;
use std::str::FromStr;

use serde::Serialize;

use super::{AnimalReport, Role, StaffProfile, TaskContext, TaskOutcome};
use crate::error::{ZooError, ZooResult};
use crate::models::{Animal, AnimalId, HealthRecord, RecordDraft, RecordId};

/// Note appended to every record closed by a treatment.
pub const TREATMENT_CLOSING_NOTE: &str = "Animal treated and condition resolved.";

/// Tasks a veterinarian can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VeterinarianTask {
    /// Check every assigned animal; open records for sick ones on request
    HealthCheck,
    /// List the records of every assigned animal
    Report,
    /// Treat one sick assigned animal
    Heal,
}

impl FromStr for VeterinarianTask {
    type Err = ZooError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
        match normalized.as_str() {
            "" => Err(ZooError::Validation("task name must not be empty".into())),
            "health check" => Ok(VeterinarianTask::HealthCheck),
            "report" => Ok(VeterinarianTask::Report),
            "heal" => Ok(VeterinarianTask::Heal),
            other => Err(ZooError::Validation(format!(
                "unknown veterinarian task '{}' (expected health check, report or heal)",
                other
            ))),
        }
    }
}

/// A staff member responsible for animals and their health records.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Veterinarian {
    #[serde(flatten)]
    pub(super) profile: StaffProfile,
    animals: Vec<AnimalId>,
    records: HashMap<AnimalId, Vec<HealthRecord>>,
}

impl Veterinarian {
    pub(super) fn new(name: &str) -> ZooResult<Self> {
        Ok(Self {
            profile: StaffProfile::new(name, Role::Veterinarian)?,
            animals: Vec::new(),
            records: HashMap::new(),
        })
    }

    pub fn profile(&self) -> &StaffProfile {
        &self.profile
    }

    /// Assigned animals in assignment order.
    pub fn animals(&self) -> &[AnimalId] {
        &self.animals
    }

    pub(super) fn assign_animal(&mut self, animal: &Animal) {
        if self.animals.contains(&animal.id()) {
            return;
        }
        self.animals.push(animal.id());
        tracing::info!(
            staff = self.profile.name(),
            animal_id = %animal.id(),
            animal = animal.name(),
            "Animal assigned to veterinarian"
        );
    }

    /// Drop the animal from the assignment list along with its records.
    pub(super) fn forget_animal(&mut self, animal: AnimalId) {
        self.animals.retain(|id| *id != animal);
        self.records.remove(&animal);
    }

    pub(super) fn clear_assignments(&mut self) {
        self.animals.clear();
    }

    /// Records authored for `animal`, oldest first.
    pub fn records(&self, animal: AnimalId) -> &[HealthRecord] {
        self.records.get(&animal).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Mutable record list for `animal`, created empty on first access.
    pub fn records_mut(&mut self, animal: AnimalId) -> &mut Vec<HealthRecord> {
        self.records.entry(animal).or_default()
    }

    /// Open an active record for an assigned animal.
    pub fn generate_record(&mut self, animal: &Animal, draft: RecordDraft) -> ZooResult<RecordId> {
        self.profile.ensure_active("generate record")?;
        if !self.animals.contains(&animal.id()) {
            return Err(ZooError::NotFound(format!(
                "{} is not assigned to {}",
                animal.name(),
                self.profile.name()
            )));
        }

        let record = HealthRecord::new(animal, draft, true)?;
        let id = record.id();
        tracing::info!(
            staff = self.profile.name(),
            animal = animal.name(),
            issue = %record.issue(),
            severity = %record.severity(),
            "Health record created"
        );
        self.records_mut(animal.id()).push(record);
        Ok(id)
    }

    /// Treat an assigned `animal`: heal it if sick and close every active
    /// record with a closing note. Returns the number of records closed.
    pub fn heal_animal(&mut self, animal: &mut Animal) -> ZooResult<usize> {
        self.profile.ensure_active("heal animal")?;
        if !self.animals.contains(&animal.id()) {
            return Err(ZooError::NotFound(format!(
                "{} is not assigned to {}",
                animal.name(),
                self.profile.name()
            )));
        }

        if !animal.is_healthy() {
            animal.heal();
        }

        let mut closed = 0;
        if let Some(records) = self.records.get_mut(&animal.id()) {
            for record in records.iter_mut().filter(|r| r.is_active()) {
                record.add_notes(TREATMENT_CLOSING_NOTE)?;
                record.close()?;
                closed += 1;
            }
        }

        tracing::info!(
            staff = self.profile.name(),
            animal = animal.name(),
            records_closed = closed,
            "Animal healed"
        );
        Ok(closed)
    }

    /// Records of one assigned animal, or of every assigned animal.
    pub fn record_report(&self, animal: Option<AnimalId>) -> ZooResult<Vec<AnimalReport>> {
        let ids = match animal {
            Some(id) if !self.animals.contains(&id) => {
                return Err(ZooError::NotFound(format!(
                    "animal {} is not assigned to {}",
                    id,
                    self.profile.name()
                )));
            }
            Some(id) => vec![id],
            None => self.animals.clone(),
        };

        Ok(ids
            .into_iter()
            .map(|id| AnimalReport {
                animal_id: id,
                records: self.records(id).to_vec(),
            })
            .collect())
    }

    /// Perform `task` using the animals of the context.
    pub fn perform_task(
        &mut self,
        task: VeterinarianTask,
        ctx: &mut TaskContext<'_>,
    ) -> ZooResult<TaskOutcome> {
        self.profile.ensure_active("perform task")?;
        match task {
            VeterinarianTask::HealthCheck => self.health_check(ctx),
            VeterinarianTask::Report => Ok(TaskOutcome::Reported {
                entries: self.record_report(None)?,
            }),
            VeterinarianTask::Heal => self.heal(ctx),
        }
    }

    fn health_check(&mut self, ctx: &mut TaskContext<'_>) -> ZooResult<TaskOutcome> {
        if self.animals.is_empty() {
            tracing::debug!(staff = self.profile.name(), "No animals to check");
            return Ok(TaskOutcome::Nothing);
        }

        let mut checked = Vec::new();
        let mut records_created = Vec::new();
        for id in self.animals.clone() {
            let Some(animal) = ctx.animals.iter().find(|a| a.id() == id) else {
                continue;
            };
            checked.push(id);
            if animal.is_healthy() {
                continue;
            }
            tracing::info!(staff = self.profile.name(), animal = animal.name(), "Animal is sick");
            if let Some(draft) = ctx.decisions.record_for(animal) {
                records_created.push(self.generate_record(animal, draft)?);
            }
        }

        Ok(TaskOutcome::HealthChecked {
            checked,
            records_created,
        })
    }

    fn heal(&mut self, ctx: &mut TaskContext<'_>) -> ZooResult<TaskOutcome> {
        let sick: Vec<&Animal> = ctx
            .animals
            .iter()
            .filter(|a| self.animals.contains(&a.id()) && !a.is_healthy())
            .collect();
        if sick.is_empty() {
            tracing::info!(staff = self.profile.name(), "No sick animals to heal");
            return Ok(TaskOutcome::Nothing);
        }

        let choice = ctx.decisions.choose_patient(&sick);
        let patient = match choice {
            Some(index) if index < sick.len() => sick[index].id(),
            Some(index) => {
                tracing::warn!(staff = self.profile.name(), index, "Invalid patient choice");
                return Ok(TaskOutcome::Healed {
                    animal: None,
                    records_closed: 0,
                });
            }
            None => {
                return Ok(TaskOutcome::Healed {
                    animal: None,
                    records_closed: 0,
                })
            }
        };

        match ctx.animals.iter_mut().find(|a| a.id() == patient) {
            Some(animal) => Ok(TaskOutcome::Healed {
                animal: Some(patient),
                records_closed: self.heal_animal(animal)?,
            }),
            None => Ok(TaskOutcome::Nothing),
        }
    }
}
