//! Staff members and their role-gated work.
//!
//! Two roles exist. Zookeepers are assigned enclosures and clean or feed
//! them; veterinarians are assigned animals and keep health records for
//! them. Assignment is checked at runtime: an inactive member accepts no
//! assignment, and each list only accepts the role it belongs to.

mod decisions;
mod veterinarian;
mod zookeeper;

pub use decisions::*;
pub use veterinarian::*;
pub use zookeeper::*;

use std::fmt;

use serde::Serialize;

use crate::error::{ZooError, ZooResult};
use crate::models::{
    Animal, AnimalId, Enclosure, EnclosureId, Entity, EntityId, HealthRecord, RecordId, StaffId,
};
use crate::validation::validate_string;

/// Fixed job role of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    Zookeeper,
    Veterinarian,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Zookeeper => f.write_str("Zookeeper"),
            Role::Veterinarian => f.write_str("Veterinarian"),
        }
    }
}

/// Identity and status common to every staff member.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StaffProfile {
    id: StaffId,
    name: String,
    #[serde(skip)]
    role: Role,
    active: bool,
}

impl StaffProfile {
    fn new(name: &str, role: Role) -> ZooResult<Self> {
        let name = validate_string(name, "staff name")?.to_string();
        Ok(Self {
            id: StaffId::new(),
            name,
            role,
            active: true,
        })
    }

    pub fn id(&self) -> StaffId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    fn ensure_active(&self, action: &str) -> ZooResult<()> {
        if !self.active {
            return Err(ZooError::State(format!(
                "cannot {}: {} is inactive",
                action, self.name
            )));
        }
        Ok(())
    }
}

/// What a task needs from the zoo it runs in.
pub struct TaskContext<'a> {
    /// All animals of the zoo
    pub animals: &'a mut [Animal],
    /// All enclosures of the zoo
    pub enclosures: &'a mut [Enclosure],
    /// Answers to the questions a task may ask
    pub decisions: &'a mut dyn CareDecisions,
}

/// Health records of one animal, as listed in a report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnimalReport {
    pub animal_id: AnimalId,
    pub records: Vec<HealthRecord>,
}

/// Result of a performed task.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "task", rename_all = "snake_case")]
pub enum TaskOutcome {
    /// Enclosures restored to full cleanliness
    Cleaned { enclosures: Vec<EnclosureId> },
    /// Residents fed; enclosures got dirtier and may have sickened animals
    Fed {
        enclosures: Vec<EnclosureId>,
        fed: Vec<AnimalId>,
        sickened: Vec<AnimalId>,
    },
    /// Assigned animals checked; records opened for some sick ones
    HealthChecked {
        checked: Vec<AnimalId>,
        records_created: Vec<RecordId>,
    },
    /// Records of assigned animals
    Reported { entries: Vec<AnimalReport> },
    /// A sick animal treated, or `None` if nobody was chosen
    Healed {
        animal: Option<AnimalId>,
        records_closed: usize,
    },
    /// Nothing to do
    Nothing,
}

/// A staff member of either role.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Staff {
    Zookeeper(Zookeeper),
    Veterinarian(Veterinarian),
}

impl Staff {
    /// Hire a zookeeper.
    pub fn zookeeper(name: &str) -> ZooResult<Self> {
        Ok(Staff::Zookeeper(Zookeeper::new(name)?))
    }

    /// Hire a veterinarian.
    pub fn veterinarian(name: &str) -> ZooResult<Self> {
        Ok(Staff::Veterinarian(Veterinarian::new(name)?))
    }

    pub fn profile(&self) -> &StaffProfile {
        match self {
            Staff::Zookeeper(z) => z.profile(),
            Staff::Veterinarian(v) => v.profile(),
        }
    }

    fn profile_mut(&mut self) -> &mut StaffProfile {
        match self {
            Staff::Zookeeper(z) => &mut z.profile,
            Staff::Veterinarian(v) => &mut v.profile,
        }
    }

    pub fn id(&self) -> StaffId {
        self.profile().id()
    }

    pub fn name(&self) -> &str {
        self.profile().name()
    }

    pub fn role(&self) -> Role {
        self.profile().role()
    }

    pub fn is_active(&self) -> bool {
        self.profile().is_active()
    }

    /// Assign an enclosure. Only active zookeepers accept enclosures.
    pub fn assign_enclosure(&mut self, enclosure: &Enclosure) -> ZooResult<()> {
        self.profile().ensure_active("assign enclosure")?;
        match self {
            Staff::Zookeeper(z) => {
                z.assign_enclosure(enclosure);
                Ok(())
            }
            Staff::Veterinarian(v) => Err(ZooError::Permission(format!(
                "only zookeepers can be assigned enclosures, {} is a {}",
                v.profile().name(),
                Role::Veterinarian
            ))),
        }
    }

    /// Assign an animal. Only active veterinarians accept animals.
    pub fn assign_animal(&mut self, animal: &Animal) -> ZooResult<()> {
        self.profile().ensure_active("assign animal")?;
        match self {
            Staff::Veterinarian(v) => {
                v.assign_animal(animal);
                Ok(())
            }
            Staff::Zookeeper(z) => Err(ZooError::Permission(format!(
                "only veterinarians can be assigned animals, {} is a {}",
                z.profile().name(),
                Role::Zookeeper
            ))),
        }
    }

    /// Enclosures assigned to this member (always empty for veterinarians).
    pub fn assigned_enclosures(&self) -> &[EnclosureId] {
        match self {
            Staff::Zookeeper(z) => z.enclosures(),
            Staff::Veterinarian(_) => &[],
        }
    }

    /// Animals assigned to this member (always empty for zookeepers).
    pub fn assigned_animals(&self) -> &[AnimalId] {
        match self {
            Staff::Veterinarian(v) => v.animals(),
            Staff::Zookeeper(_) => &[],
        }
    }

    /// Deactivate and drop every assignment. There is no way back.
    pub fn deactivate(&mut self) {
        match self {
            Staff::Zookeeper(z) => z.clear_assignments(),
            Staff::Veterinarian(v) => v.clear_assignments(),
        }
        let profile = self.profile_mut();
        if profile.active {
            profile.active = false;
            tracing::info!(
                staff_id = %profile.id,
                staff = %profile.name,
                "Staff member deactivated"
            );
        }
    }

    /// Run a named task of this member's role.
    pub fn perform_task(
        &mut self,
        task: &str,
        ctx: &mut TaskContext<'_>,
    ) -> ZooResult<TaskOutcome> {
        match self {
            Staff::Zookeeper(z) => z.perform_task(task.parse()?, ctx),
            Staff::Veterinarian(v) => v.perform_task(task.parse()?, ctx),
        }
    }

    pub fn as_veterinarian(&self) -> Option<&Veterinarian> {
        match self {
            Staff::Veterinarian(v) => Some(v),
            Staff::Zookeeper(_) => None,
        }
    }

    pub fn as_veterinarian_mut(&mut self) -> Option<&mut Veterinarian> {
        match self {
            Staff::Veterinarian(v) => Some(v),
            Staff::Zookeeper(_) => None,
        }
    }

    pub fn as_zookeeper(&self) -> Option<&Zookeeper> {
        match self {
            Staff::Zookeeper(z) => Some(z),
            Staff::Veterinarian(_) => None,
        }
    }

    pub(crate) fn forget_enclosure(&mut self, enclosure: EnclosureId) {
        if let Staff::Zookeeper(z) = self {
            z.unassign_enclosure(enclosure);
        }
    }

    pub(crate) fn forget_animal(&mut self, animal: AnimalId) {
        if let Staff::Veterinarian(v) = self {
            v.forget_animal(animal);
        }
    }
}

impl Entity for Staff {
    fn entity_id(&self) -> EntityId {
        EntityId::Staff(self.id())
    }

    fn describe(&self) -> String {
        let status = if self.is_active() { "Active" } else { "Inactive" };
        format!(
            "{} {} (ID: {})\nAssigned enclosures: {}\nAssigned animals: {}\nStatus: {}",
            self.role(),
            self.name(),
            self.id(),
            self.assigned_enclosures().len(),
            self.assigned_animals().len(),
            status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn make_enclosure() -> Enclosure {
        Enclosure::new(200, "savannah").unwrap()
    }

    fn make_lion() -> Animal {
        Animal::mammal("Simba", "Lion", 5, "Meat", "savannah", true).unwrap()
    }

    #[test]
    fn test_valid_creation() {
        let zk = Staff::zookeeper(" Alice ").unwrap();
        assert_eq!(zk.name(), "Alice");
        assert_eq!(zk.role(), Role::Zookeeper);
        assert!(zk.is_active());

        let err = Staff::veterinarian("   ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_zookeeper_assign_enclosure() {
        let mut zk = Staff::zookeeper("Alice").unwrap();
        let enc = make_enclosure();

        zk.assign_enclosure(&enc).unwrap();
        zk.assign_enclosure(&enc).unwrap();
        assert_eq!(zk.assigned_enclosures(), &[enc.id()]);
        assert!(zk.assigned_animals().is_empty());
    }

    #[test]
    fn test_veterinarian_cannot_take_enclosure() {
        let mut vet = Staff::veterinarian("Dr. Bob").unwrap();
        let err = vet.assign_enclosure(&make_enclosure()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Permission);
    }

    #[test]
    fn test_zookeeper_cannot_take_animal() {
        let mut zk = Staff::zookeeper("Alice").unwrap();
        let err = zk.assign_animal(&make_lion()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Permission);
    }

    #[test]
    fn test_inactive_staff_rejects_assignment() {
        let mut zk = Staff::zookeeper("Alice").unwrap();
        let mut vet = Staff::veterinarian("Dr. Bob").unwrap();
        zk.deactivate();
        vet.deactivate();

        assert_eq!(zk.assign_enclosure(&make_enclosure()).unwrap_err().kind(), ErrorKind::State);
        assert_eq!(vet.assign_animal(&make_lion()).unwrap_err().kind(), ErrorKind::State);
        // Inactive check wins over the role check
        assert_eq!(zk.assign_animal(&make_lion()).unwrap_err().kind(), ErrorKind::State);
    }

    #[test]
    fn test_deactivate_clears_assignments() {
        let mut zk = Staff::zookeeper("Alice").unwrap();
        let mut vet = Staff::veterinarian("Dr. Bob").unwrap();
        zk.assign_enclosure(&make_enclosure()).unwrap();
        vet.assign_animal(&make_lion()).unwrap();

        zk.deactivate();
        vet.deactivate();
        vet.deactivate();

        assert!(!zk.is_active());
        assert!(zk.assigned_enclosures().is_empty());
        assert!(vet.assigned_animals().is_empty());
    }

    #[test]
    fn test_describe() {
        let zk = Staff::zookeeper("Alice").unwrap();
        let text = zk.describe();
        assert!(text.starts_with("Zookeeper Alice"));
        assert!(text.contains("Status: Active"));
    }
}
