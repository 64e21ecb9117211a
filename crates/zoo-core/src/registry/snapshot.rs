//! Read-only views of a zoo for reporting and export.

use serde::Serialize;

use super::Zoo;
use crate::error::ZooResult;
use crate::models::{Animal, Enclosure, HealthRecord};
use crate::staff::{Role, Staff};

/// Headline numbers of a zoo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZooSummary {
    pub name: String,
    pub zookeepers: usize,
    pub veterinarians: usize,
    pub active_staff: usize,
    pub animals: usize,
    pub sick_animals: usize,
    pub enclosures: usize,
    /// Residents across all enclosures
    pub occupied: usize,
    /// Capacity across all enclosures
    pub capacity: usize,
    pub open_records: usize,
}

/// Everything in a zoo at one moment, ready for JSON export.
#[derive(Debug, Serialize)]
pub struct ZooSnapshot<'a> {
    pub summary: ZooSummary,
    pub staff: &'a [Staff],
    pub animals: &'a [Animal],
    pub enclosures: &'a [Enclosure],
    pub open_records: Vec<&'a HealthRecord>,
}

impl ZooSnapshot<'_> {
    /// Export as pretty-printed JSON.
    pub fn to_json(&self) -> ZooResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Zoo {
    pub fn summary(&self) -> ZooSummary {
        let count_role = |role: Role| self.staff.iter().filter(|s| s.role() == role).count();
        ZooSummary {
            name: self.name.clone(),
            zookeepers: count_role(Role::Zookeeper),
            veterinarians: count_role(Role::Veterinarian),
            active_staff: self.staff.iter().filter(|s| s.is_active()).count(),
            animals: self.animals.len(),
            sick_animals: self.animals.iter().filter(|a| !a.is_healthy()).count(),
            enclosures: self.enclosures.len(),
            occupied: self.enclosures.iter().map(Enclosure::len).sum(),
            capacity: self.enclosures.iter().map(Enclosure::capacity).sum(),
            open_records: self.open_records().len(),
        }
    }

    pub fn snapshot(&self) -> ZooSnapshot<'_> {
        ZooSnapshot {
            summary: self.summary(),
            staff: &self.staff,
            animals: &self.animals,
            enclosures: &self.enclosures,
            open_records: self.open_records(),
        }
    }

    /// Active records, by veterinarian and then by animal.
    pub fn open_records(&self) -> Vec<&HealthRecord> {
        self.staff
            .iter()
            .filter_map(Staff::as_veterinarian)
            .flat_map(|vet| {
                self.animals
                    .iter()
                    .flat_map(move |a| vet.records(a.id()))
            })
            .filter(|r| r.is_active())
            .collect()
    }
}
