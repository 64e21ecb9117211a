//! Zoo Core Library
//!
//! In-memory registry of a zoo's staff, animals, enclosures and health
//! records.
//!
//! # Architecture
//!
//! ```text
//!                              ┌──────────────────────┐
//!                              │         Zoo          │
//!                              │  owns Staff, Animal, │
//!                              │      Enclosure       │
//!                              └──────────┬───────────┘
//!                                         │ ids only
//!                 ┌───────────────────────┼───────────────────────┐
//!                 │                       │                       │
//!                 ▼                       ▼                       ▼
//!            Zookeeper               Enclosure              Veterinarian
//!         (EnclosureIds)      (AnimalIds, species lock,   (AnimalIds, records)
//!                 │               cleanliness)                    │
//!                 │                       │                       │
//!           clean / feed ───────▶ decrease_cleanliness      health check / heal
//!                                         │                       │
//!                                         ▼                       ▼
//!                                   animals fall sick ──▶ HealthRecord opened
//! ```
//!
//! # Core Principle
//!
//! **Only the zoo owns entities.** Enclosures and staff refer to animals and
//! enclosures by id, and every cross-entity change goes through [`Zoo`] so
//! no id outlives its entity.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Animal, Enclosure, HealthRecord, ids)
//! - [`staff`]: Zookeepers and veterinarians, their tasks and decisions
//! - [`registry`]: The [`Zoo`] registry, lookups, schedules and snapshots
//! - [`validation`]: Field validation shared by every constructor
//! - [`config`]: Husbandry rules
//! - [`error`]: Error taxonomy

pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod staff;
pub mod validation;

// Re-export commonly used types
pub use config::HusbandryRules;
pub use error::{ErrorKind, ZooError, ZooResult};
pub use models::{
    Animal, AnimalClass, AnimalDraft, AnimalId, Enclosure, EnclosureId, Entity, EntityId,
    Environment, HealthRecord, Issue, RecordDraft, RecordId, Severity, StaffId,
};
pub use registry::{DailyReport, Zoo, ZooSnapshot, ZooSummary};
pub use staff::{
    CareDecisions, DeclineAll, Role, ScriptedDecisions, Staff, TaskOutcome, Veterinarian,
    Zookeeper,
};
