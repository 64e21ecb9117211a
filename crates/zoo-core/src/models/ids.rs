//! Opaque identifiers for zoo entities.
//!
//! Every entity gets a random v4 UUID at construction. Equality and lookup
//! go through these tokens, never through structural comparison of the
//! entity itself.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// The underlying UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of an [`Animal`](crate::models::Animal).
    AnimalId
);
entity_id!(
    /// Identifier of an [`Enclosure`](crate::models::Enclosure).
    EnclosureId
);
entity_id!(
    /// Identifier of a [`Staff`](crate::staff::Staff) member.
    StaffId
);
entity_id!(
    /// Identifier of a [`HealthRecord`](crate::models::HealthRecord).
    RecordId
);

/// Identifier of any zoo member, tagged with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum EntityId {
    Animal(AnimalId),
    Enclosure(EnclosureId),
    Staff(StaffId),
}

impl EntityId {
    /// Human-readable kind name.
    pub fn kind_name(&self) -> &'static str {
        match self {
            EntityId::Animal(_) => "animal",
            EntityId::Enclosure(_) => "enclosure",
            EntityId::Staff(_) => "staff",
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Animal(id) => write!(f, "animal:{}", id),
            EntityId::Enclosure(id) => write!(f, "enclosure:{}", id),
            EntityId::Staff(id) => write!(f, "staff:{}", id),
        }
    }
}

impl From<AnimalId> for EntityId {
    fn from(id: AnimalId) -> Self {
        EntityId::Animal(id)
    }
}

impl From<EnclosureId> for EntityId {
    fn from(id: EnclosureId) -> Self {
        EntityId::Enclosure(id)
    }
}

impl From<StaffId> for EntityId {
    fn from(id: StaffId) -> Self {
        EntityId::Staff(id)
    }
}

/// Identity and formatting shared by every zoo member.
pub trait Entity {
    /// Tagged identifier of this entity.
    fn entity_id(&self) -> EntityId;

    /// Short multi-line description for reports.
    fn describe(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = AnimalId::new();
        let b = AnimalId::new();
        assert_ne!(a, b);
        assert_eq!(a.to_string().len(), 36); // UUID format
    }

    #[test]
    fn test_entity_id_tagging() {
        let id = StaffId::new();
        let tagged: EntityId = id.into();
        assert_eq!(tagged.kind_name(), "staff");
        assert!(tagged.to_string().starts_with("staff:"));

        let json = serde_json::to_value(tagged).unwrap();
        assert_eq!(json["kind"], "staff");
    }
}
