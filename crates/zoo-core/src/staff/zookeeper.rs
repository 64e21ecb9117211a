//! Zookeepers: cleaning and feeding of assigned enclosures.

use std::str::FromStr;

use serde::Serialize;

use super::{Role, StaffProfile, TaskContext, TaskOutcome};
use crate::error::{ZooError, ZooResult};
use crate::models::{Enclosure, EnclosureId};

/// Tasks a zookeeper can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZookeeperTask {
    /// Restore every assigned enclosure to full cleanliness
    Clean,
    /// Feed the residents of every assigned enclosure
    Feed,
}

impl FromStr for ZookeeperTask {
    type Err = ZooError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" => Err(ZooError::Validation("task name must not be empty".into())),
            "clean" => Ok(ZookeeperTask::Clean),
            "feed" => Ok(ZookeeperTask::Feed),
            other => Err(ZooError::Validation(format!(
                "unknown zookeeper task '{}' (expected clean or feed)",
                other
            ))),
        }
    }
}

/// A staff member responsible for enclosures.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Zookeeper {
    #[serde(flatten)]
    pub(super) profile: StaffProfile,
    enclosures: Vec<EnclosureId>,
}

impl Zookeeper {
    pub(super) fn new(name: &str) -> ZooResult<Self> {
        Ok(Self {
            profile: StaffProfile::new(name, Role::Zookeeper)?,
            enclosures: Vec::new(),
        })
    }

    pub fn profile(&self) -> &StaffProfile {
        &self.profile
    }

    /// Assigned enclosures in assignment order.
    pub fn enclosures(&self) -> &[EnclosureId] {
        &self.enclosures
    }

    pub(super) fn assign_enclosure(&mut self, enclosure: &Enclosure) {
        if self.enclosures.contains(&enclosure.id()) {
            return;
        }
        self.enclosures.push(enclosure.id());
        tracing::info!(
            staff = self.profile.name(),
            enclosure_id = %enclosure.id(),
            environment = %enclosure.environment(),
            "Enclosure assigned to zookeeper"
        );
    }

    pub(super) fn unassign_enclosure(&mut self, enclosure: EnclosureId) {
        self.enclosures.retain(|id| *id != enclosure);
    }

    pub(super) fn clear_assignments(&mut self) {
        self.enclosures.clear();
    }

    /// Perform `task` on every assigned enclosure found in the context.
    pub fn perform_task(
        &mut self,
        task: ZookeeperTask,
        ctx: &mut TaskContext<'_>,
    ) -> ZooResult<TaskOutcome> {
        self.profile.ensure_active("perform task")?;
        let reachable = ctx
            .enclosures
            .iter()
            .any(|e| self.enclosures.contains(&e.id()));
        if !reachable {
            return Err(ZooError::State(format!(
                "{} has no enclosures assigned",
                self.profile.name()
            )));
        }

        match task {
            ZookeeperTask::Clean => Ok(self.clean(ctx)),
            ZookeeperTask::Feed => Ok(self.feed(ctx)),
        }
    }

    fn clean(&self, ctx: &mut TaskContext<'_>) -> TaskOutcome {
        let mut cleaned = Vec::new();
        for enclosure in ctx.enclosures.iter_mut() {
            if self.enclosures.contains(&enclosure.id()) {
                enclosure.clean_enclosure();
                cleaned.push(enclosure.id());
            }
        }
        tracing::info!(
            staff = self.profile.name(),
            count = cleaned.len(),
            "Zookeeper cleaned enclosures"
        );
        TaskOutcome::Cleaned { enclosures: cleaned }
    }

    fn feed(&self, ctx: &mut TaskContext<'_>) -> TaskOutcome {
        let mut fed_enclosures = Vec::new();
        let mut fed = Vec::new();
        let mut sickened = Vec::new();

        for enclosure in ctx.enclosures.iter_mut() {
            if !self.enclosures.contains(&enclosure.id()) {
                continue;
            }
            for animal in ctx.animals.iter().filter(|a| enclosure.contains(a.id())) {
                tracing::debug!(staff = self.profile.name(), "{}", animal.eat());
                fed.push(animal.id());
            }
            sickened.extend(enclosure.decrease_cleanliness(ctx.animals));
            fed_enclosures.push(enclosure.id());
        }

        tracing::info!(
            staff = self.profile.name(),
            fed = fed.len(),
            sickened = sickened.len(),
            "Zookeeper fed animals"
        );
        TaskOutcome::Fed {
            enclosures: fed_enclosures,
            fed,
            sickened,
        }
    }
}
