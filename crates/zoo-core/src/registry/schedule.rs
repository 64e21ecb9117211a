//! Daily routines run across every staff member of a role.
//!
//! Each routine collects one result per staff member. A failing member
//! (say, a zookeeper with no enclosures) is reported and the rest still run.

use serde::Serialize;

use super::Zoo;
use crate::error::ZooResult;
use crate::models::StaffId;
use crate::staff::{CareDecisions, DeclineAll, Role, TaskContext, TaskOutcome};

/// Outcome of one routine for each staff member it ran for.
pub type ScheduleResults = Vec<(StaffId, ZooResult<TaskOutcome>)>;

/// Results of a full day: feeding, cleaning, then health checks.
#[derive(Debug)]
pub struct DailyReport {
    pub feeding: ScheduleResults,
    pub cleaning: ScheduleResults,
    pub health_checks: ScheduleResults,
}

/// Counts of a [`DailyReport`], for logging and printing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DailyTotals {
    pub tasks_run: usize,
    pub tasks_failed: usize,
    pub animals_sickened: usize,
    pub records_created: usize,
}

impl DailyReport {
    /// Every result of the day, in the order it was produced.
    pub fn results(&self) -> impl Iterator<Item = &(StaffId, ZooResult<TaskOutcome>)> {
        self.feeding
            .iter()
            .chain(&self.cleaning)
            .chain(&self.health_checks)
    }

    pub fn totals(&self) -> DailyTotals {
        let mut totals = DailyTotals::default();
        for (_, result) in self.results() {
            totals.tasks_run += 1;
            match result {
                Ok(TaskOutcome::Fed { sickened, .. }) => totals.animals_sickened += sickened.len(),
                Ok(TaskOutcome::HealthChecked {
                    records_created, ..
                }) => totals.records_created += records_created.len(),
                Ok(_) => {}
                Err(_) => totals.tasks_failed += 1,
            }
        }
        totals
    }
}

impl Zoo {
    /// Every zookeeper feeds their enclosures.
    pub fn schedule_daily_feeding(&mut self) -> ScheduleResults {
        self.run_for_role(Role::Zookeeper, "feed", &mut DeclineAll)
    }

    /// Every zookeeper cleans their enclosures.
    pub fn schedule_daily_cleaning(&mut self) -> ScheduleResults {
        self.run_for_role(Role::Zookeeper, "clean", &mut DeclineAll)
    }

    /// Every veterinarian checks their animals, asking `decisions` which
    /// sick animals get a record.
    pub fn schedule_daily_health_checks(
        &mut self,
        decisions: &mut dyn CareDecisions,
    ) -> ScheduleResults {
        self.run_for_role(Role::Veterinarian, "health check", decisions)
    }

    /// Feeding, cleaning and health checks, in that order.
    pub fn run_full_daily_schedule(&mut self, decisions: &mut dyn CareDecisions) -> DailyReport {
        tracing::info!(zoo = %self.name, "Running full daily schedule");
        let report = DailyReport {
            feeding: self.schedule_daily_feeding(),
            cleaning: self.schedule_daily_cleaning(),
            health_checks: self.schedule_daily_health_checks(decisions),
        };

        let totals = report.totals();
        tracing::info!(
            zoo = %self.name,
            tasks_run = totals.tasks_run,
            tasks_failed = totals.tasks_failed,
            animals_sickened = totals.animals_sickened,
            records_created = totals.records_created,
            "Daily schedule complete"
        );
        report
    }

    fn run_for_role(
        &mut self,
        role: Role,
        task: &str,
        decisions: &mut dyn CareDecisions,
    ) -> ScheduleResults {
        let mut results = Vec::new();
        for member in self.staff.iter_mut().filter(|s| s.role() == role) {
            let mut ctx = TaskContext {
                animals: &mut self.animals,
                enclosures: &mut self.enclosures,
                decisions: &mut *decisions,
            };
            let result = member.perform_task(task, &mut ctx);
            if let Err(e) = &result {
                tracing::warn!(staff = member.name(), task, error = %e, "Scheduled task failed");
            }
            results.push((member.id(), result));
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::models::{Animal, RecordDraft};
    use crate::staff::{ScriptedDecisions, Staff};

    #[test]
    fn test_failing_keeper_does_not_stop_others() {
        let mut zoo = Zoo::new("T").unwrap();
        let idle = Staff::zookeeper("Idle").unwrap();
        let busy = Staff::zookeeper("Busy").unwrap();
        let (idle_id, busy_id) = (idle.id(), busy.id());
        zoo.add_staff(idle);
        zoo.add_staff(busy);
        let enc = zoo.create_enclosure(100, "desert").unwrap();
        zoo.assign(busy_id, enc.into()).unwrap();

        let results = zoo.schedule_daily_feeding();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, idle_id);
        assert_eq!(results[0].1.as_ref().unwrap_err().kind(), ErrorKind::State);
        assert_eq!(results[1].0, busy_id);
        assert!(results[1].1.is_ok());
        assert_eq!(zoo.enclosure(enc).unwrap().clean_level(), 4);
    }

    #[test]
    fn test_full_day() {
        let mut zoo = Zoo::new("T").unwrap();
        let lion = Animal::mammal("Simba", "Lion", 5, "Meat", "savannah", false).unwrap();
        let lion_id = lion.id();
        zoo.add_animal(lion);
        let enc = zoo.create_enclosure(200, "savannah").unwrap();
        zoo.house_animal(enc, lion_id).unwrap();

        let zk = Staff::zookeeper("Alice").unwrap();
        let vet = Staff::veterinarian("Dr. Bob").unwrap();
        let (zk_id, vet_id) = (zk.id(), vet.id());
        zoo.add_staff(zk);
        zoo.add_staff(vet);
        zoo.assign(zk_id, enc.into()).unwrap();
        zoo.assign(vet_id, lion_id.into()).unwrap();

        let mut decisions = ScriptedDecisions::new().with_record(
            "Simba",
            RecordDraft::new("illness", "medium", "01/03/2025", "Fever."),
        );
        let report = zoo.run_full_daily_schedule(&mut decisions);

        assert_eq!(report.feeding.len(), 1);
        assert_eq!(report.cleaning.len(), 1);
        assert_eq!(report.health_checks.len(), 1);
        assert_eq!(
            report.totals(),
            DailyTotals {
                tasks_run: 3,
                tasks_failed: 0,
                animals_sickened: 0,
                records_created: 1,
            }
        );
        assert_eq!(zoo.enclosure(enc).unwrap().clean_level(), 5);
        assert_eq!(zoo.animals_under_treatment().len(), 1);
    }
}
