//! Answers to the questions veterinary tasks ask.
//!
//! A health check asks, per sick animal, whether to open a record and with
//! what details; healing asks which sick animal to treat. Both are supplied
//! through [`CareDecisions`] so tasks never read from a terminal.

use std::collections::{HashMap, VecDeque};

use crate::models::{Animal, RecordDraft};

/// Source of decisions for veterinary tasks.
pub trait CareDecisions {
    /// Details of a record to open for the sick `animal`, or `None` to skip it.
    fn record_for(&mut self, animal: &Animal) -> Option<RecordDraft>;

    /// Index into `sick` of the animal to treat, or `None` to treat nobody.
    fn choose_patient(&mut self, sick: &[&Animal]) -> Option<usize>;
}

/// Declines every question: no records are opened and nobody is treated.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclineAll;

impl CareDecisions for DeclineAll {
    fn record_for(&mut self, _animal: &Animal) -> Option<RecordDraft> {
        None
    }

    fn choose_patient(&mut self, _sick: &[&Animal]) -> Option<usize> {
        None
    }
}

/// Pre-recorded answers, consumed in order.
///
/// Record drafts are queued per animal name (case-insensitive). Patient
/// choices are queued globally; an exhausted queue answers `None`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDecisions {
    records: HashMap<String, VecDeque<RecordDraft>>,
    choices: VecDeque<usize>,
}

impl ScriptedDecisions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a record draft for the animal named `animal_name`.
    pub fn with_record(mut self, animal_name: &str, draft: RecordDraft) -> Self {
        self.push_record(animal_name, draft);
        self
    }

    /// Queue a patient choice.
    pub fn with_choice(mut self, index: usize) -> Self {
        self.push_choice(index);
        self
    }

    pub fn push_record(&mut self, animal_name: &str, draft: RecordDraft) {
        self.records
            .entry(animal_name.trim().to_lowercase())
            .or_default()
            .push_back(draft);
    }

    pub fn push_choice(&mut self, index: usize) {
        self.choices.push_back(index);
    }

    /// True once every queued answer has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.choices.is_empty() && self.records.values().all(VecDeque::is_empty)
    }
}

impl CareDecisions for ScriptedDecisions {
    fn record_for(&mut self, animal: &Animal) -> Option<RecordDraft> {
        self.records
            .get_mut(&animal.name().to_lowercase())
            .and_then(VecDeque::pop_front)
    }

    fn choose_patient(&mut self, _sick: &[&Animal]) -> Option<usize> {
        self.choices.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_animal(name: &str) -> Animal {
        Animal::mammal(name, "Lion", 5, "Meat", "savannah", false).unwrap()
    }

    #[test]
    fn test_decline_all() {
        let simba = make_animal("Simba");
        let mut decisions = DeclineAll;
        assert!(decisions.record_for(&simba).is_none());
        assert!(decisions.choose_patient(&[&simba]).is_none());
    }

    #[test]
    fn test_scripted_records_by_name() {
        let simba = make_animal("Simba");
        let nala = make_animal("Nala");
        let draft = RecordDraft::new("illness", "low", "01/02/2025", "Rest.");
        let mut decisions = ScriptedDecisions::new().with_record("SIMBA", draft.clone());

        assert!(decisions.record_for(&nala).is_none());
        assert_eq!(decisions.record_for(&simba), Some(draft));
        assert!(decisions.record_for(&simba).is_none());
        assert!(decisions.is_exhausted());
    }

    #[test]
    fn test_scripted_choices_in_order() {
        let simba = make_animal("Simba");
        let mut decisions = ScriptedDecisions::new().with_choice(0).with_choice(3);
        assert_eq!(decisions.choose_patient(&[&simba]), Some(0));
        assert_eq!(decisions.choose_patient(&[&simba]), Some(3));
        assert_eq!(decisions.choose_patient(&[&simba]), None);
    }
}
