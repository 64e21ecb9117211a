//! End-to-end zoo scenarios through the public API.

use zoo_core::staff::TREATMENT_CLOSING_NOTE;
use zoo_core::{
    Animal, Enclosure, ErrorKind, RecordDraft, ScriptedDecisions, Staff, TaskOutcome, Zoo,
};

fn make_animal(name: &str, species: &str) -> Animal {
    Animal::mammal(name, species, 4, "Meat", "savannah", true).unwrap()
}

#[test]
fn test_lions_fill_enclosure_and_tiger_is_rejected() {
    let mut zoo = Zoo::new("T").unwrap();
    let enc = zoo.create_enclosure(200, "savannah").unwrap();
    assert_eq!(zoo.enclosure(enc).unwrap().capacity(), 2);

    let simba = make_animal("Simba", "Lion");
    let nala = make_animal("Nala", "Lion");
    let shere_khan = make_animal("Shere Khan", "Tiger");
    let ids = [simba.id(), nala.id(), shere_khan.id()];
    zoo.add_animal(simba);
    zoo.add_animal(nala);
    zoo.add_animal(shere_khan);

    assert!(zoo.house_animal(enc, ids[0]).unwrap());
    assert!(zoo.house_animal(enc, ids[1]).unwrap());
    assert_eq!(zoo.enclosure(enc).unwrap().len(), 2);

    assert!(!zoo.house_animal(enc, ids[2]).unwrap());
    assert_eq!(zoo.enclosure(enc).unwrap().len(), 2);
}

#[test]
fn test_tiger_rejected_by_species_lock_before_capacity() {
    let mut enc = Enclosure::new(500, "savannah").unwrap();
    assert!(enc.add_animal(&make_animal("Simba", "Lion")));
    assert!(!enc.add_animal(&make_animal("Shere Khan", "Tiger")));
    assert_eq!(enc.len(), 1);
}

#[test]
fn test_vet_record_closed_by_healing() {
    let mut zoo = Zoo::new("T").unwrap();
    let lion = make_animal("Simba", "Lion");
    let lion_id = lion.id();
    zoo.add_animal(lion);

    let vet = Staff::veterinarian("Dr. Bob").unwrap();
    let vet_id = vet.id();
    zoo.add_staff(vet);
    zoo.assign(vet_id, lion_id.into()).unwrap();

    let draft = RecordDraft::new("injuries", "high", "25/12/2025", "Initial treatment.");
    zoo.generate_record(vet_id, lion_id, draft).unwrap();
    assert_eq!(zoo.animals_under_treatment().len(), 1);

    assert_eq!(zoo.heal_animal(vet_id, lion_id).unwrap(), 1);

    let records = zoo.health_records_for_animal(lion_id).unwrap();
    assert_eq!(records.len(), 1);
    assert!(!records[0].is_active());
    assert!(records[0].treatment_notes().ends_with(TREATMENT_CLOSING_NOTE));
    assert!(zoo.animals_under_treatment().is_empty());
}

#[test]
fn test_dirty_enclosure_sickens_then_vet_treats() {
    let mut zoo = Zoo::new("T").unwrap();
    let lion = make_animal("Simba", "Lion");
    let lion_id = lion.id();
    zoo.add_animal(lion);
    let enc = zoo.create_enclosure(100, "savannah").unwrap();
    zoo.house_animal(enc, lion_id).unwrap();

    let zk = Staff::zookeeper("Alice").unwrap();
    let vet = Staff::veterinarian("Dr. Bob").unwrap();
    let (zk_id, vet_id) = (zk.id(), vet.id());
    zoo.add_staff(zk);
    zoo.add_staff(vet);
    zoo.assign(zk_id, enc.into()).unwrap();
    zoo.assign(vet_id, lion_id.into()).unwrap();

    let mut decisions = ScriptedDecisions::new()
        .with_record(
            "Simba",
            RecordDraft::new("illness", "medium", "03/04/2025", "Dirty enclosure."),
        )
        .with_choice(0);

    for _ in 0..3 {
        zoo.perform_task(zk_id, "feed", &mut decisions).unwrap();
    }
    assert!(!zoo.animal(lion_id).unwrap().is_healthy());

    let outcome = zoo.perform_task(vet_id, "health check", &mut decisions).unwrap();
    assert!(matches!(
        outcome,
        TaskOutcome::HealthChecked { ref records_created, .. } if records_created.len() == 1
    ));

    let outcome = zoo.perform_task(vet_id, "heal", &mut decisions).unwrap();
    assert_eq!(
        outcome,
        TaskOutcome::Healed {
            animal: Some(lion_id),
            records_closed: 1
        }
    );
    assert!(zoo.animal(lion_id).unwrap().is_healthy());
    assert!(decisions.is_exhausted());

    zoo.perform_task(zk_id, "clean", &mut decisions).unwrap();
    assert_eq!(zoo.enclosure(enc).unwrap().clean_level(), 5);
}

#[test]
fn test_role_gating() {
    let mut zoo = Zoo::new("T").unwrap();
    let enc = zoo.create_enclosure(100, "jungle").unwrap();
    let parrot = Animal::bird("Polly", "Parrot", 2, "Seeds", "jungle", true).unwrap();
    let parrot_id = parrot.id();
    zoo.add_animal(parrot);

    let zk = Staff::zookeeper("Alice").unwrap();
    let vet = Staff::veterinarian("Dr. Bob").unwrap();
    let (zk_id, vet_id) = (zk.id(), vet.id());
    zoo.add_staff(zk);
    zoo.add_staff(vet);

    let err = zoo.assign(vet_id, enc.into()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Permission);
    let err = zoo.assign(zk_id, parrot_id.into()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Permission);

    let removed = zoo.remove_staff(zk_id).unwrap();
    assert!(!removed.is_active());

    zoo.deactivate_staff(vet_id).unwrap();
    let err = zoo.assign(vet_id, parrot_id.into()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::State);
}

#[test]
fn test_removal_cascades_keep_ids_live() {
    let mut zoo = Zoo::new("T").unwrap();
    let lion = make_animal("Simba", "Lion");
    let lion_id = lion.id();
    zoo.add_animal(lion);
    let enc = zoo.create_enclosure(200, "savannah").unwrap();
    zoo.house_animal(enc, lion_id).unwrap();

    let zk = Staff::zookeeper("Alice").unwrap();
    let zk_id = zk.id();
    zoo.add_staff(zk);
    zoo.assign(zk_id, enc.into()).unwrap();

    assert_eq!(zoo.remove_enclosure(enc).unwrap_err().kind(), ErrorKind::State);

    zoo.remove_animal(lion_id).unwrap();
    assert!(zoo.enclosure(enc).unwrap().is_empty());
    zoo.remove_enclosure(enc).unwrap();

    let keeper = zoo.staff_member(zk_id).unwrap();
    assert!(keeper.assigned_enclosures().is_empty());
    let err = zoo.perform_task(zk_id, "feed", &mut ScriptedDecisions::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::State);
}

#[test]
fn test_unknown_task_rejected() {
    let mut zoo = Zoo::new("T").unwrap();
    let vet = Staff::veterinarian("Dr. Bob").unwrap();
    let vet_id = vet.id();
    zoo.add_staff(vet);

    let mut decisions = ScriptedDecisions::new();
    for task in ["", "   ", "feed", "dance"] {
        let err = zoo.perform_task(vet_id, task, &mut decisions).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation, "task {:?}", task);
    }
}
