//! Scripted walk through a zoo's day.
//!
//! Usage: `zoo-demo [RULES_JSON]`
//!
//! Builds a small zoo, runs the full daily schedule, treats a sick lion and
//! prints a JSON snapshot. Husbandry rules come from the optional JSON file
//! and `ZOO_*` environment overrides. Log verbosity follows `RUST_LOG`.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use zoo_core::{Animal, Entity, HusbandryRules, RecordDraft, ScriptedDecisions, Staff, Zoo};

const DEFAULT_LOG_FILTER: &str = "zoo_core=info,zoo_demo=info";

fn main() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();

    let rules = load_rules(std::env::args().nth(1))?;
    tracing::info!(?rules, "Husbandry rules loaded");

    let mut zoo =
        Zoo::with_rules("Sydney Wildlife Park", rules).context("Failed to create zoo")?;

    let alice = Staff::zookeeper("Alice")?;
    let bob = Staff::veterinarian("Bob")?;
    let (alice_id, bob_id) = (alice.id(), bob.id());
    zoo.add_staff(alice);
    zoo.add_staff(bob);

    for name in ["Alice", "Bob"] {
        if let Some(member) = zoo.find_staff_by_name(name) {
            println!("{}\n", member.describe());
        }
    }

    let savannah = zoo.create_enclosure(300, "Savannah")?;
    let jungle = zoo.create_enclosure(300, "Jungle")?;

    let leo = Animal::mammal("Leo", "lion", 5, "Meat", "Savannah", true)?;
    let croc = Animal::reptile("Croc", "Crocodile", 6, "Meat", "Jungle", true)?;
    let (leo_id, croc_id) = (leo.id(), croc.id());
    zoo.add_animal(leo);
    zoo.add_animal(croc);

    if let Some(found) = zoo.find_animal_by_name("Leo").first() {
        println!("Found animal:\n{}\n", found.describe());
    }
    if let Some(best) = zoo.search_animals("Kroc", 1).first() {
        println!("Did you mean {}? (score {:.2})\n", best.animal.name(), best.score);
    }

    zoo.house_animal(savannah, leo_id)?;
    zoo.house_animal(jungle, croc_id)?;

    for environment in ["Savannah", "Jungle"] {
        for enclosure in zoo.find_enclosure_by_environment(environment) {
            println!("{}\n{}\n", enclosure.describe(), enclosure.report_status(zoo.animals()));
        }
    }

    zoo.assign(alice_id, savannah.into())?;
    zoo.assign(alice_id, jungle.into())?;
    zoo.assign(bob_id, leo_id.into())?;
    zoo.assign(bob_id, croc_id.into())?;

    let mut decisions = ScriptedDecisions::new()
        .with_record(
            "Samba",
            RecordDraft::new("injuries", "high", "25/12/2025", "Wound cleaned and bandaged."),
        )
        .with_choice(0);

    let report = zoo.run_full_daily_schedule(&mut decisions);
    let totals = report.totals();
    println!(
        "Daily schedule: {} task(s), {} failed, {} animal(s) sickened, {} record(s) opened\n",
        totals.tasks_run, totals.tasks_failed, totals.animals_sickened, totals.records_created
    );

    // A lion arrives sick and is checked on arrival
    let samba = Animal::mammal("Samba", "lion", 5, "meat", "Savannah", false)?;
    let samba_id = samba.id();
    zoo.add_animal(samba);
    if !zoo.house_animal(savannah, samba_id)? {
        tracing::warn!("Samba could not be housed in the savannah enclosure");
    }
    zoo.assign(bob_id, samba_id.into())?;
    zoo.perform_task(bob_id, "health check", &mut decisions)?;

    println!("Animals under treatment:");
    for animal in zoo.animals_under_treatment() {
        println!("- {}", animal.name());
    }
    for record in zoo.health_records_for_animal(samba_id)? {
        println!("{}\n", record);
    }

    zoo.perform_task(bob_id, "heal", &mut decisions)?;
    for record in zoo.health_records_for_animal(samba_id)? {
        println!("{}\n", record);
    }

    zoo.remove_animal(samba_id)?;
    zoo.remove_staff(alice_id)?;

    let snapshot = zoo.snapshot();
    println!("{}", snapshot.to_json().context("Failed to export snapshot")?);
    Ok(())
}

fn load_rules(path: Option<String>) -> Result<HusbandryRules> {
    let mut rules = match path {
        Some(path) => HusbandryRules::load(&path)
            .with_context(|| format!("Failed to load rules from {}", path))?,
        None => HusbandryRules::default(),
    };
    rules
        .apply_env_overrides()
        .context("Invalid ZOO_* environment override")?;
    Ok(rules)
}
