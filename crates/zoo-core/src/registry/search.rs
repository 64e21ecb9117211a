//! Lookups over the zoo's collections.
//!
//! Exact lookups are case-insensitive linear scans. [`Zoo::search_animals`]
//! adds a fuzzy name search for near misses ("Simbaa" finds "Simba").

use strsim::{jaro_winkler, normalized_levenshtein};

use super::Zoo;
use crate::models::{Animal, Enclosure, StaffId};
use crate::staff::Staff;

/// Minimum similarity for a fuzzy match to be returned.
const MIN_SIMILARITY: f64 = 0.75;

/// An animal found by [`Zoo::search_animals`].
#[derive(Debug, Clone, Copy)]
pub struct AnimalMatch<'a> {
    pub animal: &'a Animal,
    /// Similarity between the query and the animal's name (0.0 - 1.0)
    pub score: f64,
}

impl Zoo {
    /// First staff member with this name, ignoring case.
    pub fn find_staff_by_name(&self, name: &str) -> Option<&Staff> {
        let name = name.trim().to_lowercase();
        self.staff.iter().find(|s| s.name().to_lowercase() == name)
    }

    pub fn find_staff_by_id(&self, id: StaffId) -> Option<&Staff> {
        self.staff_member(id)
    }

    /// Every animal with this name, ignoring case.
    pub fn find_animal_by_name(&self, name: &str) -> Vec<&Animal> {
        let name = name.trim().to_lowercase();
        self.animals
            .iter()
            .filter(|a| a.name().to_lowercase() == name)
            .collect()
    }

    /// Every enclosure of this environment, ignoring case.
    pub fn find_enclosure_by_environment(&self, environment: &str) -> Vec<&Enclosure> {
        let environment = environment.trim().to_lowercase();
        self.enclosures
            .iter()
            .filter(|e| e.environment().as_str() == environment)
            .collect()
    }

    /// Animals whose names resemble `query`, best match first.
    ///
    /// Names containing the query score 1.0. Ties keep insertion order.
    pub fn search_animals(&self, query: &str, limit: usize) -> Vec<AnimalMatch<'_>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<AnimalMatch<'_>> = self
            .animals
            .iter()
            .map(|animal| AnimalMatch {
                animal,
                score: name_similarity(&query, &animal.name().to_lowercase()),
            })
            .filter(|m| m.score >= MIN_SIMILARITY)
            .collect();

        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        matches.truncate(limit);
        matches
    }
}

fn name_similarity(query: &str, name: &str) -> f64 {
    if name.contains(query) {
        return 1.0;
    }
    // Jaro-Winkler favours shared prefixes, Levenshtein overall edits
    jaro_winkler(query, name) * 0.6 + normalized_levenshtein(query, name) * 0.4
}
