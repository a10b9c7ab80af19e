use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

/// Minimum Jaro-Winkler similarity for a fuzzy catalog match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Maximum number of fuzzy candidates offered.
pub const MAX_FUZZY_CANDIDATES: usize = 5;

/// Reference nutrition for an ingredient, per 100 g.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogIngredient {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Calories")]
    pub calories_per_100g: f64,

    #[serde(rename = "Protein")]
    pub protein_per_100g: f64,

    #[serde(rename = "Carbs")]
    pub carbs_per_100g: f64,

    #[serde(rename = "Fat")]
    pub fat_per_100g: f64,

    /// Serving adopted when a line item has no quantity yet.
    #[serde(rename = "DefaultQuantity", default)]
    pub default_quantity_g: Option<f64>,
}

impl CatalogIngredient {
    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Result of looking a name up in the catalog.
#[derive(Debug)]
pub enum CatalogMatch<'a> {
    Exact(&'a CatalogIngredient),
    /// Candidates above the similarity threshold, best first.
    Fuzzy(Vec<(&'a CatalogIngredient, f64)>),
    None,
}

/// Ingredient catalog keyed by lowercase name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, CatalogIngredient>,
}

impl Catalog {
    /// Build a catalog. Duplicate names keep the last occurrence.
    pub fn new(entries: Vec<CatalogIngredient>) -> Self {
        let mut map = HashMap::new();
        for entry in entries {
            map.insert(entry.key(), entry);
        }
        Self { entries: map }
    }

    pub fn get(&self, name: &str) -> Option<&CatalogIngredient> {
        self.entries.get(&name.trim().to_lowercase())
    }

    /// Exact (case-insensitive) match first, then Jaro-Winkler candidates.
    pub fn lookup(&self, name: &str) -> CatalogMatch<'_> {
        if let Some(entry) = self.get(name) {
            return CatalogMatch::Exact(entry);
        }

        let needle = name.trim().to_lowercase();
        let mut candidates: Vec<(&CatalogIngredient, f64)> = self
            .entries
            .iter()
            .map(|(key, entry)| (entry, jaro_winkler(key, &needle)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        if candidates.is_empty() {
            return CatalogMatch::None;
        }

        candidates.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.name.cmp(&b.0.name))
        });
        candidates.truncate(MAX_FUZZY_CANDIDATES);
        CatalogMatch::Fuzzy(candidates)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
