use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::catalog::{Catalog, CatalogIngredient};
use crate::error::Result;

/// Load a JSON document (patient, plan, cart, settings).
pub fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let value = serde_json::from_str(&content)?;
    info!(path = %path.display(), "loaded document");
    Ok(value)
}

/// Save a JSON document, pretty-printed.
pub fn save_json<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    info!(path = %path.display(), "saved document");
    Ok(())
}

/// Load the ingredient catalog from CSV.
///
/// Deduplicates by lowercase name (last occurrence wins).
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;

    let mut entries = Vec::new();
    for record in reader.deserialize() {
        let entry: CatalogIngredient = record?;
        entries.push(entry);
    }

    let catalog = Catalog::new(entries);
    info!(path = %path.display(), entries = catalog.len(), "loaded ingredient catalog");
    Ok(catalog)
}
