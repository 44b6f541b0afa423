use std::fs;
use std::path::Path;

use crate::catalog::FoodCatalog;
use crate::error::Result;
use crate::models::FoodItem;

/// Load a catalog from a JSON array or a CSV file (chosen by extension).
///
/// Deduplicates by lowercase name (last occurrence wins).
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    let foods = if is_csv {
        read_csv(path)?
    } else {
        let content = fs::read_to_string(path)?;
        serde_json::from_str::<Vec<FoodItem>>(&content)?
    };

    tracing::debug!("loaded {} catalog rows from {}", foods.len(), path.display());
    Ok(FoodCatalog::new(foods))
}

fn read_csv(path: &Path) -> Result<Vec<FoodItem>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut foods = Vec::new();
    for row in reader.deserialize() {
        foods.push(row?);
    }
    Ok(foods)
}
