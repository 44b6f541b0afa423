use std::collections::HashMap;

use crate::models::FoodItem;

/// Maximum matches returned for a non-empty search.
pub const SEARCH_LIMIT: usize = 10;
/// Number of items listed when browsing without a query.
pub const BROWSE_LIMIT: usize = 20;

/// Read-only, ordered food catalog.
///
/// Order matters: it decides ties among equally priced items.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    items: Vec<FoodItem>,
}

impl FoodCatalog {
    /// Build a catalog. Duplicate names (case-insensitive) keep the first
    /// position and the last row's values.
    pub fn new(foods: Vec<FoodItem>) -> Self {
        let mut items: Vec<FoodItem> = Vec::with_capacity(foods.len());
        let mut index: HashMap<String, usize> = HashMap::new();
        for food in foods {
            let key = food.key();
            match index.get(&key).copied() {
                Some(pos) => items[pos] = food,
                None => {
                    index.insert(key, items.len());
                    items.push(food);
                }
            }
        }
        Self { items }
    }

    /// Items whose name contains `query` (case-insensitive), in catalog order.
    ///
    /// A blank query matches everything.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&FoodItem> {
        let needle = query.trim().to_lowercase();
        self.items
            .iter()
            .filter(|f| needle.is_empty() || f.key().contains(&needle))
            .take(limit)
            .collect()
    }

    /// Search with the default limits: `SEARCH_LIMIT` matches for a query,
    /// the first `BROWSE_LIMIT` items when the query is blank.
    pub fn lookup(&self, query: &str) -> Vec<&FoodItem> {
        let limit = if query.trim().is_empty() {
            BROWSE_LIMIT
        } else {
            SEARCH_LIMIT
        };
        self.search(query, limit)
    }

    /// Items in catalog order.
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_foods() -> Vec<FoodItem> {
        vec![
            FoodItem::new("Apple", 2.5, "100g", 52).with_macros(0.3, 14.0, 0.2),
            FoodItem::new("Water", 0.5, "500ml", 0),
            FoodItem::new("Bread", 0.3, "1 slice", 80).with_macros(4.0, 14.0, 1.0),
            FoodItem::new("Pineapple", 3.0, "100g", 50).with_macros(0.5, 13.0, 0.1),
        ]
    }

    fn names<'a>(items: &[&'a FoodItem]) -> Vec<&'a str> {
        items.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_duplicates_keep_position_last_value_wins() {
        let mut foods = sample_foods();
        foods.push(FoodItem::new("APPLE", 1.0, "1 unit", 60));
        let catalog = FoodCatalog::new(foods);

        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.items()[0].name, "APPLE");
        assert_eq!(catalog.items()[0].unit_price, 1.0);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let catalog = FoodCatalog::new(sample_foods());
        assert_eq!(names(&catalog.search("APPLE", 10)), vec!["Apple", "Pineapple"]);
        assert_eq!(names(&catalog.search(" rea ", 10)), vec!["Bread"]);
        assert!(catalog.search("caviar", 10).is_empty());
    }

    #[test]
    fn test_search_respects_limit() {
        let catalog = FoodCatalog::new(sample_foods());
        assert_eq!(names(&catalog.search("apple", 1)), vec!["Apple"]);
        assert!(catalog.search("apple", 0).is_empty());
    }

    #[test]
    fn test_lookup_default_limits() {
        let foods: Vec<FoodItem> = (0..30)
            .map(|i| FoodItem::new(&format!("Item{:02}", i), 1.0, "100g", 10))
            .collect();
        let catalog = FoodCatalog::new(foods);

        let browse = catalog.lookup("");
        assert_eq!(browse.len(), BROWSE_LIMIT);
        assert_eq!(browse[0].name, "Item00");
        assert_eq!(browse[19].name, "Item19");

        assert_eq!(catalog.lookup("item").len(), SEARCH_LIMIT);

        let twenties = catalog.lookup("item2");
        assert_eq!(twenties.len(), 10);
        assert!(twenties.iter().all(|f| f.name.starts_with("Item2")));
    }
}
