use crate::models::FoodItem;
use crate::planner::constants::{CHEAPEST_FALLBACK_COUNT, ITEMS_PER_MEAL_HEADROOM};

/// Highest per-item price admissible for a slot.
#[inline]
pub fn affordability_threshold(daily_budget: f64, slot_ratio: f64) -> f64 {
    daily_budget * slot_ratio / ITEMS_PER_MEAL_HEADROOM
}

/// The `count` lowest-priced items. Ties keep catalog order.
pub fn cheapest_items(catalog: &[FoodItem], count: usize) -> Vec<&FoodItem> {
    let mut sorted: Vec<&FoodItem> = catalog.iter().collect();
    // sort_by is stable, so equal prices stay in catalog order
    sorted.sort_by(|a, b| {
        a.unit_price
            .partial_cmp(&b.unit_price)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(count);
    sorted
}

/// Items affordable within a slot's share of the daily budget.
///
/// Falls back to the globally cheapest items when nothing is affordable, so a
/// slot is never starved at this stage.
pub fn affordable_items(catalog: &[FoodItem], daily_budget: f64, slot_ratio: f64) -> Vec<&FoodItem> {
    let threshold = affordability_threshold(daily_budget, slot_ratio);
    let affordable: Vec<&FoodItem> = catalog
        .iter()
        .filter(|f| f.unit_price <= threshold)
        .collect();

    if !affordable.is_empty() {
        tracing::debug!(
            "{} of {} items within {:.2} per item",
            affordable.len(),
            catalog.len(),
            threshold
        );
        return affordable;
    }

    let fallback = cheapest_items(catalog, CHEAPEST_FALLBACK_COUNT);
    tracing::debug!(
        "nothing under {:.2} per item, using {} cheapest",
        threshold,
        fallback.len()
    );
    fallback
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: f64) -> FoodItem {
        FoodItem::new(name, price, "100g", 100).with_macros(1.0, 1.0, 1.0)
    }

    fn names(items: &[&FoodItem]) -> Vec<String> {
        items.iter().map(|f| f.name.clone()).collect()
    }

    #[test]
    fn test_threshold() {
        assert_eq!(affordability_threshold(12.0, 0.25), 1.0);
    }

    #[test]
    fn test_filters_by_threshold_inclusive() {
        let catalog = vec![item("A", 1.0), item("B", 1.01), item("C", 0.2)];
        let result = affordable_items(&catalog, 12.0, 0.25);
        assert_eq!(names(&result), vec!["A", "C"]);
    }

    #[test]
    fn test_fallback_returns_five_cheapest() {
        let catalog = vec![
            item("A", 9.0),
            item("B", 3.0),
            item("C", 7.0),
            item("D", 2.0),
            item("E", 8.0),
            item("F", 5.0),
            item("G", 4.0),
        ];
        let result = affordable_items(&catalog, 1.0, 0.15);
        assert_eq!(names(&result), vec!["D", "B", "G", "F", "C"]);
    }

    #[test]
    fn test_fallback_ties_keep_catalog_order() {
        let catalog = vec![
            item("A", 5.0),
            item("B", 5.0),
            item("C", 5.0),
            item("D", 5.0),
            item("E", 5.0),
            item("F", 5.0),
        ];
        let result = affordable_items(&catalog, 1.0, 0.25);
        assert_eq!(names(&result), vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_small_catalog_fallback_returns_all() {
        let catalog = vec![item("A", 50.0), item("B", 40.0)];
        let result = affordable_items(&catalog, 1.0, 0.25);
        assert_eq!(names(&result), vec!["B", "A"]);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(affordable_items(&[], 10.0, 0.25).is_empty());
        assert!(affordable_items(&[], 0.0, 0.25).is_empty());
    }
}
