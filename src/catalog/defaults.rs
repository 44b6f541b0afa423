use crate::catalog::FoodCatalog;
use crate::models::FoodItem;

/// Built-in price list used when no catalog file is given.
pub fn default_catalog() -> FoodCatalog {
    let row = |name: &str, price: f64, portion: &str, cal: i64, p: f64, c: f64, f: f64| {
        FoodItem::new(name, price, portion, cal).with_macros(p, c, f)
    };

    FoodCatalog::new(vec![
        row("Apple", 2.50, "100g", 52, 0.3, 14.0, 0.2),
        row("Banana", 1.80, "100g", 89, 1.1, 22.8, 0.3),
        row("Grilled Chicken", 12.00, "100g", 165, 31.0, 0.0, 3.6),
        row("Brown Rice", 4.50, "100g", 111, 2.6, 23.0, 0.9),
        row("Boiled Egg", 0.80, "1 unit", 70, 6.3, 0.6, 4.8),
        row("Wholegrain Bread", 0.30, "1 slice", 80, 4.0, 14.0, 1.0),
        row("Cottage Cheese", 8.00, "100g", 100, 14.0, 3.0, 4.0),
        row("Plain Yogurt", 3.50, "100g", 59, 3.5, 4.0, 3.3),
        row("Oats", 5.00, "100g", 68, 2.4, 12.0, 1.4),
        row("Green Salad", 3.00, "100g", 15, 1.0, 3.0, 0.2),
        row("Salmon", 25.00, "100g", 200, 22.0, 0.0, 12.0),
        row("Sweet Potato", 3.50, "100g", 86, 1.6, 20.0, 0.1),
        row("Avocado", 4.00, "100g", 160, 2.0, 9.0, 15.0),
        row("Almonds", 15.00, "100g", 579, 21.0, 22.0, 50.0),
        row("Skimmed Milk", 2.00, "100ml", 34, 3.4, 5.0, 0.1),
    ])
}
