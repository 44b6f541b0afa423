use serde::{Deserialize, Serialize};

/// A priced catalog entry.
///
/// Macro fields are optional; a missing value counts as zero when totals are summed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,

    /// Price per portion, in currency units.
    #[serde(rename = "average_price", alias = "unit_price")]
    pub unit_price: f64,

    #[serde(rename = "portion_size", default)]
    pub portion_size: String,

    #[serde(default)]
    pub calories: i64,

    #[serde(default)]
    pub protein: Option<f64>,

    #[serde(default)]
    pub carbs: Option<f64>,

    #[serde(default)]
    pub fat: Option<f64>,
}

impl FoodItem {
    pub fn new(name: &str, unit_price: f64, portion_size: &str, calories: i64) -> Self {
        Self {
            name: name.to_string(),
            unit_price,
            portion_size: portion_size.to_string(),
            calories,
            protein: None,
            carbs: None,
            fat: None,
        }
    }

    /// Builder-style helper for setting all three macros at once.
    pub fn with_macros(mut self, protein: f64, carbs: f64, fat: f64) -> Self {
        self.protein = Some(protein);
        self.carbs = Some(carbs);
        self.fat = Some(fat);
        self
    }

    /// True when at least one macro field is present.
    #[inline]
    pub fn has_macros(&self) -> bool {
        self.protein.is_some() || self.carbs.is_some() || self.fat.is_some()
    }

    #[inline]
    pub fn protein_or_zero(&self) -> f64 {
        self.protein.unwrap_or(0.0)
    }

    #[inline]
    pub fn carbs_or_zero(&self) -> f64 {
        self.carbs.unwrap_or(0.0)
    }

    #[inline]
    pub fn fat_or_zero(&self) -> f64 {
        self.fat.unwrap_or(0.0)
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} ({}): {:.2}/portion, {} cal, P:{} C:{} F:{}",
            self.name,
            self.portion_size,
            self.unit_price,
            self.calories,
            fmt_macro(self.protein),
            fmt_macro(self.carbs),
            fmt_macro(self.fat)
        )
    }
}

fn fmt_macro(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_macros() {
        let bare = FoodItem::new("Water", 0.5, "500ml", 0);
        assert!(!bare.has_macros());

        let mut partial = bare.clone();
        partial.fat = Some(0.0);
        assert!(partial.has_macros());
    }

    #[test]
    fn test_missing_macros_are_zero() {
        let mut food = FoodItem::new("Bread", 0.3, "1 slice", 80);
        food.protein = Some(4.0);
        assert_eq!(food.protein_or_zero(), 4.0);
        assert_eq!(food.carbs_or_zero(), 0.0);
        assert_eq!(food.fat_or_zero(), 0.0);
    }

    #[test]
    fn test_deserialize_catalog_row() {
        let json = r#"{"name": "Egg", "average_price": 0.8, "portion_size": "1 unit",
                       "calories": 70, "protein": 6.3, "carbs": null, "fat": 4.8}"#;
        let food: FoodItem = serde_json::from_str(json).unwrap();
        assert_eq!(food.name, "Egg");
        assert_eq!(food.unit_price, 0.8);
        assert_eq!(food.portion_size, "1 unit");
        assert_eq!(food.calories, 70);
        assert_eq!(food.carbs, None);
        assert_eq!(food.fat, Some(4.8));
    }
}
