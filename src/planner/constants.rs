/// Days used to turn a monthly budget into a daily one.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Assumed upper bound on items per meal when pricing the affordability threshold.
pub const ITEMS_PER_MEAL_HEADROOM: f64 = 3.0;

/// Number of cheapest catalog items returned when nothing is affordable.
pub const CHEAPEST_FALLBACK_COUNT: usize = 5;

/// Maximum number of items placed into one meal.
pub const MAX_ITEMS_PER_MEAL: usize = 2;

/// Portion-size dampening applied to meal cost (not to macros).
pub const PORTION_COST_FACTOR: f64 = 0.7;

/// Number of catalog items quoted in the remote generation prompt.
pub const PROMPT_SAMPLE_SIZE: usize = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin–St Jeor coefficients
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_WEIGHT_COEF: f64 = 10.0;
pub const BMR_HEIGHT_COEF: f64 = 6.25;
pub const BMR_AGE_COEF: f64 = 5.0;
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Meal slots
// ─────────────────────────────────────────────────────────────────────────────

/// A named share of the day's calories and budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MealSlot {
    pub name: &'static str,
    pub ratio: f64,
}

/// Ordered meal slots. Ratios sum to 1.0.
pub const MEAL_SLOTS: [MealSlot; 4] = [
    MealSlot {
        name: "Breakfast",
        ratio: 0.25,
    },
    MealSlot {
        name: "Lunch",
        ratio: 0.35,
    },
    MealSlot {
        name: "Dinner",
        ratio: 0.25,
    },
    MealSlot {
        name: "Snack",
        ratio: 0.15,
    },
];
