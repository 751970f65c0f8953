use serde::{Deserialize, Serialize};

/// One ingredient line of a catalog meal.
///
/// The unit is an opaque label ("g", "slices (50g)", ...) and is never parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientSpec {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

impl IngredientSpec {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }

    /// Name used as the aggregation key.
    pub fn key(&self) -> &str {
        self.name.trim()
    }

    /// Quantities must be finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        !self.key().is_empty() && self.quantity.is_finite() && self.quantity > 0.0
    }
}

/// A catalog entry: a named meal with its calorie estimate and ingredients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealDefinition {
    pub name: String,
    pub calories: u32,
    #[serde(default)]
    pub ingredients: Vec<IngredientSpec>,
}

impl MealDefinition {
    pub fn new(name: impl Into<String>, calories: u32, ingredients: Vec<IngredientSpec>) -> Self {
        Self {
            name: name.into(),
            calories,
            ingredients,
        }
    }

    /// Calories for a whole party.
    #[inline]
    pub fn calories_for(&self, people: u32) -> u64 {
        u64::from(self.calories) * u64::from(people)
    }
}
