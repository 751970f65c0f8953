use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// A time slot of the day and the meals offered for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealCategory {
    pub name: String,
    #[serde(default)]
    pub meals: Vec<String>,
}

impl MealCategory {
    pub fn new(name: impl Into<String>, meals: Vec<String>) -> Self {
        Self {
            name: name.into(),
            meals,
        }
    }

    pub fn contains(&self, meal: &str) -> bool {
        self.meals.iter().any(|m| m == meal)
    }

    /// Append a meal unless it is already offered. Returns true if added.
    pub fn add_meal(&mut self, meal: &str) -> bool {
        if self.contains(meal) {
            return false;
        }
        self.meals.push(meal.to_string());
        true
    }
}

/// User-added meal names, keyed by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomMeals {
    by_category: BTreeMap<String, Vec<String>>,
}

impl CustomMeals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a custom meal. Returns false if it was already recorded.
    pub fn add(&mut self, category: &str, meal: &str) -> bool {
        let meals = self.by_category.entry(category.to_string()).or_default();
        if meals.iter().any(|m| m == meal) {
            return false;
        }
        meals.push(meal.to_string());
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.by_category.iter()
    }

    pub fn len(&self) -> usize {
        self.by_category.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ordered categories, in catalog declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    categories: Vec<MealCategory>,
}

impl Menu {
    pub fn new(categories: Vec<MealCategory>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[MealCategory] {
        &self.categories
    }

    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&MealCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Resolve user input to a category (case-insensitive, prefix allowed).
    pub fn find(&self, input: &str) -> Result<&MealCategory> {
        let wanted = input.trim().to_lowercase();
        if let Some(exact) = self
            .categories
            .iter()
            .find(|c| c.name.to_lowercase() == wanted)
        {
            return Ok(exact);
        }

        let prefixed: Vec<&MealCategory> = self
            .categories
            .iter()
            .filter(|c| !wanted.is_empty() && c.name.to_lowercase().starts_with(&wanted))
            .collect();

        match prefixed.as_slice() {
            [only] => Ok(*only),
            [] => Err(PlannerError::UnknownCategory(input.to_string())),
            many => Err(PlannerError::AmbiguousCategory {
                input: input.to_string(),
                candidates: many.iter().map(|c| c.name.clone()).collect(),
            }),
        }
    }

    /// Union custom meals into their categories, keeping base order first.
    ///
    /// Categories unknown to the menu are ignored.
    pub fn merge_custom(&mut self, custom: &CustomMeals) -> usize {
        let mut added = 0;
        for (name, meals) in custom.iter() {
            if let Some(category) = self.categories.iter_mut().find(|c| &c.name == name) {
                for meal in meals {
                    if category.add_meal(meal) {
                        added += 1;
                    }
                }
            }
        }
        added
    }
}
