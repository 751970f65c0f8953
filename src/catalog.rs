use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{PlannerError, Result};
use crate::models::{MealCategory, MealDefinition, Menu};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: Vec<MealCategory>,
    #[serde(default)]
    meals: Vec<MealDefinition>,
}

/// Read-only meal reference data: definitions plus the declared categories.
#[derive(Debug, Clone)]
pub struct Catalog {
    meals: Vec<MealDefinition>,
    /// Meal name -> position in `meals`.
    index: HashMap<String, usize>,
    categories: Vec<MealCategory>,
}

impl Catalog {
    /// The catalog bundled with the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Load a catalog from an external JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json(&content)?;
        debug!(
            path = %path.as_ref().display(),
            meals = catalog.len(),
            "loaded external catalog"
        );
        Ok(catalog)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Self::from_parts(file.categories, file.meals)
    }

    /// Build and validate a catalog.
    ///
    /// Meal names must be unique and every ingredient must have a positive
    /// quantity. Category entries without a definition are allowed and behave
    /// like uncataloged meals.
    pub fn from_parts(categories: Vec<MealCategory>, meals: Vec<MealDefinition>) -> Result<Self> {
        let mut index = HashMap::with_capacity(meals.len());
        for (i, meal) in meals.iter().enumerate() {
            if meal.name.trim().is_empty() {
                return Err(PlannerError::Catalog("meal with an empty name".to_string()));
            }
            if let Some(bad) = meal.ingredients.iter().find(|ing| !ing.is_valid()) {
                return Err(PlannerError::Catalog(format!(
                    "'{}' has an invalid ingredient '{}' ({})",
                    meal.name, bad.name, bad.quantity
                )));
            }
            if index.insert(meal.name.clone(), i).is_some() {
                return Err(PlannerError::Catalog(format!(
                    "duplicate meal '{}'",
                    meal.name
                )));
            }
        }

        let mut seen = Vec::with_capacity(categories.len());
        for category in &categories {
            if seen.contains(&category.name.as_str()) {
                return Err(PlannerError::Catalog(format!(
                    "duplicate category '{}'",
                    category.name
                )));
            }
            seen.push(category.name.as_str());

            for meal in category.meals.iter().filter(|m| !index.contains_key(*m)) {
                warn!(
                    category = %category.name,
                    meal = %meal,
                    "category lists a meal with no definition"
                );
            }
        }

        Ok(Self {
            meals,
            index,
            categories,
        })
    }

    pub fn get(&self, name: &str) -> Option<&MealDefinition> {
        self.index.get(name).map(|&i| &self.meals[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn calories(&self, name: &str) -> Option<u32> {
        self.get(name).map(|m| m.calories)
    }

    /// Meals in declaration order.
    pub fn meals(&self) -> &[MealDefinition] {
        &self.meals
    }

    pub fn categories(&self) -> &[MealCategory] {
        &self.categories
    }

    /// A fresh, customisable menu seeded from the declared categories.
    pub fn menu(&self) -> Menu {
        Menu::new(self.categories.clone())
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}
