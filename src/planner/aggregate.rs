use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::models::{DaySelection, WeekPlan, Weekday};
use crate::planner::constants::{CUSTOM_SUFFIX, CUSTOM_UNIT, FALLBACK_UNIT};
use crate::planner::exclusion::ExclusionFilter;
use crate::planner::quantity::format_quantity;

/// What to do with a selected meal that has no catalog entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UncatalogedPolicy {
    /// Add one `"<meal> (custom)"` item per person.
    #[default]
    Placeholder,
    /// Leave the meal off the list.
    Skip,
}

/// Everything besides the plan and catalog that shapes a shopping list.
#[derive(Debug, Clone)]
pub struct ShoppingPolicy {
    pub exclusions: ExclusionFilter,
    pub uncataloged: UncatalogedPolicy,
}

impl Default for ShoppingPolicy {
    fn default() -> Self {
        Self {
            exclusions: ExclusionFilter::defaults(),
            uncataloged: UncatalogedPolicy::default(),
        }
    }
}

/// The same ingredient name seen with two different unit labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitConflict {
    pub ingredient: String,
    pub previous: String,
    pub current: String,
}

/// One consolidated line of the shopping list.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingItem<'a> {
    pub name: &'a str,
    pub quantity: f64,
    pub unit: &'a str,
}

impl ShoppingItem<'_> {
    /// `"<quantity> <unit> of <ingredient>"`.
    pub fn describe(&self) -> String {
        format!(
            "{} {} of {}",
            format_quantity(self.quantity),
            self.unit,
            self.name
        )
    }
}

/// Ingredient totals for a week, recomputed from scratch on every request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingList {
    totals: BTreeMap<String, f64>,
    units: BTreeMap<String, String>,
    conflicts: Vec<UnitConflict>,
}

impl ShoppingList {
    fn add(&mut self, name: &str, quantity: f64, unit: &str) {
        *self.totals.entry(name.to_string()).or_insert(0.0) += quantity;

        // Last unit wins; a changed label is remembered for the user.
        if let Some(previous) = self.units.insert(name.to_string(), unit.to_string()) {
            if previous != unit {
                warn!(
                    ingredient = %name,
                    previous = %previous,
                    current = %unit,
                    "unit label changed between meals"
                );
                self.conflicts.push(UnitConflict {
                    ingredient: name.to_string(),
                    previous,
                    current: unit.to_string(),
                });
            }
        }
    }

    pub fn quantity(&self, name: &str) -> Option<f64> {
        self.totals.get(name).copied()
    }

    pub fn unit(&self, name: &str) -> Option<&str> {
        self.units.get(name).map(String::as_str)
    }

    /// Items sorted by ingredient name.
    pub fn items(&self) -> impl Iterator<Item = ShoppingItem<'_>> {
        self.totals.iter().map(|(name, &quantity)| ShoppingItem {
            name,
            quantity,
            unit: self
                .units
                .get(name)
                .map(String::as_str)
                .unwrap_or(FALLBACK_UNIT),
        })
    }

    pub fn conflicts(&self) -> &[UnitConflict] {
        &self.conflicts
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// Walk every (day, category) cell and consolidate the ingredients to buy.
///
/// Catalog meals contribute each non-excluded ingredient scaled by the cell's
/// party size. Uncataloged meals follow `policy.uncataloged`. Totals do not
/// depend on iteration order; when units disagree the last cell visited
/// (days in the given order, then categories in the given order) decides.
pub fn aggregate<S: AsRef<str>>(
    plan: &WeekPlan,
    catalog: &Catalog,
    categories: &[S],
    days: &[Weekday],
    policy: &ShoppingPolicy,
) -> ShoppingList {
    let mut list = ShoppingList::default();
    let empty = DaySelection::default();
    let mut meals_seen = 0usize;

    for &day in days {
        for category in categories {
            let category = category.as_ref();
            let cell = plan.get(day, category).unwrap_or(&empty);
            let Some(meal) = cell.meal_name() else {
                continue;
            };
            let people = f64::from(cell.people.max(1));
            meals_seen += 1;

            match catalog.get(meal) {
                Some(definition) => {
                    for ingredient in &definition.ingredients {
                        if policy.exclusions.excludes(&ingredient.name, &ingredient.unit) {
                            continue;
                        }
                        list.add(ingredient.key(), ingredient.quantity * people, &ingredient.unit);
                    }
                }
                None => match policy.uncataloged {
                    UncatalogedPolicy::Placeholder => {
                        let name = format!("{}{}", meal, CUSTOM_SUFFIX);
                        if !policy.exclusions.excludes(&name, CUSTOM_UNIT) {
                            list.add(&name, people, CUSTOM_UNIT);
                        }
                    }
                    UncatalogedPolicy::Skip => {
                        debug!(%day, category, meal, "skipping uncataloged meal");
                    }
                },
            }
        }
    }

    debug!(
        meals = meals_seen,
        ingredients = list.len(),
        conflicts = list.conflicts.len(),
        "aggregated shopping list"
    );
    list
}

/// Aggregate the whole week, Monday through Sunday.
pub fn aggregate_week<S: AsRef<str>>(
    plan: &WeekPlan,
    catalog: &Catalog,
    categories: &[S],
    policy: &ShoppingPolicy,
) -> ShoppingList {
    aggregate(plan, catalog, categories, &Weekday::ALL, policy)
}
