use rand::Rng;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{PlannerError, Result};
use crate::models::{CustomMeals, HydrationGoal, Journal, MealCategory, Menu, WeekPlan, Weekday};
use crate::planner::constants::NO_MEAL;
use crate::planner::{
    MealMatch, ShoppingList, ShoppingPolicy, aggregate_week, fill_empty, find_meal, labels,
    resolve_meal,
};
use crate::state::persistence::{self, StorePaths};

/// Everything one planning session works on.
///
/// Loaded once at start; nothing reaches disk until one of the `save_*`
/// methods is called.
pub struct PlannerSession {
    catalog: Catalog,
    menu: Menu,
    plan: WeekPlan,
    custom: CustomMeals,
    journal: Journal,
    paths: StorePaths,
    policy: ShoppingPolicy,
    hydration: HydrationGoal,
}

impl PlannerSession {
    /// Open a session as described by the configuration.
    pub fn open(config: &Config) -> Result<Self> {
        let catalog = match config.catalog_path() {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin()?,
        };
        let mut session = Self::load_with_goal(
            catalog,
            StorePaths::in_dir(config.data_dir()),
            config.hydration_goal(),
        )?;
        session.policy = config.shopping_policy();
        Ok(session)
    }

    /// Load persisted stores and merge custom meals into the catalog menu.
    pub fn load(catalog: Catalog, paths: StorePaths) -> Result<Self> {
        Self::load_with_goal(catalog, paths, HydrationGoal::default())
    }

    /// Like `load`, clamping stored water counts to the given goal.
    pub fn load_with_goal(
        catalog: Catalog,
        paths: StorePaths,
        hydration: HydrationGoal,
    ) -> Result<Self> {
        let plan = persistence::load_plan(&paths.selections)?;
        let custom = persistence::load_custom_meals(&paths.custom_meals)?;
        let mut journal = persistence::load_journal(&paths.journal)?;
        let repaired = journal.normalize(&hydration);
        if repaired > 0 {
            warn!(days = repaired, "water counts above the goal were clamped");
        }

        let mut menu = catalog.menu();
        let merged = menu.merge_custom(&custom);

        let mut session = Self {
            catalog,
            menu,
            plan,
            custom,
            journal,
            paths,
            policy: ShoppingPolicy::default(),
            hydration,
        };
        session.plan.ensure_categories(&session.menu.names());

        debug!(
            meals = session.catalog.len(),
            custom = merged,
            selected = session.plan.selected_count(),
            "session loaded"
        );
        Ok(session)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn plan(&self) -> &WeekPlan {
        &self.plan
    }

    pub fn custom_meals(&self) -> &CustomMeals {
        &self.custom
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }

    pub fn policy(&self) -> &ShoppingPolicy {
        &self.policy
    }

    pub fn set_policy(&mut self, policy: ShoppingPolicy) {
        self.policy = policy;
    }

    pub fn hydration_goal(&self) -> &HydrationGoal {
        &self.hydration
    }

    pub fn category(&self, input: &str) -> Result<&MealCategory> {
        self.menu.find(input)
    }

    /// Choose a meal for a cell. Returns the resolved category and meal names.
    ///
    /// With `custom`, a name without an exact match in the category is
    /// registered as a custom meal instead of being fuzzy-matched.
    pub fn set_meal(
        &mut self,
        day: Weekday,
        category: &str,
        meal: &str,
        people: u32,
        custom: bool,
    ) -> Result<(String, String)> {
        let category = self.menu.find(category)?.clone();
        let resolved = if custom {
            match find_meal(&category, meal) {
                MealMatch::Exact(name) => name,
                _ => {
                    self.add_custom_meal(&category.name, meal)?;
                    meal.trim().to_string()
                }
            }
        } else {
            resolve_meal(&category, meal)?
        };

        self.plan.set(day, &category.name, &resolved, people)?;
        debug!(%day, category = %category.name, meal = %resolved, people, "selection set");
        Ok((category.name, resolved))
    }

    /// Reset cells to no meal. `None` for the day means the whole week.
    pub fn clear(&mut self, day: Option<Weekday>, category: Option<&str>) -> Result<()> {
        let category = match category {
            Some(input) => Some(self.menu.find(input)?.name.clone()),
            None => None,
        };
        match (day, category) {
            (Some(day), Some(category)) => self.plan.clear_cell(day, &category),
            (Some(day), None) => self.plan.clear_day(day),
            (None, Some(category)) => {
                for day in Weekday::ALL {
                    self.plan.clear_cell(day, &category);
                }
            }
            (None, None) => self.plan.clear_all(),
        }
        Ok(())
    }

    /// Offer a new meal in a category. Returns false if it was already offered.
    pub fn add_custom_meal(&mut self, category: &str, meal: &str) -> Result<bool> {
        let meal = meal.trim();
        if meal.is_empty() || meal.eq_ignore_ascii_case(NO_MEAL) {
            return Err(PlannerError::InvalidInput(format!(
                "'{}' cannot be used as a meal name",
                meal
            )));
        }
        if labels::is_ambiguous(meal) {
            return Err(PlannerError::InvalidInput(format!(
                "'{}' ends like a calorie label; rename it",
                meal
            )));
        }

        let offered = self.menu.find(category)?;
        if offered.contains(meal) {
            return Ok(false);
        }
        let name = offered.name.clone();

        self.custom.add(&name, meal);
        self.menu.merge_custom(&self.custom);
        info!(category = %name, meal, "custom meal added");
        Ok(true)
    }

    /// Fill empty cells with random meals of their category.
    pub fn fill(&mut self, days: &[Weekday], rng: &mut impl Rng) -> usize {
        fill_empty(&mut self.plan, &self.menu, days, rng)
    }

    /// Recompute the week's shopping list with the session policy.
    pub fn shopping_list(&self) -> ShoppingList {
        self.shopping_list_with(&self.policy)
    }

    pub fn shopping_list_with(&self, policy: &ShoppingPolicy) -> ShoppingList {
        aggregate_week(&self.plan, &self.catalog, &self.menu.names(), policy)
    }

    /// Estimated calories for a day, scaled by party size.
    pub fn day_calories(&self, day: Weekday) -> u64 {
        self.menu
            .categories()
            .iter()
            .filter_map(|category| {
                let cell = self.plan.get(day, &category.name)?;
                let meal = self.catalog.get(cell.meal_name()?)?;
                Some(meal.calories_for(cell.people))
            })
            .sum()
    }

    pub fn set_glasses(&mut self, day: Weekday, glasses: u32) -> u32 {
        self.journal.set_glasses(day, glasses, &self.hydration)
    }

    pub fn add_glasses(&mut self, day: Weekday, delta: i32) -> u32 {
        self.journal.add_glasses(day, delta, &self.hydration)
    }

    pub fn set_notes(&mut self, notes: &str) {
        self.journal.notes = notes.to_string();
    }

    pub fn save_plan(&self) -> Result<()> {
        persistence::save_plan(&self.paths.selections, &self.plan)
    }

    pub fn save_custom_meals(&self) -> Result<()> {
        persistence::save_custom_meals(&self.paths.custom_meals, &self.custom)
    }

    pub fn save_journal(&self) -> Result<()> {
        persistence::save_journal(&self.paths.journal, &self.journal)
    }
}
