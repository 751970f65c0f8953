pub mod category;
pub mod journal;
pub mod meal;
pub mod selection;

pub use category::{CustomMeals, MealCategory, Menu};
pub use journal::{HydrationGoal, Journal};
pub use meal::{IngredientSpec, MealDefinition};
pub use selection::{DaySelection, WeekPlan, Weekday};
