pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;
pub mod telemetry;

pub use catalog::Catalog;
pub use error::{PlannerError, Result};
pub use models::{DaySelection, MealDefinition, WeekPlan, Weekday};
pub use planner::{ShoppingList, aggregate};
pub use state::PlannerSession;
