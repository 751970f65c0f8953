pub mod persistence;
mod session;

pub use persistence::{
    StorePaths, load_custom_meals, load_journal, load_plan, save_custom_meals, save_journal,
    save_plan,
};
pub use session::PlannerSession;
