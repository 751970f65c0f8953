pub mod prompts;
pub mod render;

pub use prompts::{prompt_day_selection, prompt_meal_choice, prompt_people, prompt_yes_no};
pub use render::{
    display_day, display_menu, display_shopping_list, display_week_plan, hydration_bar,
};
