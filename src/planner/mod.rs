pub mod aggregate;
pub mod constants;
pub mod exclusion;
pub mod fill;
pub mod labels;
pub mod lookup;
pub mod quantity;

pub use aggregate::{
    ShoppingItem, ShoppingList, ShoppingPolicy, UncatalogedPolicy, UnitConflict, aggregate,
    aggregate_week,
};
pub use constants::*;
pub use exclusion::{ExclusionFilter, is_excluded};
pub use fill::fill_empty;
pub use lookup::{MealMatch, find_meal, resolve_meal};
pub use quantity::format_quantity;
