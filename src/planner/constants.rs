/// Sentinel stored in a cell with no meal selected.
pub const NO_MEAL: &str = "None";

/// Party size of a fresh cell.
pub const DEFAULT_PEOPLE: u32 = 1;

// ─────────────────────────────────────────────────────────────────────────────
// Shopping list
// ─────────────────────────────────────────────────────────────────────────────

/// Suffix of the synthetic ingredient standing in for an uncataloged meal.
pub const CUSTOM_SUFFIX: &str = " (custom)";

/// Unit of the synthetic uncataloged-meal ingredient.
pub const CUSTOM_UNIT: &str = "unit(s)";

/// Unit shown when an ingredient somehow has none recorded.
pub const FALLBACK_UNIT: &str = "unit(s)";

/// Terms that keep an ingredient off the purchase list: canteen items,
/// staples always at home and trace amounts.
pub const DEFAULT_EXCLUSIONS: [&str; 4] = ["rice", "bean", "(canteen)", "pinch"];

// ─────────────────────────────────────────────────────────────────────────────
// Meal lookup
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum Jaro-Winkler score for a fuzzy candidate.
pub const FUZZY_THRESHOLD: f64 = 0.7;

/// Score needed to accept a single fuzzy hit without asking.
pub const FUZZY_ACCEPT: f64 = 0.9;

/// Maximum candidates offered for an ambiguous name.
pub const MAX_SUGGESTIONS: usize = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Hydration and export
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_GLASS_ML: u32 = 250;
pub const DEFAULT_HYDRATION_GOAL_ML: u32 = 2000;

/// Ingredient rows per page of the paginated shopping list.
pub const DEFAULT_ROWS_PER_PAGE: usize = 40;

pub const SHOPPING_LIST_TITLE: &str = "Weekly Shopping List";
pub const PLAN_TITLE: &str = "Weekly Meal Plan";
pub const NOT_FILLED_IN: &str = "Not filled in";
