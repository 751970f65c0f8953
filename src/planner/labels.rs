//! Display labels for meals: `"<name> (~<calories> kcal)"`.
//!
//! Decoding strips any trailing calorie annotation, so a meal whose own name
//! ends in something like `" (~100 kcal)"` cannot be told apart from an
//! annotated label and loses that suffix on decode.

use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::Catalog;

static ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s\(~\d+\s+kcal\)$").expect("calorie annotation pattern is valid")
});

/// Append the calorie annotation for catalog meals; other names pass through.
pub fn encode(catalog: &Catalog, meal_name: &str) -> String {
    match catalog.calories(meal_name) {
        Some(calories) => format!("{} (~{} kcal)", meal_name, calories),
        None => meal_name.to_string(),
    }
}

/// Strip a trailing calorie annotation if present.
pub fn decode(label: &str) -> &str {
    match ANNOTATION.find(label) {
        Some(m) => &label[..m.start()],
        None => label,
    }
}

/// True if `decode` would alter this name.
pub fn is_ambiguous(name: &str) -> bool {
    ANNOTATION.is_match(name)
}
