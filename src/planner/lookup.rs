use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::MealCategory;
use crate::planner::constants::{FUZZY_ACCEPT, FUZZY_THRESHOLD, MAX_SUGGESTIONS, NO_MEAL};
use crate::planner::labels;

/// Outcome of matching typed text against a category's meals.
#[derive(Debug, Clone, PartialEq)]
pub enum MealMatch {
    /// Case-insensitive exact hit (or the no-meal sentinel).
    Exact(String),
    /// Close names, best first.
    Fuzzy(Vec<(String, f64)>),
    NoMatch,
}

/// Match user input (plain name or display label) to a meal of the category.
pub fn find_meal(category: &MealCategory, input: &str) -> MealMatch {
    let name = labels::decode(input.trim()).trim();
    let wanted = name.to_lowercase();

    if wanted.is_empty() || wanted == NO_MEAL.to_lowercase() {
        return MealMatch::Exact(NO_MEAL.to_string());
    }

    if let Some(meal) = category.meals.iter().find(|m| m.to_lowercase() == wanted) {
        return MealMatch::Exact(meal.clone());
    }

    let mut candidates: Vec<(String, f64)> = category
        .meals
        .iter()
        .map(|m| (m.clone(), jaro_winkler(&m.to_lowercase(), &wanted)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    if candidates.is_empty() {
        return MealMatch::NoMatch;
    }

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.truncate(MAX_SUGGESTIONS);
    MealMatch::Fuzzy(candidates)
}

/// Resolve input without asking the user.
///
/// A fuzzy candidate is accepted only when it is the single very close one.
pub fn resolve_meal(category: &MealCategory, input: &str) -> Result<String> {
    match find_meal(category, input) {
        MealMatch::Exact(meal) => Ok(meal),
        MealMatch::Fuzzy(candidates) => {
            let close: Vec<&String> = candidates
                .iter()
                .filter(|(_, score)| *score >= FUZZY_ACCEPT)
                .map(|(meal, _)| meal)
                .collect();
            match close.as_slice() {
                [meal] => Ok((*meal).clone()),
                _ => Err(PlannerError::AmbiguousMeal {
                    input: input.to_string(),
                    candidates: candidates.iter().map(|(m, _)| m.clone()).collect(),
                }),
            }
        }
        MealMatch::NoMatch => Err(PlannerError::UnknownMeal {
            category: category.name.clone(),
            meal: input.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dinner() -> MealCategory {
        MealCategory::new(
            "Dinner",
            vec![
                "Vegetable soup with chicken".to_string(),
                "Wholegrain sandwich with egg".to_string(),
                "Lunchbox (protein, vegetables, carbs)".to_string(),
            ],
        )
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        assert_eq!(
            find_meal(&dinner(), "vegetable SOUP with chicken"),
            MealMatch::Exact("Vegetable soup with chicken".to_string())
        );
    }

    #[test]
    fn test_display_label_is_decoded() {
        assert_eq!(
            resolve_meal(&dinner(), "Wholegrain sandwich with egg (~310 kcal)").unwrap(),
            "Wholegrain sandwich with egg"
        );
    }

    #[test]
    fn test_none_resolves_to_sentinel() {
        assert_eq!(resolve_meal(&dinner(), "none").unwrap(), NO_MEAL);
        assert_eq!(resolve_meal(&dinner(), "  ").unwrap(), NO_MEAL);
    }

    #[test]
    fn test_close_typo_is_accepted() {
        assert_eq!(
            resolve_meal(&dinner(), "Vegetable soup with chiken").unwrap(),
            "Vegetable soup with chicken"
        );
    }

    #[test]
    fn test_unrelated_name_is_unknown() {
        assert!(matches!(
            resolve_meal(&dinner(), "Sushi"),
            Err(PlannerError::UnknownMeal { .. })
        ));
    }
}
