use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::{Menu, WeekPlan, Weekday};

/// Fill every empty cell of the given days with a random meal of its category.
///
/// Cells that already hold a meal keep it, along with their party size.
/// Returns the number of cells filled.
pub fn fill_empty(plan: &mut WeekPlan, menu: &Menu, days: &[Weekday], rng: &mut impl Rng) -> usize {
    let mut filled = 0;
    for &day in days {
        for category in menu.categories() {
            if !plan.selection(day, &category.name).is_empty() {
                continue;
            }
            if let Some(meal) = category.meals.choose(rng) {
                plan.selection_mut(day, &category.name).meal = meal.clone();
                filled += 1;
            }
        }
    }
    filled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealCategory;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_menu() -> Menu {
        Menu::new(vec![
            MealCategory::new("Breakfast", vec!["Toast".to_string(), "Wrap".to_string()]),
            MealCategory::new("Lunch", vec!["Soup".to_string()]),
            MealCategory::new("Extra", vec![]),
        ])
    }

    #[test]
    fn test_fill_keeps_existing_choices() {
        let menu = sample_menu();
        let mut plan = WeekPlan::new();
        plan.set(Weekday::Monday, "Lunch", "Lasagna", 4).unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        let filled = fill_empty(&mut plan, &menu, &Weekday::ALL, &mut rng);

        // 7 breakfasts + 6 lunches; the empty category stays empty
        assert_eq!(filled, 13);
        let monday = plan.selection(Weekday::Monday, "Lunch");
        assert_eq!(monday.meal, "Lasagna");
        assert_eq!(monday.people, 4);
        assert!(plan.selection(Weekday::Tuesday, "Extra").is_empty());
    }

    #[test]
    fn test_fill_picks_from_category() {
        let menu = sample_menu();
        let mut plan = WeekPlan::new();
        let mut rng = StdRng::seed_from_u64(42);
        fill_empty(&mut plan, &menu, &[Weekday::Friday], &mut rng);

        let breakfast = plan.selection(Weekday::Friday, "Breakfast");
        assert!(["Toast", "Wrap"].contains(&breakfast.meal.as_str()));
        assert_eq!(plan.selection(Weekday::Friday, "Lunch").meal, "Soup");
        assert!(plan.selection(Weekday::Saturday, "Lunch").is_empty());
    }

    #[test]
    fn test_fill_is_reproducible_with_seed() {
        let menu = sample_menu();
        let mut a = WeekPlan::new();
        let mut b = WeekPlan::new();
        fill_empty(&mut a, &menu, &Weekday::ALL, &mut StdRng::seed_from_u64(1));
        fill_empty(&mut b, &menu, &Weekday::ALL, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }
}
