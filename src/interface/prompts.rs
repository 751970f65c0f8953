use dialoguer::{Confirm, Input, Select};

use crate::error::{PlannerError, Result};
use crate::models::{MealCategory, Weekday};
use crate::planner::constants::NO_MEAL;
use crate::planner::{MealMatch, find_meal, labels};
use crate::state::PlannerSession;

/// Ask which of the close names the user meant.
///
/// Returns `None` when nothing matches or the user declines every candidate.
pub fn prompt_meal_choice(category: &MealCategory, input: &str) -> Result<Option<String>> {
    let candidates = match find_meal(category, input) {
        MealMatch::Exact(meal) => return Ok(Some(meal)),
        MealMatch::Fuzzy(candidates) => candidates,
        MealMatch::NoMatch => {
            println!("No meal in '{}' matches '{}'", category.name, input);
            return Ok(None);
        }
    };

    if candidates.len() == 1 {
        let meal = &candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", meal))
            .default(true)
            .interact()?;
        return Ok(confirm.then(|| meal.clone()));
    }

    let options: Vec<String> = candidates.into_iter().map(|(meal, _)| meal).collect();
    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    Ok(options.get(selection).cloned())
}

/// Prompt for how many people a meal is for.
pub fn prompt_people(meal: &str, current: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(format!("How many people for '{}'?", meal))
        .default(current.max(1).to_string())
        .interact_text()?;

    match input.trim().parse::<u32>() {
        Ok(people) if people >= 1 => Ok(people),
        _ => Err(PlannerError::InvalidInput(format!(
            "'{}' is not a number of people",
            input.trim()
        ))),
    }
}

/// Walk through every category of a day, choosing meal and party size.
///
/// Options are the category's meals as display labels, sorted, with the
/// no-meal choice first. Returns the number of cells that changed.
pub fn prompt_day_selection(session: &mut PlannerSession, day: Weekday) -> Result<usize> {
    println!();
    println!("=== {} ===", day);

    let categories: Vec<MealCategory> = session.menu().categories().to_vec();
    let mut changed = 0;

    for category in &categories {
        let mut meals = category.meals.clone();
        meals.sort();

        let mut options = vec![NO_MEAL.to_string()];
        options.extend(meals.iter().map(|m| labels::encode(session.catalog(), m)));

        let current = session.plan().selection(day, &category.name);
        let default = current
            .meal_name()
            .and_then(|name| meals.iter().position(|m| m == name))
            .map_or(0, |i| i + 1);

        let choice = Select::new()
            .with_prompt(category.name.as_str())
            .items(&options)
            .default(default)
            .interact()?;

        let (meal, people) = if choice == 0 {
            (NO_MEAL.to_string(), current.people)
        } else {
            let meal = meals[choice - 1].clone();
            let people = prompt_people(&meal, current.people)?;
            (meal, people)
        };

        if meal != current.meal || people != current.people {
            session.set_meal(day, &category.name, &meal, people, false)?;
            changed += 1;
        }
    }

    Ok(changed)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
