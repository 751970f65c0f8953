use crate::models::{HydrationGoal, Weekday};
use crate::planner::{ShoppingList, labels};
use crate::state::PlannerSession;

/// Text bar with one cell per glass, e.g. `[■■■□□□□□]`.
pub fn hydration_bar(glasses: u32, goal: &HydrationGoal) -> String {
    let total = goal.glasses();
    let filled = glasses.min(total) as usize;
    format!(
        "[{}{}]",
        "■".repeat(filled),
        "□".repeat(total as usize - filled)
    )
}

/// Display one day's selections, calorie estimate and hydration.
pub fn display_day(session: &PlannerSession, day: Weekday, today: Weekday) {
    let marker = if day == today { "  (today)" } else { "" };
    println!("=== {}{} ===", day, marker);

    let width = session
        .menu()
        .categories()
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(10);

    for category in session.menu().categories() {
        let cell = session.plan().selection(day, &category.name);
        let text = match cell.meal_name() {
            Some(meal) => {
                let label = labels::encode(session.catalog(), meal);
                if cell.people > 1 {
                    format!("{}  x{}", label, cell.people)
                } else {
                    label
                }
            }
            None => "-".to_string(),
        };
        println!("  {:<width$} : {}", category.name, text, width = width);
    }

    let goal = session.hydration_goal();
    let glasses = session.journal().glasses(day);
    println!("  ~{} kcal", session.day_calories(day));
    println!(
        "  Water {} {:.2} / {:.2} L ({:.0}%)",
        hydration_bar(glasses, goal),
        goal.liters(glasses),
        goal.goal_liters(),
        goal.progress(glasses) * 100.0
    );
    println!();
}

/// Display the whole week.
pub fn display_week_plan(session: &PlannerSession, today: Weekday) {
    println!();
    for day in Weekday::ALL {
        display_day(session, day, today);
    }
}

/// Display categories and the meals offered in each.
pub fn display_menu(session: &PlannerSession, only: Option<&str>) {
    for category in session.menu().categories() {
        if only.is_some_and(|name| name != category.name) {
            continue;
        }
        println!("{} ({} meals)", category.name, category.meals.len());
        for meal in &category.meals {
            let custom = if session.catalog().contains(meal) {
                ""
            } else {
                "  [custom]"
            };
            println!("  {}{}", labels::encode(session.catalog(), meal), custom);
        }
        println!();
    }
}

/// Display the shopping list as a checklist.
pub fn display_shopping_list(list: &ShoppingList) {
    println!();
    println!("=== Shopping List ===");
    println!();

    if list.is_empty() {
        println!("The shopping list is empty.");
        println!("Either nothing is selected or every ingredient was filtered out");
        println!("(canteen items, rice, beans).");
        println!();
        return;
    }

    for item in list.items() {
        println!("  [ ] {}", item.describe());
    }

    if !list.conflicts().is_empty() {
        println!();
        println!("Unit labels differ between meals (last one shown):");
        for conflict in list.conflicts() {
            println!(
                "  {}: '{}' then '{}'",
                conflict.ingredient, conflict.previous, conflict.current
            );
        }
    }

    println!();
    println!("Total items: {}", list.len());
    println!();
}
