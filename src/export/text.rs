use chrono::NaiveDateTime;

use crate::catalog::Catalog;
use crate::models::{Menu, WeekPlan, Weekday};
use crate::planner::ShoppingList;
use crate::planner::constants::{NOT_FILLED_IN, PLAN_TITLE};
use crate::planner::labels;

/// One `"<quantity> <unit> of <ingredient>"` line per item, sorted by name.
pub fn shopping_list_text(list: &ShoppingList) -> String {
    let mut out = String::new();
    for item in list.items() {
        out.push_str(&item.describe());
        out.push('\n');
    }
    out
}

/// The whole week as a readable report, followed by the notes.
pub fn plan_report(
    plan: &WeekPlan,
    menu: &Menu,
    catalog: &Catalog,
    notes: &str,
    generated: NaiveDateTime,
) -> String {
    let mut report = format!(
        "{} - Generated on: {}\n",
        PLAN_TITLE,
        generated.format("%d/%m/%Y %H:%M")
    );
    report.push_str(&"=".repeat(50));
    report.push_str("\n\n");

    for day in Weekday::ALL {
        report.push_str(&day.name().to_uppercase());
        report.push('\n');
        report.push_str(&"-".repeat(20));
        report.push('\n');

        for category in menu.categories() {
            let cell = plan.selection(day, &category.name);
            let text = match cell.meal_name() {
                Some(meal) if cell.people > 1 => {
                    format!("{} for {} people", labels::encode(catalog, meal), cell.people)
                }
                Some(meal) => labels::encode(catalog, meal),
                None => NOT_FILLED_IN.to_string(),
            };
            report.push_str(&format!("  - {}: {}\n", category.name, text));
        }
        report.push('\n');
    }

    let notes = notes.trim();
    report.push_str("Notes:\n");
    report.push_str(if notes.is_empty() { "None" } else { notes });
    report.push('\n');
    report
}
