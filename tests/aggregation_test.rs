use assert_float_eq::*;

use meal_planner_rs::catalog::Catalog;
use meal_planner_rs::models::{
    IngredientSpec, MealCategory, MealDefinition, WeekPlan, Weekday,
};
use meal_planner_rs::planner::{
    ExclusionFilter, ShoppingPolicy, UncatalogedPolicy, aggregate, aggregate_week,
    format_quantity, is_excluded, labels,
};

fn catalog() -> Catalog {
    Catalog::builtin().unwrap()
}

fn keep_everything() -> ShoppingPolicy {
    ShoppingPolicy {
        exclusions: ExclusionFilter::none(),
        uncataloged: UncatalogedPolicy::Placeholder,
    }
}

#[test]
fn test_empty_plan_gives_empty_list() {
    let catalog = catalog();
    let menu = catalog.menu();
    let list = aggregate_week(
        &WeekPlan::new(),
        &catalog,
        &menu.names(),
        &ShoppingPolicy::default(),
    );
    assert!(list.is_empty());
    assert_eq!(list.items().count(), 0);
}

#[test]
fn test_monday_breakfast_wrap() {
    let catalog = catalog();
    let menu = catalog.menu();
    let mut plan = WeekPlan::new();
    plan.set(Weekday::Monday, "Breakfast", "Wrap with egg", 1)
        .unwrap();

    // None of the wrap's ingredients match the stock exclusions
    let list = aggregate_week(&plan, &catalog, &menu.names(), &ShoppingPolicy::default());

    assert_eq!(list.len(), 4);
    assert_float_absolute_eq!(list.quantity("Wholegrain wrap").unwrap(), 1.0, 1e-9);
    assert_float_absolute_eq!(list.quantity("Egg").unwrap(), 1.0, 1e-9);
    assert_float_absolute_eq!(list.quantity("Shredded chicken").unwrap(), 60.0, 1e-9);
    assert_float_absolute_eq!(list.quantity("Cheese").unwrap(), 1.0, 1e-9);
    assert_eq!(list.unit("Shredded chicken"), Some("g (optional)"));
}

#[test]
fn test_quantities_scale_with_people() {
    let catalog = catalog();
    let menu = catalog.menu();

    for people in 1..=6 {
        let mut plan = WeekPlan::new();
        plan.set(Weekday::Wednesday, "Dinner", "Vegetable soup with chicken", people)
            .unwrap();
        let list = aggregate_week(&plan, &catalog, &menu.names(), &keep_everything());

        let meal = catalog.get("Vegetable soup with chicken").unwrap();
        for ingredient in &meal.ingredients {
            assert_float_absolute_eq!(
                list.quantity(ingredient.key()).unwrap(),
                ingredient.quantity * f64::from(people),
                1e-9
            );
        }
    }
}

#[test]
fn test_two_days_sum_party_sizes() {
    let catalog = catalog();
    let menu = catalog.menu();
    let mut plan = WeekPlan::new();
    plan.set(Weekday::Monday, "Breakfast", "Wrap with egg", 2)
        .unwrap();
    plan.set(Weekday::Thursday, "Breakfast", "Wrap with egg", 3)
        .unwrap();

    let list = aggregate_week(&plan, &catalog, &menu.names(), &keep_everything());

    assert_float_absolute_eq!(list.quantity("Shredded chicken").unwrap(), 300.0, 1e-9);
    assert_float_absolute_eq!(list.quantity("Egg").unwrap(), 5.0, 1e-9);
}

#[test]
fn test_totals_do_not_depend_on_day_order() {
    let catalog = catalog();
    let menu = catalog.menu();
    let mut plan = WeekPlan::new();
    plan.set(Weekday::Monday, "Breakfast", "Wrap with egg", 2)
        .unwrap();
    plan.set(Weekday::Tuesday, "Morning snack", "Cheese with fruit", 1)
        .unwrap();
    plan.set(Weekday::Saturday, "Dinner", "Wholegrain sandwich with egg", 4)
        .unwrap();
    plan.set(Weekday::Sunday, "Lunch", "Lunch at the canteen", 2)
        .unwrap();

    let mut reversed = Weekday::ALL.to_vec();
    reversed.reverse();
    let policy = keep_everything();

    let forward = aggregate(&plan, &catalog, &menu.names(), &Weekday::ALL, &policy);
    let backward = aggregate(&plan, &catalog, &menu.names(), &reversed, &policy);

    let forward: Vec<(String, f64)> = forward
        .items()
        .map(|i| (i.name.to_string(), i.quantity))
        .collect();
    let backward: Vec<(String, f64)> = backward
        .items()
        .map(|i| (i.name.to_string(), i.quantity))
        .collect();

    assert_eq!(forward.len(), backward.len());
    for ((a_name, a_qty), (b_name, b_qty)) in forward.iter().zip(&backward) {
        assert_eq!(a_name, b_name);
        assert_float_absolute_eq!(*a_qty, *b_qty, 1e-9);
    }
}

#[test]
fn test_shared_ingredient_keeps_last_unit() {
    let catalog = catalog();
    let menu = catalog.menu();
    let mut plan = WeekPlan::new();
    plan.set(Weekday::Monday, "Breakfast", "Wrap with egg", 1)
        .unwrap();
    plan.set(Weekday::Monday, "Morning snack", "Cheese with fruit", 1)
        .unwrap();

    let list = aggregate_week(&plan, &catalog, &menu.names(), &keep_everything());

    // 1 slice plus 15 g, summed without conversion
    assert_float_absolute_eq!(list.quantity("Cheese").unwrap(), 16.0, 1e-9);
    assert_eq!(list.unit("Cheese"), Some("g (1 slice)"));
    assert_eq!(list.conflicts().len(), 1);
    assert_eq!(list.conflicts()[0].ingredient, "Cheese");
}

#[test]
fn test_stock_exclusions_drop_canteen_and_staples() {
    let catalog = catalog();
    let menu = catalog.menu();
    let mut plan = WeekPlan::new();
    plan.set(Weekday::Friday, "Lunch", "Lunch at the canteen", 1)
        .unwrap();
    plan.set(Weekday::Friday, "Dessert or extra", "Fake brigadeiro", 1)
        .unwrap();

    let list = aggregate_week(&plan, &catalog, &menu.names(), &ShoppingPolicy::default());

    assert!(list.items().all(|i| !i.name.contains("(canteen)")));
    assert!(list.quantity("Sweetener").is_none());
    assert!(!list.is_empty());
}

#[test]
fn test_uncataloged_meal_policies() {
    let catalog = catalog();
    let menu = catalog.menu();
    let mut plan = WeekPlan::new();
    plan.set(Weekday::Sunday, "Dinner", "Grandma's lasagna", 3)
        .unwrap();

    let list = aggregate_week(&plan, &catalog, &menu.names(), &keep_everything());
    assert_float_absolute_eq!(list.quantity("Grandma's lasagna (custom)").unwrap(), 3.0, 1e-9);
    assert_eq!(list.unit("Grandma's lasagna (custom)"), Some("unit(s)"));

    let skip = ShoppingPolicy {
        uncataloged: UncatalogedPolicy::Skip,
        ..keep_everything()
    };
    assert!(aggregate_week(&plan, &catalog, &menu.names(), &skip).is_empty());
}

#[test]
fn test_exclusion_examples() {
    let terms = ["rice", "bean"];
    assert!(is_excluded("White rice", "g", &terms));
    assert!(!is_excluded("Chicken", "g (portion)", &terms));
    assert!(is_excluded("Salt", "1 pinch", &["PINCH"]));
}

#[test]
fn test_format_quantity_table() {
    assert_eq!(format_quantity(1.0), "1");
    assert_eq!(format_quantity(1.5), "1.5");
    assert_eq!(format_quantity(0.5 + 0.5), "1");
    assert_eq!(format_quantity(2.333), "2.33");
    assert_eq!(format_quantity(0.9999999), "1");
}

#[test]
fn test_labels_round_trip() {
    let catalog = catalog();
    for meal in catalog.meals() {
        let label = labels::encode(&catalog, &meal.name);
        assert_eq!(label, format!("{} (~{} kcal)", meal.name, meal.calories));
        assert_eq!(labels::decode(&label), meal.name);
    }

    assert_eq!(labels::encode(&catalog, "Grandma's lasagna"), "Grandma's lasagna");
    assert_eq!(labels::decode("Grandma's lasagna"), "Grandma's lasagna");
}

#[test]
fn test_fractional_amounts_add_up_to_whole() {
    let meals = vec![
        MealDefinition::new("Porridge", 300, vec![IngredientSpec::new("Milk", 0.5, "l")]),
        MealDefinition::new("Shake", 200, vec![IngredientSpec::new("Milk", 0.3, "l")]),
        MealDefinition::new("Pudding", 250, vec![IngredientSpec::new("Milk", 0.2, "l")]),
    ];
    let categories = vec![
        MealCategory::new("Breakfast", vec!["Porridge".to_string()]),
        MealCategory::new("Snack", vec!["Shake".to_string()]),
        MealCategory::new("Dessert", vec!["Pudding".to_string()]),
    ];
    let catalog = Catalog::from_parts(categories, meals).unwrap();
    let menu = catalog.menu();

    let mut plan = WeekPlan::new();
    plan.set(Weekday::Monday, "Breakfast", "Porridge", 1).unwrap();
    plan.set(Weekday::Monday, "Snack", "Shake", 1).unwrap();
    plan.set(Weekday::Monday, "Dessert", "Pudding", 1).unwrap();

    let list = aggregate_week(&plan, &catalog, &menu.names(), &keep_everything());
    let total = list.quantity("Milk").unwrap();

    assert_float_absolute_eq!(total, 1.0, 1e-9);
    assert_eq!(format_quantity(total), "1");
    assert_eq!(list.items().next().unwrap().describe(), "1 l of Milk");
}
