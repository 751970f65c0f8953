use std::io::IsTerminal;
use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use meal_planner_rs::cli::{Cli, Command, CustomAction, ExportKind, ListFilter};
use meal_planner_rs::config::Config;
use meal_planner_rs::error::{PlannerError, Result};
use meal_planner_rs::export::{
    plan_report, shopping_list_document, shopping_list_text, write_output, write_shopping_csv,
};
use meal_planner_rs::interface::{
    display_day, display_menu, display_shopping_list, display_week_plan, prompt_day_selection,
    prompt_meal_choice, prompt_yes_no,
};
use meal_planner_rs::models::Weekday;
use meal_planner_rs::state::PlannerSession;
use meal_planner_rs::telemetry::init_tracing;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.set_data_dir(dir);
    }

    let mut session = PlannerSession::open(&config)?;

    match cli.command.unwrap_or_default() {
        Command::Show => {
            display_week_plan(&session, Weekday::today());
            Ok(())
        }
        Command::Meals { category } => cmd_meals(&session, category.as_deref()),
        Command::Set {
            day,
            category,
            meal,
            people,
            custom,
        } => cmd_set(&mut session, day, &category, &meal, people, custom),
        Command::Clear { day, category } => {
            session.clear(day, category.as_deref())?;
            session.save_plan()?;
            println!("Selections cleared.");
            Ok(())
        }
        Command::Edit { day } => cmd_edit(&mut session, day),
        Command::Fill { seed, day } => cmd_fill(&mut session, seed, day),
        Command::List { filter } => {
            let list = session.shopping_list_with(&filter.apply(session.policy()));
            display_shopping_list(&list);
            Ok(())
        }
        Command::Export {
            kind,
            output,
            filter,
        } => cmd_export(&session, &config, kind, output, &filter),
        Command::Custom { action } => cmd_custom(&mut session, action),
        Command::Water { day, set, add } => cmd_water(&mut session, day, set, add),
        Command::Notes { text } => {
            match text {
                Some(text) => {
                    session.set_notes(&text);
                    session.save_journal()?;
                    println!("Notes saved.");
                }
                None if session.journal().notes.trim().is_empty() => println!("No notes."),
                None => println!("{}", session.journal().notes),
            }
            Ok(())
        }
    }
}

fn cmd_meals(session: &PlannerSession, category: Option<&str>) -> Result<()> {
    let name = match category {
        Some(input) => Some(session.category(input)?.name.clone()),
        None => None,
    };
    display_menu(session, name.as_deref());
    Ok(())
}

/// Set one cell. An unclear name is asked about when running in a terminal.
fn cmd_set(
    session: &mut PlannerSession,
    day: Weekday,
    category: &str,
    meal: &str,
    people: u32,
    custom: bool,
) -> Result<()> {
    let (category, stored) = match session.set_meal(day, category, meal, people, custom) {
        Err(PlannerError::AmbiguousMeal { .. }) if std::io::stdin().is_terminal() => {
            let offered = session.category(category)?.clone();
            match prompt_meal_choice(&offered, meal)? {
                Some(choice) => session.set_meal(day, category, &choice, people, false)?,
                None => {
                    println!("Nothing changed.");
                    return Ok(());
                }
            }
        }
        other => other?,
    };

    if custom {
        session.save_custom_meals()?;
    }
    session.save_plan()?;
    println!("{} / {}: {} (x{})", day, category, stored, people);
    Ok(())
}

fn cmd_edit(session: &mut PlannerSession, day: Weekday) -> Result<()> {
    let changed = prompt_day_selection(session, day)?;
    println!();
    display_day(session, day, Weekday::today());

    if changed == 0 {
        println!("No changes.");
        return Ok(());
    }

    if prompt_yes_no("Save selections?", true)? {
        session.save_plan()?;
        println!("Selections saved.");
    }
    Ok(())
}

fn cmd_fill(session: &mut PlannerSession, seed: Option<u64>, day: Option<Weekday>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let days: Vec<Weekday> = match day {
        Some(day) => vec![day],
        None => Weekday::ALL.to_vec(),
    };

    let filled = session.fill(&days, &mut rng);
    if filled == 0 {
        println!("Nothing to fill.");
        return Ok(());
    }

    session.save_plan()?;
    println!("Filled {} empty selections.", filled);
    Ok(())
}

fn cmd_export(
    session: &PlannerSession,
    config: &Config,
    kind: ExportKind,
    output: Option<PathBuf>,
    filter: &ListFilter,
) -> Result<()> {
    let now = Local::now().naive_local();
    let path = output.unwrap_or_else(|| PathBuf::from(kind.default_file_name(now.date())));
    let list = session.shopping_list_with(&filter.apply(session.policy()));

    let content = match kind {
        ExportKind::ListText => shopping_list_text(&list).into_bytes(),
        ExportKind::ListDocument => {
            shopping_list_document(&list, now.date(), config.rows_per_page())
                .render()
                .into_bytes()
        }
        ExportKind::ListCsv => {
            let mut buffer = Vec::new();
            write_shopping_csv(&list, &mut buffer)?;
            buffer
        }
        ExportKind::Plan => plan_report(
            session.plan(),
            session.menu(),
            session.catalog(),
            &session.journal().notes,
            now,
        )
        .into_bytes(),
    };

    write_output(&path, &content)?;
    if path.as_os_str() != "-" {
        println!("Exported to {}", path.display());
    }
    Ok(())
}

fn cmd_custom(session: &mut PlannerSession, action: CustomAction) -> Result<()> {
    match action {
        CustomAction::Add { category, name } => {
            if session.add_custom_meal(&category, &name)? {
                session.save_custom_meals()?;
                println!("Added '{}' to {}.", name.trim(), category);
            } else {
                println!("'{}' is already offered in {}.", name.trim(), category);
            }
        }
        CustomAction::List => {
            if session.custom_meals().is_empty() {
                println!("No custom meals.");
            }
            for (category, meals) in session.custom_meals().iter() {
                println!("{}", category);
                for meal in meals {
                    println!("  {}", meal);
                }
            }
        }
    }
    Ok(())
}

fn cmd_water(
    session: &mut PlannerSession,
    day: Weekday,
    set: Option<u32>,
    add: Option<i32>,
) -> Result<()> {
    let glasses = match (set, add) {
        (Some(count), _) => session.set_glasses(day, count),
        (None, Some(delta)) => session.add_glasses(day, delta),
        (None, None) => session.journal().glasses(day),
    };

    if set.is_some() || add.is_some() {
        session.save_journal()?;
    }

    let goal = session.hydration_goal();
    println!(
        "{}: {} of {} glasses ({:.2} / {:.2} L)",
        day,
        glasses,
        goal.glasses(),
        goal.liters(glasses),
        goal.goal_liters()
    );
    Ok(())
}
