use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use crate::models::Weekday;
use crate::planner::{ExclusionFilter, ShoppingPolicy, UncatalogedPolicy};

/// Weekly meal planner: pick meals per day and build the shopping list.
#[derive(Parser, Debug)]
#[command(name = "meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a config.toml overriding the defaults.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding selections, custom meals and the journal.
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Show the week plan with calories and hydration.
    #[default]
    Show,

    /// List categories and the meals offered in each.
    Meals {
        /// Only this category.
        #[arg(long)]
        category: Option<String>,
    },

    /// Choose the meal for one day and category.
    Set {
        day: Weekday,
        category: String,
        /// Meal name or its calorie label; "None" clears the cell.
        meal: String,

        /// Number of people eating.
        #[arg(short, long, default_value_t = 1)]
        people: u32,

        /// Register the name as a custom meal if the category lacks it.
        #[arg(long)]
        custom: bool,
    },

    /// Reset cells to no meal. Without a day, clears the whole week.
    Clear {
        day: Option<Weekday>,

        /// Only this category.
        #[arg(long)]
        category: Option<String>,
    },

    /// Edit a day interactively.
    Edit { day: Weekday },

    /// Fill empty cells with random meals.
    Fill {
        /// Seed for a reproducible fill.
        #[arg(long)]
        seed: Option<u64>,

        /// Only this day.
        #[arg(long)]
        day: Option<Weekday>,
    },

    /// Print the consolidated shopping list.
    List {
        #[command(flatten)]
        filter: ListFilter,
    },

    /// Write the shopping list or the plan to a file.
    Export {
        #[arg(value_enum)]
        kind: ExportKind,

        /// Destination file, or "-" for stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        filter: ListFilter,
    },

    /// Manage custom meals.
    Custom {
        #[command(subcommand)]
        action: CustomAction,
    },

    /// Track glasses of water for a day.
    Water {
        day: Weekday,

        /// Set the number of glasses.
        #[arg(long, conflicts_with = "add")]
        set: Option<u32>,

        /// Add (or with a negative number remove) glasses.
        #[arg(long, allow_hyphen_values = true)]
        add: Option<i32>,
    },

    /// Print the notes, or replace them with TEXT.
    Notes { text: Option<String> },
}

/// Options shaping the shopping list.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct ListFilter {
    /// Extra exclusion term (repeatable).
    #[arg(long = "exclude", value_name = "TERM")]
    pub exclude: Vec<String>,

    /// Ignore the configured exclusion terms.
    #[arg(long)]
    pub no_default_exclusions: bool,

    /// Leave out meals missing from the catalog.
    #[arg(long)]
    pub skip_custom: bool,
}

impl ListFilter {
    /// The configured policy adjusted by the command-line flags.
    pub fn apply(&self, base: &ShoppingPolicy) -> ShoppingPolicy {
        let mut exclusions = if self.no_default_exclusions {
            ExclusionFilter::none()
        } else {
            base.exclusions.clone()
        };
        exclusions.extend(&self.exclude);

        ShoppingPolicy {
            exclusions,
            uncataloged: if self.skip_custom {
                UncatalogedPolicy::Skip
            } else {
                base.uncataloged
            },
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum CustomAction {
    /// Offer a new meal in a category.
    Add { category: String, name: String },
    /// Show the custom meals.
    List,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// Shopping list, one line per ingredient.
    ListText,
    /// Shopping list as printable checklist pages.
    ListDocument,
    /// Shopping list as CSV.
    ListCsv,
    /// The whole week plan with notes.
    Plan,
}

impl ExportKind {
    pub fn default_file_name(self, date: NaiveDate) -> String {
        let stamp = date.format("%Y%m%d");
        match self {
            ExportKind::ListText | ExportKind::ListDocument => {
                format!("shopping_list_{}.txt", stamp)
            }
            ExportKind::ListCsv => format!("shopping_list_{}.csv", stamp),
            ExportKind::Plan => format!("plan_{}.txt", stamp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_show() {
        let cli = Cli::try_parse_from(["meal_planner"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(cli.command.unwrap_or_default(), Command::Show));
    }

    #[test]
    fn test_parse_set() {
        let cli = Cli::try_parse_from([
            "meal_planner",
            "set",
            "mon",
            "Breakfast",
            "Wrap with egg",
            "--people",
            "3",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Set {
                day, meal, people, custom, ..
            }) => {
                assert_eq!(day, Weekday::Monday);
                assert_eq!(meal, "Wrap with egg");
                assert_eq!(people, 3);
                assert!(!custom);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_list_filters() {
        let cli = Cli::try_parse_from([
            "meal_planner",
            "list",
            "--exclude",
            "egg",
            "--exclude",
            "milk",
            "--no-default-exclusions",
        ])
        .unwrap();
        match cli.command {
            Some(Command::List { filter }) => {
                assert_eq!(filter.exclude, vec!["egg", "milk"]);
                assert!(filter.no_default_exclusions);
                assert!(!filter.skip_custom);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_filter_applies_to_policy() {
        let base = ShoppingPolicy::default();

        let filter = ListFilter {
            exclude: vec!["Egg".to_string()],
            ..Default::default()
        };
        let policy = filter.apply(&base);
        assert!(policy.exclusions.excludes("Egg", "unit"));
        assert!(policy.exclusions.excludes("White rice", "g"));
        assert_eq!(policy.uncataloged, UncatalogedPolicy::Placeholder);

        let filter = ListFilter {
            no_default_exclusions: true,
            skip_custom: true,
            ..Default::default()
        };
        let policy = filter.apply(&base);
        assert!(policy.exclusions.is_empty());
        assert_eq!(policy.uncataloged, UncatalogedPolicy::Skip);
    }

    #[test]
    fn test_water_negative_add() {
        let cli = Cli::try_parse_from(["meal_planner", "water", "friday", "--add", "-2"]).unwrap();
        match cli.command {
            Some(Command::Water { day, add, set }) => {
                assert_eq!(day, Weekday::Friday);
                assert_eq!(add, Some(-2));
                assert_eq!(set, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_bad_day_rejected() {
        assert!(Cli::try_parse_from(["meal_planner", "edit", "someday"]).is_err());
    }

    #[test]
    fn test_export_file_names() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(
            ExportKind::ListCsv.default_file_name(date),
            "shopping_list_20261016.csv"
        );
        assert_eq!(ExportKind::Plan.default_file_name(date), "plan_20261016.txt");
    }
}
