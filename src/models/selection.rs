use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::planner::constants::{DEFAULT_PEOPLE, NO_MEAL};

/// The seven canonical days, ordered Monday to Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Zero-based position, Monday = 0.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn today() -> Self {
        use chrono::Datelike;
        Self::from(chrono::Local::now().weekday())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Weekday::ALL[day.num_days_from_monday() as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = PlannerError;

    /// Accepts full names or three-letter prefixes, case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim().to_lowercase();
        if input.len() >= 3 {
            for day in Weekday::ALL {
                if day.name().to_lowercase().starts_with(&input) {
                    return Ok(day);
                }
            }
        }
        Err(PlannerError::InvalidInput(format!("Unknown day: {}", s)))
    }
}

fn default_meal() -> String {
    NO_MEAL.to_string()
}

fn default_people() -> u32 {
    DEFAULT_PEOPLE
}

/// The choice for one (day, category) cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySelection {
    #[serde(default = "default_meal")]
    pub meal: String,

    #[serde(default = "default_people")]
    pub people: u32,
}

impl Default for DaySelection {
    fn default() -> Self {
        Self {
            meal: default_meal(),
            people: default_people(),
        }
    }
}

impl DaySelection {
    pub fn new(meal: impl Into<String>, people: u32) -> Self {
        Self {
            meal: meal.into(),
            people,
        }
    }

    /// The selected meal, or `None` for the sentinel and blank names.
    pub fn meal_name(&self) -> Option<&str> {
        let meal = self.meal.trim();
        if meal.is_empty() || meal == NO_MEAL {
            None
        } else {
            Some(meal)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.meal_name().is_none()
    }
}

/// Day -> category -> selection.
///
/// Missing cells read as the default selection; nothing errors on a gap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekPlan {
    days: BTreeMap<Weekday, BTreeMap<String, DaySelection>>,
}

impl WeekPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, day: Weekday, category: &str) -> Option<&DaySelection> {
        self.days.get(&day).and_then(|cells| cells.get(category))
    }

    /// Selection for a cell, defaulting to no meal for one person.
    pub fn selection(&self, day: Weekday, category: &str) -> DaySelection {
        self.get(day, category).cloned().unwrap_or_default()
    }

    /// Mutable access; default-constructs the cell on first access.
    pub fn selection_mut(&mut self, day: Weekday, category: &str) -> &mut DaySelection {
        self.days
            .entry(day)
            .or_default()
            .entry(category.to_string())
            .or_default()
    }

    /// Overwrite a cell. Party size must be at least one.
    pub fn set(&mut self, day: Weekday, category: &str, meal: &str, people: u32) -> Result<()> {
        if people == 0 {
            return Err(PlannerError::InvalidInput(
                "Party size must be at least 1".to_string(),
            ));
        }
        *self.selection_mut(day, category) = DaySelection::new(meal, people);
        Ok(())
    }

    pub fn clear_cell(&mut self, day: Weekday, category: &str) {
        *self.selection_mut(day, category) = DaySelection::default();
    }

    pub fn clear_day(&mut self, day: Weekday) {
        if let Some(cells) = self.days.get_mut(&day) {
            for cell in cells.values_mut() {
                *cell = DaySelection::default();
            }
        }
    }

    pub fn clear_all(&mut self) {
        for cells in self.days.values_mut() {
            for cell in cells.values_mut() {
                *cell = DaySelection::default();
            }
        }
    }

    /// Make sure every day has a record for every category.
    pub fn ensure_categories<S: AsRef<str>>(&mut self, categories: &[S]) {
        for day in Weekday::ALL {
            for category in categories {
                self.selection_mut(day, category.as_ref());
            }
        }
    }

    /// Repair values that a hand-edited store may contain.
    pub fn normalize(&mut self) {
        for cells in self.days.values_mut() {
            for cell in cells.values_mut() {
                if cell.people == 0 {
                    cell.people = DEFAULT_PEOPLE;
                }
                if cell.meal.trim().is_empty() {
                    cell.meal = default_meal();
                }
            }
        }
    }

    /// Number of cells with a meal selected.
    pub fn selected_count(&self) -> usize {
        self.days
            .values()
            .flat_map(|cells| cells.values())
            .filter(|cell| !cell.is_empty())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_count() == 0
    }
}
