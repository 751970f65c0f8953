use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::error::Result;
use crate::models::{CustomMeals, Journal, WeekPlan};

pub const SELECTIONS_FILE: &str = "selections.json";
pub const CUSTOM_MEALS_FILE: &str = "custom_meals.json";
pub const JOURNAL_FILE: &str = "journal.json";

/// Locations of the persisted stores inside a data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub selections: PathBuf,
    pub custom_meals: PathBuf,
    pub journal: PathBuf,
}

impl StorePaths {
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            selections: dir.join(SELECTIONS_FILE),
            custom_meals: dir.join(CUSTOM_MEALS_FILE),
            journal: dir.join(JOURNAL_FILE),
        }
    }
}

/// Read a JSON store.
///
/// A missing file or unparseable content yields the empty store; other IO
/// failures are returned.
fn load_or_default<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(e.into()),
    };

    match serde_json::from_str(&content) {
        Ok(value) => Ok(value),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "malformed store, starting fresh");
            Ok(T::default())
        }
    }
}

/// Write a JSON store, replacing the previous content wholesale.
fn save_json<T, P>(path: P, value: &T) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    info!(path = %path.display(), "saved");
    Ok(())
}

/// Load the week's selections. Stored party sizes of 0 are repaired to 1.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<WeekPlan> {
    let mut plan: WeekPlan = load_or_default(path)?;
    plan.normalize();
    Ok(plan)
}

pub fn save_plan<P: AsRef<Path>>(path: P, plan: &WeekPlan) -> Result<()> {
    save_json(path, plan)
}

pub fn load_custom_meals<P: AsRef<Path>>(path: P) -> Result<CustomMeals> {
    load_or_default(path)
}

pub fn save_custom_meals<P: AsRef<Path>>(path: P, custom: &CustomMeals) -> Result<()> {
    save_json(path, custom)
}

pub fn load_journal<P: AsRef<Path>>(path: P) -> Result<Journal> {
    load_or_default(path)
}

pub fn save_journal<P: AsRef<Path>>(path: P, journal: &Journal) -> Result<()> {
    save_json(path, journal)
}
