use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::models::HydrationGoal;
use crate::planner::constants::DEFAULT_ROWS_PER_PAGE;
use crate::planner::{ExclusionFilter, ShoppingPolicy, UncatalogedPolicy};

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    storage: StorageConfig,
    #[serde(default)]
    shopping: ShoppingConfig,
    #[serde(default)]
    export: ExportConfig,
    #[serde(default)]
    hydration: HydrationConfig,
}

#[derive(Deserialize, Default)]
struct StorageConfig {
    data_dir: Option<PathBuf>,
    catalog: Option<PathBuf>,
}

#[derive(Deserialize, Default)]
struct ShoppingConfig {
    exclusions: Option<Vec<String>>,
    uncataloged: Option<UncatalogedPolicy>,
}

#[derive(Deserialize, Default)]
struct ExportConfig {
    rows_per_page: Option<usize>,
}

#[derive(Deserialize, Default)]
struct HydrationConfig {
    glass_ml: Option<u32>,
    goal_ml: Option<u32>,
}

/// Settings from the bundled `config.toml`, overlaid with the user's file.
pub struct Config {
    storage: StorageConfig,
    shopping: ShoppingConfig,
    export: ExportConfig,
    hydration: HydrationConfig,
}

impl Config {
    /// Load defaults, then merge the user config.
    ///
    /// An explicit path must exist. The default location is optional. A user
    /// file that fails to parse is logged and ignored.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = Self::defaults()?;

        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        format!("config file not found: {}", path.display()),
                    )
                    .into());
                }
                Some(path.to_path_buf())
            }
            None => user_config_path().filter(|p| p.exists()),
        };

        if let Some(path) = path {
            match std::fs::read_to_string(&path) {
                Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                    Ok(user) => {
                        debug!(path = %path.display(), "loaded user config");
                        config.merge(user);
                    }
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "ignoring malformed config")
                    }
                },
                Err(e) => warn!(path = %path.display(), error = %e, "could not read config"),
            }
        }

        Ok(config)
    }

    /// The bundled defaults only.
    pub fn defaults() -> Result<Self> {
        let base: ConfigFile = toml::from_str(DEFAULT_CONFIG)?;
        Ok(Self {
            storage: base.storage,
            shopping: base.shopping,
            export: base.export,
            hydration: base.hydration,
        })
    }

    /// Defaults overlaid with a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let mut config = Self::defaults()?;
        config.merge(toml::from_str(contents)?);
        Ok(config)
    }

    fn merge(&mut self, user: ConfigFile) {
        if user.storage.data_dir.is_some() {
            self.storage.data_dir = user.storage.data_dir;
        }
        if user.storage.catalog.is_some() {
            self.storage.catalog = user.storage.catalog;
        }
        if user.shopping.exclusions.is_some() {
            self.shopping.exclusions = user.shopping.exclusions;
        }
        if user.shopping.uncataloged.is_some() {
            self.shopping.uncataloged = user.shopping.uncataloged;
        }
        if user.export.rows_per_page.is_some() {
            self.export.rows_per_page = user.export.rows_per_page;
        }
        if user.hydration.glass_ml.is_some() {
            self.hydration.glass_ml = user.hydration.glass_ml;
        }
        if user.hydration.goal_ml.is_some() {
            self.hydration.goal_ml = user.hydration.goal_ml;
        }
    }

    pub fn set_data_dir(&mut self, dir: PathBuf) {
        self.storage.data_dir = Some(dir);
    }

    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// External catalog file, if one is configured.
    pub fn catalog_path(&self) -> Option<&Path> {
        self.storage
            .catalog
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }

    pub fn exclusion_terms(&self) -> Vec<String> {
        self.shopping.exclusions.clone().unwrap_or_default()
    }

    pub fn shopping_policy(&self) -> ShoppingPolicy {
        ShoppingPolicy {
            exclusions: ExclusionFilter::new(self.exclusion_terms()),
            uncataloged: self.shopping.uncataloged.unwrap_or_default(),
        }
    }

    /// Rows per page of the paginated list (at least 1).
    pub fn rows_per_page(&self) -> usize {
        self.export
            .rows_per_page
            .unwrap_or(DEFAULT_ROWS_PER_PAGE)
            .max(1)
    }

    pub fn hydration_goal(&self) -> HydrationGoal {
        let fallback = HydrationGoal::default();
        HydrationGoal {
            glass_ml: self.hydration.glass_ml.unwrap_or(fallback.glass_ml),
            goal_ml: self.hydration.goal_ml.unwrap_or(fallback.goal_ml),
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("meal_planner").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_bundled_defaults() {
        let config = Config::defaults().unwrap();
        assert_eq!(config.data_dir(), PathBuf::from("."));
        assert!(config.catalog_path().is_none());
        assert_eq!(config.exclusion_terms(), vec!["rice", "bean", "(canteen)", "pinch"]);
        assert_eq!(config.rows_per_page(), 40);
        assert_eq!(config.hydration_goal(), HydrationGoal::default());

        let policy = config.shopping_policy();
        assert_eq!(policy.uncataloged, UncatalogedPolicy::Placeholder);
        assert_eq!(policy.exclusions, ExclusionFilter::defaults());
    }

    #[test]
    fn test_user_values_override_defaults() {
        let config = Config::from_toml_str(
            r#"
            [shopping]
            exclusions = ["salt"]
            uncataloged = "skip"

            [export]
            rows_per_page = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.exclusion_terms(), vec!["salt"]);
        assert_eq!(config.shopping_policy().uncataloged, UncatalogedPolicy::Skip);
        assert_eq!(config.rows_per_page(), 1);
        // Untouched sections keep their defaults
        assert_eq!(config.hydration_goal().glass_ml, 250);
    }

    #[test]
    fn test_malformed_user_file_is_ignored() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[shopping\nexclusions = 3").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.exclusion_terms().len(), 4);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn test_catalog_path_when_set() {
        let config = Config::from_toml_str("[storage]\ncatalog = \"meals.json\"").unwrap();
        assert_eq!(config.catalog_path(), Some(Path::new("meals.json")));
    }
}
