use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Ambiguous category '{input}', did you mean one of: {}", candidates.join(", "))]
    AmbiguousCategory {
        input: String,
        candidates: Vec<String>,
    },

    #[error("Unknown meal '{meal}' for category '{category}'")]
    UnknownMeal { category: String, meal: String },

    #[error("Ambiguous meal '{input}', did you mean one of: {}", candidates.join(", "))]
    AmbiguousMeal {
        input: String,
        candidates: Vec<String>,
    },

    #[error("Invalid catalog: {0}")]
    Catalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
