use thiserror::Error;

#[derive(Debug, Error)]
pub enum TierlistError {
    #[error("Degenerate category '{category}': cannot normalise over [{min}, {max}]")]
    DegenerateCategory { category: String, min: f64, max: f64 },

    #[error("Non-finite score for category '{category}' from raw value {value}")]
    NonFiniteScore { category: String, value: f64 },

    #[error("Category '{category}' scored on subject '{subject}' has no weight in rubric '{rubric}'")]
    UnweightedCategory {
        subject: String,
        category: String,
        rubric: String,
    },

    #[error("Incomplete evaluation of '{subject}': no score for {}", .categories.join(", "))]
    IncompleteEvaluation {
        subject: String,
        categories: Vec<String>,
    },

    #[error("Rubric '{rubric}' has zero total mass")]
    ZeroMassRubric { rubric: String },

    #[error("Weight for category '{category}' must be finite and non-negative, got {weight}")]
    NegativeWeight { category: String, weight: f64 },

    #[error("Category '{category}' is not declared on subject '{subject}'")]
    ForeignCategory { subject: String, category: String },

    #[error("Rubric '{rubric}' weights category '{category}' which subject '{subject}' does not declare")]
    UnevaluatedCategory {
        subject: String,
        category: String,
        rubric: String,
    },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown subject: {0}")]
    UnknownSubject(String),

    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, TierlistError>;
