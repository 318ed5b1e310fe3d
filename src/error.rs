use thiserror::Error;

#[derive(Error, Debug)]
pub enum SitegenError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to persist artifact: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Source error: {message}")]
    Source { message: String },

    #[error("Schema violation: {0}")]
    Schema(String),
}

pub type Result<T> = std::result::Result<T, SitegenError>;
