use crate::sources::SourceError;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Dataset unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
