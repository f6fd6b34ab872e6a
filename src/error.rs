use crate::types::scoring::FrameworkScore;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostureError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("input parse error: {0}")]
    InputParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PostureError>;

#[derive(Error, Debug)]
pub enum ScoreError {
    /// No control in the framework had any weighted resources to score against.
    /// Carries the degraded result (score 0) so callers can still report it.
    #[error("unable to calculate score for framework {framework} due to bad worst-case score")]
    ZeroWorstCase {
        framework: String,
        partial: Box<FrameworkScore>,
    },
}
