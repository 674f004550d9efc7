//! Crate-wide error type.

use thiserror::Error;

/// Errors produced while loading configuration or rendering reports.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
