use std::path::PathBuf;

use thiserror::Error;

/// Failures at the edges of the analysis: decoding caller input and loading
/// configuration. Scoring itself never fails.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("goal priority must be 1, 2 or 3, got {0}")]
    InvalidPriority(u8),

    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid user context: {0}")]
    ContextParse(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
