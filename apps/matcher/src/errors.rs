use std::path::PathBuf;

use thiserror::Error;

/// Driver-level error type. The matching core itself never fails.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Io { .. } => 66,
            AppError::Json { .. } | AppError::Validation(_) => 65,
            AppError::Internal(_) => 70,
        }
    }
}
