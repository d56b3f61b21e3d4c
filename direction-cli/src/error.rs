//! Error types for the directionality engine
//!
//! Failures scoped to one source are recoverable: the pipeline records them
//! and moves on. `InvalidConfig` is the only run-level (fatal) kind.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while analysing a text or preparing a run
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("No valid words found in the text for analysis ({context})")]
    EmptyInput { context: String },

    #[error("Frequency distribution has entries but a total count of zero")]
    DegenerateDistribution,

    #[error("Source '{source_id}' unavailable: {reason}")]
    SourceUnavailable { source_id: String, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnalysisError {
    /// Coarse classification, stable across error message changes
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::EmptyInput { .. } => ErrorKind::EmptyInput,
            AnalysisError::DegenerateDistribution => ErrorKind::DegenerateDistribution,
            AnalysisError::SourceUnavailable { .. } | AnalysisError::Io(_) => {
                ErrorKind::SourceUnavailable
            }
            AnalysisError::InvalidConfig(_) => ErrorKind::InvalidConfig,
        }
    }
}

/// Serializable tag for an [`AnalysisError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    EmptyInput,
    DegenerateDistribution,
    SourceUnavailable,
    InvalidConfig,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::EmptyInput => write!(f, "empty input"),
            ErrorKind::DegenerateDistribution => write!(f, "degenerate distribution"),
            ErrorKind::SourceUnavailable => write!(f, "source unavailable"),
            ErrorKind::InvalidConfig => write!(f, "invalid config"),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let err = AnalysisError::EmptyInput {
            context: "normal".into(),
        };
        assert_eq!(err.kind(), ErrorKind::EmptyInput);

        let io = AnalysisError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.kind(), ErrorKind::SourceUnavailable);

        let cfg = AnalysisError::InvalidConfig("sample_size must be positive".into());
        assert_eq!(cfg.kind(), ErrorKind::InvalidConfig);
    }

    #[test]
    fn test_messages_name_the_source() {
        let err = AnalysisError::SourceUnavailable {
            source_id: "Hebrew".into(),
            reason: "file not found".into(),
        };
        assert!(err.to_string().contains("Hebrew"));
        assert!(err.to_string().contains("file not found"));
    }
}
