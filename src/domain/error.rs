//! Shared error types for callbench.

use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by graph generation and code emission.
#[derive(Debug, Error)]
pub enum CallbenchError {
    /// A shape or invocation parameter is out of range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A graph (usually a deserialized artifact) violates a structural
    /// invariant: dangling callee ids, duplicate ids, missing root.
    #[error("malformed graph: {0}")]
    MalformedGraph(String),

    /// Reading the input artifact or writing output files failed.
    #[error("file system error at {}: {}", path.display(), source)]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CallbenchError {
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        CallbenchError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CallbenchError::FileSystem {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CallbenchError>;
