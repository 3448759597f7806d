//! Error types for test preparation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a preparation run
#[derive(Debug, Error)]
pub enum Error {
    /// The SPRT bounds string is not of the form `[lower, upper]`
    #[error("invalid SPRT bounds {input:?}: {reason}")]
    InvalidBounds { input: String, reason: String },

    /// An engine binary is missing or not executable
    #[error("{role} engine {problem}: {}", path.display())]
    Engine {
        role: &'static str,
        problem: &'static str,
        path: PathBuf,
    },

    /// The operator chose not to continue without the OpenBench client
    #[error("aborted: OpenBench client not available")]
    Declined,

    /// The continue prompt could not be shown or answered
    #[error("failed to prompt operator: {0}")]
    Prompt(#[source] std::io::Error),

    /// Writing an artifact (or creating its directory) failed
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration record could not be serialized
    #[error("failed to serialize test configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
