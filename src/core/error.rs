//! Error types for the voxcarve engine

use thiserror::Error;

/// Main error type for the engine
#[derive(Debug, Error)]
pub enum Error {
    /// Caller broke an invariant: missing argument, out-of-bounds write,
    /// or mismatched bounding boxes between cooperating shapes.
    #[error("Argument error: {0}")]
    Argument(String),

    /// Recoverable problem with user input. Aborts the current brush step only.
    #[error("{0}")]
    UserInput(String),

    /// Mutation attempted on an immutable shape.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Only user input errors may be reported and swallowed by the step runner.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::UserInput(_))
    }
}
