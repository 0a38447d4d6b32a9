//! Error types for state value formatting and edit round-trips.

use thiserror::Error;

/// Errors that can occur while converting state values to and from text.
#[derive(Error, Debug)]
pub enum StateFormatError {
    /// Edited text was not valid structural text after token substitution
    /// (submit path), or a value could not be serialized (edit path).
    /// Reported to the edit UI; never applied to the live object.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value or text nests deeper than [`MAX_DEPTH`](crate::MAX_DEPTH).
    /// Raised instead of risking stack exhaustion on adversarial input.
    #[error("value nesting exceeds the depth limit ({0})")]
    DepthLimit(usize),
}

/// Convenience alias used throughout state-format.
pub type Result<T> = std::result::Result<T, StateFormatError>;
