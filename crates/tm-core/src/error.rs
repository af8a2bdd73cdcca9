//! Error types for the masking engine.

use crate::recognize::RecognizerError;
use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur in the masking engine.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A detector rule failed to compile. This is a startup-time fatal
    /// error: the engine must not be constructed with a broken catalog,
    /// and no rule is ever skipped silently at request time.
    #[error("detector '{category}' has an invalid pattern: {source}")]
    InvalidPattern {
        category: String,
        #[source]
        source: regex::Error,
    },

    /// The entity recognizer failed. Surfaced only when the engine runs
    /// with [`RecognizerPolicy::Fail`](crate::RecognizerPolicy::Fail);
    /// under `PatternOnly` the engine degrades to pattern detection.
    #[error("entity recognizer failed: {0}")]
    Recognizer(#[from] RecognizerError),
}
