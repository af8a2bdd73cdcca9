//! The semantic entity recognizer boundary.
//!
//! The engine does not own an NLP model. It consumes entity spans from an
//! [`EntityRecognizer`] implementation injected at construction, and depends
//! only on the output contract: character offsets in the engine's
//! convention, category labels, and no particular ordering.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic categories the engine consumes. A recognizer may emit more;
/// everything outside this list is ignored.
pub const SEMANTIC_CATEGORIES: &[&str] = &["PERSON", "ORG", "GPE", "LOC"];

/// One entity span from the recognizer. Offsets are character indices into
/// the text the recognizer was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub start: usize,
    pub end: usize,
    pub category: String,
    pub text: String,
}

/// Failure of the entity recognizer (model unavailable, backend timeout).
///
/// How the engine reacts is the caller's choice via [`RecognizerPolicy`].
#[derive(Error, Debug)]
#[error("{message}")]
pub struct RecognizerError {
    message: String,
}

impl RecognizerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// What the engine does when the recognizer fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecognizerPolicy {
    /// Fail the whole request.
    #[default]
    Fail,
    /// Proceed with pattern-only detection.
    PatternOnly,
}

/// Black-box semantic entity source.
///
/// Implementations must use the same character-offset convention as the
/// engine's own pattern matcher. Returning no entities is normal.
pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>, RecognizerError>;
}

/// Recognizer that never finds anything. Pattern-only operation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRecognizer;

impl EntityRecognizer for NullRecognizer {
    fn recognize(&self, _text: &str) -> Result<Vec<Entity>, RecognizerError> {
        Ok(Vec::new())
    }
}

/// Recognizer that returns a fixed entity list regardless of input.
///
/// Used by tests and by callers holding precomputed recognizer output
/// (e.g. entities produced out-of-process and loaded from JSON).
#[derive(Debug, Default, Clone)]
pub struct StaticRecognizer {
    entities: Vec<Entity>,
}

impl StaticRecognizer {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }
}

impl EntityRecognizer for StaticRecognizer {
    fn recognize(&self, _text: &str) -> Result<Vec<Entity>, RecognizerError> {
        Ok(self.entities.clone())
    }
}
