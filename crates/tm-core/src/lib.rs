//! Span detection and redaction engine for sensitive text.
//!
//! Combines a semantic entity recognizer (names, organizations, locations;
//! injected as a capability) with a catalog of pattern detectors (passport,
//! email, phone, date, address) into a single non-overlapping redaction
//! over the original text, with correct character offsets even when a
//! replacement changes the length.
//!
//! # Key properties
//!
//! - **Offset-based splicing**: replacements land at recorded offsets,
//!   never by substring search, so duplicate text is redacted at the right
//!   occurrence.
//! - **Deterministic conflict resolution**: overlapping candidates resolve
//!   by start, then span length, then semantic-over-pattern precedence,
//!   independent of detection order.
//! - **Stateless invocations**: the engine holds only read-only state and
//!   is shareable across threads without synchronization.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tm_core::{MaskEngine, MaskMode, NullRecognizer};
//!
//! let engine = MaskEngine::new(Arc::new(NullRecognizer)).unwrap();
//! let report = engine.mask("My email is test@example.com", MaskMode::Full).unwrap();
//! assert_eq!(report.masked_text, "My email is [EMAIL REDACTED]");
//! ```

pub mod collect;
pub mod engine;
pub mod error;
pub mod offsets;
pub mod patterns;
pub mod recognize;
pub mod redact;
pub mod resolve;
pub mod span;

pub use engine::{MaskEngine, MaskReport};
pub use error::{EngineError, Result};
pub use offsets::OffsetMap;
pub use patterns::{DetectorRule, PatternCatalog};
pub use recognize::{
    Entity, EntityRecognizer, NullRecognizer, RecognizerError, RecognizerPolicy,
    StaticRecognizer, SEMANTIC_CATEGORIES,
};
pub use span::{MaskMode, RedactionDetail, Span, SpanSource, MASK_CHAR};
