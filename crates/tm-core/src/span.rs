//! Span and redaction detail value types.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Character used to mask text in partial mode.
pub const MASK_CHAR: char = '*';

/// Where a candidate span came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanSource {
    /// Emitted by the external entity recognizer (names, orgs, locations).
    Semantic,
    /// Emitted by a detector rule in the pattern catalog.
    Pattern,
}

impl SpanSource {
    /// Sort rank used by conflict resolution: semantic spans win ties.
    pub(crate) fn rank(self) -> u8 {
        match self {
            SpanSource::Semantic => 0,
            SpanSource::Pattern => 1,
        }
    }
}

impl std::fmt::Display for SpanSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SpanSource::Semantic => "semantic",
            SpanSource::Pattern => "pattern",
        };
        write!(f, "{}", s)
    }
}

/// A `[start, end)` character-offset range in the source text, tagged with
/// its category and detection source. Offsets always index the original
/// input, never a partially masked intermediate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive start, in characters.
    pub start: usize,
    /// Exclusive end, in characters. Always greater than `start`.
    pub end: usize,
    /// Detection source.
    pub source: SpanSource,
    /// Category label (e.g. `PERSON`, `EMAIL`).
    pub category: String,
    /// The matched substring.
    pub text: String,
}

impl Span {
    pub fn new(
        start: usize,
        end: usize,
        source: SpanSource,
        category: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        debug_assert!(start < end, "span must be non-empty");
        Self {
            start,
            end,
            source,
            category: category.into(),
            text: text.into(),
        }
    }

    /// Span length in characters.
    pub fn char_len(&self) -> usize {
        self.end - self.start
    }

    /// Whether two spans share any character index.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// One record per span that survived conflict resolution and was redacted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionDetail {
    pub source: SpanSource,
    pub category: String,
    pub original_text: String,
    pub replacement: String,
    pub start: usize,
    pub end: usize,
}

/// How a span is replaced in the output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MaskMode {
    /// Keep the first character, mask the rest with `*` (length-preserving).
    #[default]
    Partial,
    /// Replace the whole span with a category-labeled redaction token.
    Full,
}

impl std::fmt::Display for MaskMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MaskMode::Partial => "partial",
            MaskMode::Full => "full",
        };
        write!(f, "{}", s)
    }
}
