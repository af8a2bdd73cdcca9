//! Redaction: splice replacements into the text by recorded offset.
//!
//! Spans are processed in descending start order so a length-changing
//! replacement never invalidates the offsets of spans to its left. Splicing
//! is always by offset; substring search would mis-redact when the same
//! text occurs more than once.

use crate::offsets::OffsetMap;
use crate::span::{MaskMode, RedactionDetail, Span, SpanSource, MASK_CHAR};

/// Replacement string for one span under the given mode.
fn replacement_for(span: &Span, mode: MaskMode) -> String {
    match mode {
        MaskMode::Partial => {
            let mut out = String::with_capacity(span.char_len());
            let first = span.text.chars().next().unwrap_or(MASK_CHAR);
            out.push(first);
            for _ in 1..span.char_len() {
                out.push(MASK_CHAR);
            }
            out
        }
        MaskMode::Full => match span.source {
            SpanSource::Semantic => "[REDACTED]".to_string(),
            SpanSource::Pattern => format!("[{} REDACTED]", span.category),
        },
    }
}

/// Apply the final (non-overlapping, start-sorted) span set to `text`.
///
/// Returns the masked text and one detail record per span, ordered by
/// ascending start offset. An empty span set yields the input unchanged.
pub fn apply(
    text: &str,
    map: &OffsetMap,
    spans: &[Span],
    mode: MaskMode,
) -> (String, Vec<RedactionDetail>) {
    let mut masked = text.to_string();
    let mut details = Vec::with_capacity(spans.len());

    for span in spans.iter().rev() {
        let replacement = replacement_for(span, mode);
        masked.replace_range(
            map.byte_of_char(span.start)..map.byte_of_char(span.end),
            &replacement,
        );
        details.push(RedactionDetail {
            source: span.source,
            category: span.category.clone(),
            original_text: span.text.clone(),
            replacement,
            start: span.start,
            end: span.end,
        });
    }

    details.reverse();
    (masked, details)
}
