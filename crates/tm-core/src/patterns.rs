//! Pattern catalog: the fixed regular-expression detectors.
//!
//! Each rule pairs a category label with a compiled regex. The catalog is
//! built once at engine construction and is read-only afterwards, so it is
//! safe to share across threads without synchronization. A rule that fails
//! to compile is a fatal configuration error at construction time.

use crate::error::{EngineError, Result};
use crate::offsets::OffsetMap;
use crate::span::{Span, SpanSource};
use regex::Regex;

/// Built-in detector rules, in declaration order. Declaration order is the
/// final tie-break when overlapping matches are otherwise equal, so it is
/// part of the observable contract.
const BUILTIN_RULES: &[(&str, &str)] = &[
    // 9-digit passport number, word-bounded
    ("PASSPORT", r"\b[0-9]{9}\b"),
    // local@domain.tld-shaped token
    ("EMAIL", r"[A-Za-z0-9_.+-]+@[A-Za-z0-9-]+\.[A-Za-z0-9.-]+"),
    // 3-3-4 digit groups, e.g. 123-456-7890 or 123.456.7890
    ("PHONE", r"\b\d{3}[-.\s]?\d{3}[-.\s]?\d{4}\b"),
    // numeric date-like token, e.g. 12/31/2020 or 12-31-20
    ("DATE", r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b"),
    // house number, 1-3 words, street-type suffix
    (
        "ADDRESS",
        r"\b\d{1,5}\s(?:[A-Za-z0-9.-]+\s){1,3}(?:Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Lane|Ln)\b",
    ),
];

/// One named detector: a category label and its compiled pattern.
#[derive(Debug, Clone)]
pub struct DetectorRule {
    pub category: String,
    pub pattern: Regex,
}

impl DetectorRule {
    /// Compile a rule, failing on an invalid pattern.
    pub fn compile(category: &str, pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| EngineError::InvalidPattern {
            category: category.to_string(),
            source,
        })?;
        Ok(Self {
            category: category.to_string(),
            pattern,
        })
    }
}

/// Ordered set of detector rules.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    rules: Vec<DetectorRule>,
}

impl PatternCatalog {
    /// Build the catalog of built-in rules.
    pub fn builtin() -> Result<Self> {
        let mut rules = Vec::with_capacity(BUILTIN_RULES.len());
        for (category, pattern) in BUILTIN_RULES {
            rules.push(DetectorRule::compile(category, pattern)?);
        }
        Ok(Self { rules })
    }

    /// An empty catalog, for callers composing a fully custom rule set.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a custom rule after the built-ins.
    pub fn push_rule(&mut self, category: &str, pattern: &str) -> Result<()> {
        self.rules.push(DetectorRule::compile(category, pattern)?);
        Ok(())
    }

    /// The rules, in evaluation order.
    pub fn rules(&self) -> &[DetectorRule] {
        &self.rules
    }

    /// Run every rule over `text` and emit one span per leftmost
    /// non-overlapping match. Rules may overlap each other and the
    /// recognizer's entities; conflict resolution happens later.
    pub fn detect(&self, text: &str, map: &OffsetMap) -> Vec<Span> {
        let mut spans = Vec::new();
        for rule in &self.rules {
            for m in rule.pattern.find_iter(text) {
                // Zero-width matches (possible with custom rules) carry no
                // text to redact.
                if m.start() == m.end() {
                    continue;
                }
                spans.push(Span::new(
                    map.char_of_byte(m.start()),
                    map.char_of_byte(m.end()),
                    SpanSource::Pattern,
                    rule.category.as_str(),
                    m.as_str(),
                ));
            }
        }
        spans
    }
}
