//! The masking engine facade.
//!
//! Ties the pipeline together: recognize → collect → resolve → redact.
//! Each invocation is a pure transformation over its input; the engine
//! holds only the read-only pattern catalog and the injected recognizer,
//! so it is freely shareable across threads.

use crate::collect::collect_candidates;
use crate::error::{EngineError, Result};
use crate::offsets::OffsetMap;
use crate::patterns::PatternCatalog;
use crate::recognize::{EntityRecognizer, RecognizerPolicy};
use crate::redact::apply;
use crate::resolve::resolve_conflicts;
use crate::span::{MaskMode, RedactionDetail};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Result of a mask operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskReport {
    /// The input with every final span replaced.
    pub masked_text: String,
    /// One record per redacted span, ascending by start offset.
    pub details: Vec<RedactionDetail>,
}

/// Span-detection-and-redaction engine.
pub struct MaskEngine {
    catalog: PatternCatalog,
    recognizer: Arc<dyn EntityRecognizer>,
    policy: RecognizerPolicy,
}

impl MaskEngine {
    /// Create an engine with the built-in catalog and the given recognizer.
    ///
    /// Fails if any built-in pattern does not compile; a broken catalog
    /// must never reach request time.
    pub fn new(recognizer: Arc<dyn EntityRecognizer>) -> Result<Self> {
        Ok(Self {
            catalog: PatternCatalog::builtin()?,
            recognizer,
            policy: RecognizerPolicy::default(),
        })
    }

    /// Create an engine with a caller-assembled catalog.
    pub fn with_catalog(catalog: PatternCatalog, recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self {
            catalog,
            recognizer,
            policy: RecognizerPolicy::default(),
        }
    }

    /// Set the behavior on recognizer failure.
    pub fn recognizer_policy(mut self, policy: RecognizerPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The engine's pattern catalog.
    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Mask sensitive spans of `text`.
    ///
    /// Empty input returns an empty report. Recognizer failure either
    /// fails the request or degrades to pattern-only detection, per the
    /// configured [`RecognizerPolicy`].
    pub fn mask(&self, text: &str, mode: MaskMode) -> Result<MaskReport> {
        if text.is_empty() {
            return Ok(MaskReport {
                masked_text: String::new(),
                details: Vec::new(),
            });
        }

        let entities = match self.recognizer.recognize(text) {
            Ok(entities) => entities,
            Err(err) => match self.policy {
                RecognizerPolicy::Fail => return Err(EngineError::Recognizer(err)),
                RecognizerPolicy::PatternOnly => {
                    warn!(error = %err, "recognizer failed, continuing pattern-only");
                    Vec::new()
                }
            },
        };

        let map = OffsetMap::new(text);
        let candidates = collect_candidates(text, &map, &self.catalog, &entities);
        let final_spans = resolve_conflicts(candidates);
        debug!(
            entities = entities.len(),
            spans = final_spans.len(),
            %mode,
            "resolved final span set"
        );

        let (masked_text, details) = apply(text, &map, &final_spans, mode);
        Ok(MaskReport {
            masked_text,
            details,
        })
    }
}
