//! Fuzz target for recognizer output handling.
//!
//! Arbitrary bytes through the entity JSON deserializer, and an engine run
//! with whatever parses, must never panic. Invalid entity spans are the
//! recognizer breaking its contract; the engine drops them, it does not
//! crash on them.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::Arc;
use tm_core::{Entity, MaskEngine, MaskMode, StaticRecognizer};

fuzz_target!(|data: &[u8]| {
    let Ok(entities) = serde_json::from_slice::<Vec<Entity>>(data) else {
        return;
    };
    let engine = MaskEngine::new(Arc::new(StaticRecognizer::new(entities))).unwrap();
    let _ = engine.mask("Alice mailed a@b.com on 1/2/2003", MaskMode::Full);
});
