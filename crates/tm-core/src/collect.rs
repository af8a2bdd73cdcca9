//! Candidate collection: pattern matches plus semantic entities.

use crate::offsets::OffsetMap;
use crate::patterns::PatternCatalog;
use crate::recognize::{Entity, SEMANTIC_CATEGORIES};
use crate::span::{Span, SpanSource};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use tracing::warn;

static SEMANTIC_LABELS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| SEMANTIC_CATEGORIES.iter().copied().collect());

/// Merge pattern-catalog matches and recognizer entities into one candidate
/// list. Candidates may overlap freely; conflict resolution happens later.
///
/// Entities outside the consumed category set are ignored. Entities with an
/// empty or out-of-bounds span violate the recognizer contract and are
/// dropped rather than propagated.
pub fn collect_candidates(
    text: &str,
    map: &OffsetMap,
    catalog: &PatternCatalog,
    entities: &[Entity],
) -> Vec<Span> {
    let mut candidates = catalog.detect(text, map);

    for entity in entities {
        if !SEMANTIC_LABELS.contains(entity.category.as_str()) {
            continue;
        }
        if entity.start >= entity.end || entity.end > map.char_len() {
            warn!(
                category = %entity.category,
                start = entity.start,
                end = entity.end,
                "dropping entity with invalid span"
            );
            continue;
        }
        candidates.push(Span::new(
            entity.start,
            entity.end,
            SpanSource::Semantic,
            entity.category.as_str(),
            map.slice(text, entity.start, entity.end),
        ));
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(start: usize, end: usize, category: &str, text: &str) -> Entity {
        Entity {
            start,
            end,
            category: category.to_string(),
            text: text.to_string(),
        }
    }

    fn candidates(text: &str, entities: &[Entity]) -> Vec<Span> {
        let catalog = PatternCatalog::builtin().unwrap();
        let map = OffsetMap::new(text);
        collect_candidates(text, &map, &catalog, entities)
    }

    #[test]
    fn test_merges_both_sources() {
        let text = "Alice's email is a@b.com";
        let spans = candidates(text, &[entity(0, 5, "PERSON", "Alice")]);

        assert!(spans
            .iter()
            .any(|s| s.source == SpanSource::Pattern && s.category == "EMAIL"));
        assert!(spans
            .iter()
            .any(|s| s.source == SpanSource::Semantic && s.category == "PERSON"));
    }

    #[test]
    fn test_ignores_foreign_categories() {
        // spaCy-style recognizers emit DATE, MONEY, CARDINAL etc. too.
        let spans = candidates(
            "paid fifty dollars",
            &[entity(5, 18, "MONEY", "fifty dollars")],
        );
        assert!(spans.is_empty());
    }

    #[test]
    fn test_drops_out_of_bounds_entity() {
        let spans = candidates("short", &[entity(2, 99, "PERSON", "???")]);
        assert!(spans.is_empty());
    }

    #[test]
    fn test_drops_empty_entity_span() {
        let spans = candidates("Alice", &[entity(3, 3, "PERSON", "")]);
        assert!(spans.is_empty());
    }

    #[test]
    fn test_entity_text_taken_from_input_not_recognizer() {
        // The recognizer's `text` field is advisory; the span text recorded
        // by the engine always comes from the input at the stated offsets.
        let spans = candidates("Alice", &[entity(0, 5, "PERSON", "stale")]);
        assert_eq!(spans[0].text, "Alice");
    }

    #[test]
    fn test_tolerates_zero_entities() {
        let spans = candidates("nothing sensitive here", &[]);
        assert!(spans.is_empty());
    }
}
