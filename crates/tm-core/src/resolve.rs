//! Conflict resolution: pick a non-overlapping span subset.
//!
//! Precedence, applied as a stable sort followed by a greedy sweep:
//! earlier start first; at equal start the longer span, then semantic over
//! pattern, then catalog declaration order (via sort stability). Semantic
//! spans are drawn from linguistic context and outrank pattern matches when
//! they collide; longer spans capture more of a sensitive token.

use crate::span::Span;

/// Reduce candidates to the final span set: non-overlapping, sorted by
/// `start`, deterministic regardless of detection order.
pub fn resolve_conflicts(mut candidates: Vec<Span>) -> Vec<Span> {
    candidates.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then(b.char_len().cmp(&a.char_len()))
            .then(a.source.rank().cmp(&b.source.rank()))
    });

    let mut accepted: Vec<Span> = Vec::with_capacity(candidates.len());
    for span in candidates {
        match accepted.last() {
            Some(last) if span.start < last.end => {} // overlaps, drop
            _ => accepted.push(span),
        }
    }
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::SpanSource;

    fn pattern(start: usize, end: usize, category: &str) -> Span {
        Span::new(start, end, SpanSource::Pattern, category, "x".repeat(end - start))
    }

    fn semantic(start: usize, end: usize, category: &str) -> Span {
        Span::new(start, end, SpanSource::Semantic, category, "x".repeat(end - start))
    }

    #[test]
    fn test_disjoint_spans_all_kept() {
        let resolved = resolve_conflicts(vec![pattern(10, 15, "EMAIL"), semantic(0, 5, "PERSON")]);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].start, 0);
        assert_eq!(resolved[1].start, 10);
    }

    #[test]
    fn test_semantic_wins_over_contained_pattern() {
        // A PERSON span fully containing a passport-like digit run.
        let resolved = resolve_conflicts(vec![pattern(4, 13, "PASSPORT"), semantic(0, 15, "PERSON")]);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].category, "PERSON");
    }

    #[test]
    fn test_equal_start_prefers_longer() {
        let resolved = resolve_conflicts(vec![pattern(0, 4, "DATE"), pattern(0, 15, "ADDRESS")]);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].category, "ADDRESS");
    }

    #[test]
    fn test_equal_start_and_length_prefers_semantic() {
        let resolved = resolve_conflicts(vec![pattern(0, 9, "PASSPORT"), semantic(0, 9, "PERSON")]);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].source, SpanSource::Semantic);
    }

    #[test]
    fn test_partial_overlap_drops_later_span() {
        let resolved = resolve_conflicts(vec![pattern(0, 8, "PHONE"), pattern(5, 12, "DATE")]);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].category, "PHONE");
    }

    #[test]
    fn test_adjacent_spans_do_not_conflict() {
        // [0,5) and [5,9) share no character index.
        let resolved = resolve_conflicts(vec![pattern(5, 9, "DATE"), semantic(0, 5, "GPE")]);
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn test_order_independence() {
        let a = vec![pattern(4, 13, "PASSPORT"), semantic(0, 15, "PERSON"), pattern(20, 27, "EMAIL")];
        let mut b = a.clone();
        b.reverse();
        assert_eq!(resolve_conflicts(a), resolve_conflicts(b));
    }

    #[test]
    fn test_result_is_sorted_and_non_overlapping() {
        let resolved = resolve_conflicts(vec![
            pattern(8, 14, "DATE"),
            semantic(0, 10, "ORG"),
            pattern(12, 20, "PHONE"),
            semantic(18, 25, "LOC"),
        ]);
        for pair in resolved.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    }
}
