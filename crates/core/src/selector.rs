use crate::models::{Candidate, CandidateSet, SearchResult, SelectionOptions};
use std::collections::HashSet;

/// Transforms an ordered, possibly duplicate-laden, possibly oversized raw
/// result sequence into a bounded `CandidateSet`.
///
/// `raw` must already be sorted ascending by `distance_score`; the selector
/// never re-sorts, so an unsorted input silently produces an order-incorrect
/// set. The dedup key is the trimmed, *untruncated* passage text: two
/// passages identical only within their first `truncate_chars` characters
/// but differing later are kept as distinct candidates.
///
/// Empty input or a zero cap yields an empty set, never an error. Output
/// length is `min(cap, unique passages in raw)` and relative order matches
/// the input.
pub fn select_candidates(raw: &[SearchResult], options: &SelectionOptions) -> CandidateSet {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut candidates = Vec::new();

    for hit in raw {
        if candidates.len() >= options.cap {
            break;
        }

        let trimmed = hit.passage.trim();
        if !seen.insert(trimmed) {
            continue;
        }

        candidates.push(Candidate {
            index: candidates.len() + 1,
            text: truncate_chars(trimmed, options.truncate_chars),
            match_percent: match_percent(hit.distance_score),
        });
    }

    CandidateSet { candidates }
}

/// Display transform from a distance to a "match" percentage. Not clamped:
/// distances outside [0, 1] produce values outside [0, 100].
pub fn match_percent(distance_score: f64) -> f64 {
    ((1.0 - distance_score) * 100.0 * 100.0).round() / 100.0
}

/// Character-count truncation on a char boundary. Not word-boundary aware;
/// cutting mid-word is accepted behavior.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_offset, _)) => text[..byte_offset].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(cap: usize) -> SelectionOptions {
        SelectionOptions {
            cap,
            ..SelectionOptions::default()
        }
    }

    #[test]
    fn duplicate_passages_are_dropped_in_order() {
        let raw = vec![
            SearchResult::new("Case A text", 0.10),
            SearchResult::new("Case A text", 0.12),
            SearchResult::new("Case B text", 0.20),
        ];

        let set = select_candidates(&raw, &options(5));

        assert_eq!(
            set.candidates,
            vec![
                Candidate {
                    index: 1,
                    text: "Case A text".to_string(),
                    match_percent: 90.0,
                },
                Candidate {
                    index: 2,
                    text: "Case B text".to_string(),
                    match_percent: 80.0,
                },
            ]
        );
    }

    #[test]
    fn long_passages_are_truncated_to_the_limit() {
        let raw: Vec<SearchResult> = (0..15)
            .map(|i| SearchResult::new(format!("{i} {}", "x".repeat(3_000)), 0.01 * i as f64))
            .collect();

        let set = select_candidates(&raw, &options(5));

        assert_eq!(set.len(), 5);
        for candidate in set.iter() {
            assert_eq!(candidate.text.chars().count(), 2_500);
        }
        assert_eq!(set.candidates[2].match_percent, 98.0);
    }

    #[test]
    fn empty_input_yields_empty_set() {
        let set = select_candidates(&[], &options(5));
        assert!(set.is_empty());
    }

    #[test]
    fn zero_cap_yields_empty_set() {
        let raw = vec![SearchResult::new("Case A text", 0.10)];
        let set = select_candidates(&raw, &options(0));
        assert!(set.is_empty());
    }

    #[test]
    fn under_filled_set_is_not_an_error() {
        let raw = vec![
            SearchResult::new("first", 0.1),
            SearchResult::new("second", 0.2),
            SearchResult::new("third", 0.3),
        ];

        let set = select_candidates(&raw, &options(5));

        assert_eq!(set.len(), 3);
        let indices: Vec<usize> = set.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn cap_stops_the_walk_early() {
        let raw: Vec<SearchResult> = (0..10)
            .map(|i| SearchResult::new(format!("passage {i}"), 0.05 * i as f64))
            .collect();

        let set = select_candidates(&raw, &options(4));

        assert_eq!(set.len(), 4);
        assert_eq!(set.candidates[3].text, "passage 3");
    }

    #[test]
    fn dedup_key_uses_trimmed_text() {
        let raw = vec![
            SearchResult::new("  spaced out  ", 0.1),
            SearchResult::new("spaced out", 0.2),
        ];

        let set = select_candidates(&raw, &options(5));

        assert_eq!(set.len(), 1);
        assert_eq!(set.candidates[0].text, "spaced out");
    }

    #[test]
    fn dedup_key_is_the_untruncated_passage() {
        let shared_prefix = "y".repeat(2_500);
        let raw = vec![
            SearchResult::new(format!("{shared_prefix} tail one"), 0.1),
            SearchResult::new(format!("{shared_prefix} tail two"), 0.2),
        ];

        let set = select_candidates(&raw, &options(5));

        // Identical within the truncation window but distinct beyond it.
        assert_eq!(set.len(), 2);
        assert_eq!(set.candidates[0].text, set.candidates[1].text);
    }

    #[test]
    fn empty_passages_dedup_to_one_candidate() {
        let raw = vec![
            SearchResult::new("", 0.1),
            SearchResult::new("   ", 0.2),
            SearchResult::new("real content", 0.3),
        ];

        let set = select_candidates(&raw, &options(5));

        assert_eq!(set.len(), 2);
        assert_eq!(set.candidates[0].text, "");
        assert_eq!(set.candidates[1].text, "real content");
    }

    #[test]
    fn match_percent_is_not_clamped() {
        assert_eq!(match_percent(1.25), -25.0);
        assert_eq!(match_percent(-0.5), 150.0);
        assert_eq!(match_percent(0.123456), 87.65);
    }

    #[test]
    fn truncation_respects_multibyte_boundaries() {
        let raw = vec![SearchResult::new("क़ानून".repeat(1_000), 0.1)];

        let set = select_candidates(&raw, &options(1));

        assert_eq!(set.candidates[0].text.chars().count(), 2_500);
    }

    #[test]
    fn already_unique_input_passes_through() {
        let raw = vec![
            SearchResult::new("alpha", 0.10),
            SearchResult::new("beta", 0.25),
        ];

        let set = select_candidates(&raw, &options(5));

        assert_eq!(set.len(), raw.len());
        for (candidate, hit) in set.iter().zip(raw.iter()) {
            assert_eq!(candidate.text, hit.passage);
        }
    }
}
