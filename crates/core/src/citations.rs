use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

const CITATION_PATTERNS: [&str; 4] = [
    // Statutory anchors: "Section 438(2)", "Article 21", "Rule 3A".
    r"(?i)\b(?:section|article|rule|order)s?\s+\d+[A-Z]?(?:\(\d+\))?",
    // Named acts: a run of capitalized words ending in "Act, yyyy".
    r"\b(?:[A-Z][A-Za-z']*\s+)+Act,?\s+\d{4}",
    // AIR reporter: "AIR 1973 SC 1461".
    r"\bAIR\s+\d{4}\s+[A-Z][A-Za-z]*\s+\d+",
    // SCC reporter: "(1994) 3 SCC 1".
    r"\(\d{4}\)\s+\d+\s+SCC\s+\d+",
];

fn compiled_patterns() -> &'static Vec<Regex> {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        CITATION_PATTERNS
            .iter()
            .map(|pattern| Regex::new(pattern).expect("citation pattern is a checked literal"))
            .collect()
    })
}

/// Lifts statute and reporter references out of a passage for display next
/// to a candidate. First-seen order, duplicates removed.
pub fn extract_citations(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut citations = Vec::new();

    for pattern in compiled_patterns() {
        for found in pattern.find_iter(text) {
            let citation = found.as_str().trim().to_string();
            if seen.insert(citation.to_lowercase()) {
                citations.push(citation);
            }
        }
    }

    citations
}

#[cfg(test)]
mod tests {
    use super::extract_citations;

    #[test]
    fn statutory_sections_are_found() {
        let text = "The petitioner sought relief under Section 438(1) read with Article 21.";
        let citations = extract_citations(text);
        assert!(citations.contains(&"Section 438(1)".to_string()));
        assert!(citations.contains(&"Article 21".to_string()));
    }

    #[test]
    fn reporter_citations_are_found() {
        let text = "Kesavananda Bharati, AIR 1973 SC 1461; see also (1994) 3 SCC 1.";
        let citations = extract_citations(text);
        assert!(citations.contains(&"AIR 1973 SC 1461".to_string()));
        assert!(citations.contains(&"(1994) 3 SCC 1".to_string()));
    }

    #[test]
    fn named_acts_are_found_once() {
        let text = "Under the Companies Act, 1956 and again the Companies Act, 1956.";
        let citations = extract_citations(text);
        assert_eq!(
            citations
                .iter()
                .filter(|c| c.contains("Companies Act"))
                .count(),
            1
        );
    }

    #[test]
    fn plain_prose_yields_nothing() {
        assert!(extract_citations("The court adjourned for the day.").is_empty());
    }
}
