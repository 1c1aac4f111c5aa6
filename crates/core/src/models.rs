use crate::prompts::PromptKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single raw match from the similarity backend. `distance_score` is a
/// distance, not a probability: lower means closer, and no range is
/// guaranteed. Backends return hits pre-sorted ascending by score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub passage: String,
    pub distance_score: f64,
}

impl SearchResult {
    pub fn new(passage: impl Into<String>, distance_score: f64) -> Self {
        Self {
            passage: passage.into(),
            distance_score,
        }
    }
}

/// A deduplicated, length-bounded, display-ready wrapper around a retrieved
/// passage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    /// 1-based position in the final candidate list, used for display
    /// numbering.
    pub index: usize,
    /// Passage text truncated to `SelectionOptions::truncate_chars`
    /// characters. Truncation may cut mid-word.
    pub text: String,
    /// `(1 - distance_score) * 100` rounded to two decimals. Purely a display
    /// transform; may fall outside [0, 100] when the distance does.
    pub match_percent: f64,
}

/// Ordered output of the candidate selector. Never longer than the configured
/// cap, never holds two candidates derived from the same trimmed passage,
/// never mutated after construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CandidateSet {
    pub candidates: Vec<Candidate>,
}

impl CandidateSet {
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }
}

/// Caller-owned knobs for the candidate selector. All three are adjustable;
/// the defaults are the observed production values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionOptions {
    /// Maximum characters kept per candidate passage.
    pub truncate_chars: usize,
    /// Raw results requested from the search backend. Must be >= `cap` or
    /// the set may end up under-filled after dedup.
    pub over_fetch: usize,
    /// Maximum number of unique candidates retained.
    pub cap: usize,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            truncate_chars: 2_500,
            over_fetch: 15,
            cap: 5,
        }
    }
}

/// A research question plus the selection knobs to apply to its results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResearchQuery {
    pub text: String,
    pub selection: SelectionOptions,
}

impl ResearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selection: SelectionOptions::default(),
        }
    }
}

/// One generated section of a case brief, e.g. the facts or the holding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BriefSection {
    pub kind: PromptKind,
    pub text: String,
}

/// Per-candidate analysis: the ordered brief sections plus citations lifted
/// straight from the passage text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseBrief {
    pub candidate: Candidate,
    pub sections: Vec<BriefSection>,
    pub citations: Vec<String>,
}

/// Output of a research run, in either of the two view modes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ResearchReport {
    CaseByCase {
        query: String,
        generated_at: DateTime<Utc>,
        briefs: Vec<CaseBrief>,
    },
    Summary {
        query: String,
        generated_at: DateTime<Utc>,
        answer: String,
    },
}
