use crate::models::CandidateSet;
use serde::{Deserialize, Serialize};

/// The named per-candidate prompt sections, applied uniformly to every
/// candidate in this order. Adding a section means adding a variant here and
/// a line in `BRIEF_SECTIONS`; nothing downstream special-cases a section.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PromptKind {
    CaseName,
    Facts,
    Holding,
    Analysis,
    Significance,
    RelatedLaws,
}

pub const BRIEF_SECTIONS: [PromptKind; 6] = [
    PromptKind::CaseName,
    PromptKind::Facts,
    PromptKind::Holding,
    PromptKind::Analysis,
    PromptKind::Significance,
    PromptKind::RelatedLaws,
];

impl PromptKind {
    pub fn label(&self) -> &'static str {
        match self {
            PromptKind::CaseName => "Case Name",
            PromptKind::Facts => "Facts",
            PromptKind::Holding => "Judgment",
            PromptKind::Analysis => "Analysis",
            PromptKind::Significance => "Significance",
            PromptKind::RelatedLaws => "Related Laws",
        }
    }

    /// Renders the full prompt for one candidate excerpt.
    pub fn render(&self, query: &str, excerpt: &str) -> String {
        let quoted = format!("\"{excerpt}\"");
        match self {
            PromptKind::CaseName => format!(
                "What is the name of the Indian case this excerpt likely belongs to? \
                 Provide only the name and citation if possible.\n\n{quoted}"
            ),
            PromptKind::Facts => format!(
                "State the facts of this case in 2-3 lines. \
                 Begin and end with a complete sentence.\n\n{quoted}"
            ),
            PromptKind::Holding => format!(
                "State the judgment held in 1-2 lines. What did the court decide? \
                 Ensure it starts and ends cleanly.\n\n{quoted}"
            ),
            PromptKind::Analysis => format!(
                "Analyze the following legal case excerpt in the context of the \
                 question: \"{query}\"\n\n{quoted}"
            ),
            PromptKind::Significance => format!(
                "Explain the significance of this case in relation to the query: \
                 \"{query}\". Begin and end with a complete sentence.\n\n{quoted}"
            ),
            PromptKind::RelatedLaws => format!(
                "List any legislation, rules, sections, or by-laws that the user \
                 should additionally refer to in order to better understand their \
                 query: \"{query}\"\n\n{quoted}"
            ),
        }
    }
}

/// Builds the combined-context synthesis prompt: every candidate excerpt,
/// quoted, in candidate order, separated by blank lines.
pub fn synthesis_prompt(query: &str, candidates: &CandidateSet) -> String {
    let combined_context = candidates
        .iter()
        .map(|candidate| format!("\"{}\"", candidate.text))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "The user asked: \"{query}\"\n\nUsing the following excerpts from legal \
         cases, provide a final detailed answer. End with a full stop.\n\n{combined_context}"
    )
}
