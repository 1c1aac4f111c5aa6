use crate::citations::extract_citations;
use crate::error::{GenerationError, SearchError};
use crate::models::{BriefSection, CandidateSet, CaseBrief, ResearchQuery, ResearchReport};
use crate::prompts::{synthesis_prompt, BRIEF_SECTIONS};
use crate::selector::select_candidates;
use crate::traits::{SimilaritySearch, TextGenerator};
use chrono::Utc;
use tracing::debug;

/// Drives one research run: over-fetch from the similarity backend, select
/// candidates, then either brief each case or synthesize a single answer.
pub struct ResearchCoordinator<S, G>
where
    S: SimilaritySearch,
    G: TextGenerator,
{
    search: S,
    generator: G,
}

impl<S, G> ResearchCoordinator<S, G>
where
    S: SimilaritySearch + Send + Sync,
    G: TextGenerator + Send + Sync,
{
    pub fn new(search: S, generator: G) -> Self {
        Self { search, generator }
    }

    /// Fetches `over_fetch` raw results and runs the candidate selector.
    /// Retrieval alone performs no generation calls.
    pub async fn retrieve(&self, query: &ResearchQuery) -> Result<CandidateSet, SearchError> {
        if query.text.trim().is_empty() {
            return Err(SearchError::Request("query is empty".to_string()));
        }

        let raw = self
            .search
            .search(&query.text, query.selection.over_fetch)
            .await?;
        let candidates = select_candidates(&raw, &query.selection);

        debug!(
            raw_hits = raw.len(),
            selected = candidates.len(),
            cap = query.selection.cap,
            "candidate selection"
        );

        Ok(candidates)
    }

    /// Case-by-case view: applies every brief section to every candidate, in
    /// section order, and attaches citations found in the excerpt.
    pub async fn analyze(&self, query: &ResearchQuery) -> Result<ResearchReport, GenerationError> {
        let candidates = self.retrieve(query).await?;

        let mut briefs = Vec::new();
        for candidate in candidates.candidates {
            let mut sections = Vec::new();
            for kind in BRIEF_SECTIONS {
                let prompt = kind.render(&query.text, &candidate.text);
                let text = self.generator.generate(&prompt).await?;
                sections.push(BriefSection { kind, text });
            }

            let citations = extract_citations(&candidate.text);
            briefs.push(CaseBrief {
                candidate,
                sections,
                citations,
            });
        }

        Ok(ResearchReport::CaseByCase {
            query: query.text.clone(),
            generated_at: Utc::now(),
            briefs,
        })
    }

    /// Summary view: one synthesis prompt over the combined candidate
    /// context. The answer always ends with a full stop.
    pub async fn synthesize(
        &self,
        query: &ResearchQuery,
    ) -> Result<ResearchReport, GenerationError> {
        let candidates = self.retrieve(query).await?;

        let prompt = synthesis_prompt(&query.text, &candidates);
        let mut answer = self.generator.generate(&prompt).await?;
        if !answer.ends_with('.') {
            answer.push('.');
        }

        Ok(ResearchReport::Summary {
            query: query.text.clone(),
            generated_at: Utc::now(),
            answer,
        })
    }
}
