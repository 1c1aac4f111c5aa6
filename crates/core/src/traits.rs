use crate::error::{GenerationError, SearchError};
use crate::models::SearchResult;
use async_trait::async_trait;

/// Similarity search over a precomputed vector index. Implementations must
/// return at most `k` hits sorted ascending by distance (best match first);
/// the candidate selector depends on that order and never re-sorts.
#[async_trait]
pub trait SimilaritySearch {
    async fn search(&self, query: &str, k: usize) -> Result<Vec<SearchResult>, SearchError>;
}

/// A text-completion backend used to draft brief sections and summaries.
#[async_trait]
pub trait TextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
