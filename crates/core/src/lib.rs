pub mod backends;
pub mod citations;
pub mod embeddings;
pub mod error;
pub mod models;
pub mod prompts;
pub mod researcher;
pub mod selector;
pub mod traits;

pub use backends::{OpenAiCompletions, QdrantSearchClient};
pub use citations::extract_citations;
pub use embeddings::{CharacterNgramEmbedder, Embedder, DEFAULT_EMBEDDING_DIMENSIONS};
pub use error::{GenerationError, SearchError};
pub use models::{
    BriefSection, Candidate, CandidateSet, CaseBrief, ResearchQuery, ResearchReport, SearchResult,
    SelectionOptions,
};
pub use prompts::{synthesis_prompt, PromptKind, BRIEF_SECTIONS};
pub use researcher::ResearchCoordinator;
pub use selector::{match_percent, select_candidates};
pub use traits::{SimilaritySearch, TextGenerator};
