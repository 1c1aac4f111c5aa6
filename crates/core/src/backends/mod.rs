pub mod openai;
pub mod qdrant;

pub use openai::OpenAiCompletions;
pub use qdrant::QdrantSearchClient;
