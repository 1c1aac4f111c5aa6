use crate::embeddings::{CharacterNgramEmbedder, Embedder};
use crate::error::SearchError;
use crate::models::SearchResult;
use crate::traits::SimilaritySearch;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use url::Url;

/// Similarity search against a qdrant collection holding the prebuilt
/// case-law index. The collection must be configured with a distance metric
/// (not a similarity one) so hits arrive sorted ascending, best match first;
/// this client passes scores through untouched.
pub struct QdrantSearchClient {
    endpoint: String,
    collection: String,
    api_key: Option<String>,
    client: Client,
    embedder: CharacterNgramEmbedder,
}

impl QdrantSearchClient {
    pub fn new(
        endpoint: impl Into<String>,
        collection: impl Into<String>,
        embedder: CharacterNgramEmbedder,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            collection: collection.into(),
            api_key: None,
            client: Client::new(),
            embedder,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

#[async_trait]
impl SimilaritySearch for QdrantSearchClient {
    async fn search(&self, query: &str, k: usize) -> Result<Vec<SearchResult>, SearchError> {
        let query_vector = self.embedder.embed(query);

        let url = Url::parse(&self.endpoint)?.join(&format!(
            "collections/{}/points/search",
            self.collection
        ))?;

        let mut request = self
            .client
            .post(url)
            .json(&json!({
                "vector": query_vector,
                "limit": k,
                "with_payload": true,
            }));

        if let Some(api_key) = &self.api_key {
            request = request.header("api-key", api_key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(SearchError::BackendResponse {
                backend: "qdrant".to_string(),
                details: response.status().to_string(),
            });
        }

        let parsed: Value = response.json().await?;
        let hits = parsed
            .pointer("/result")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        let mut results = Vec::new();
        for hit in hits {
            let passage = hit
                .pointer("/payload/passage")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let distance_score = hit.pointer("/score").and_then(Value::as_f64).unwrap_or(0.0);

            results.push(SearchResult {
                passage,
                distance_score,
            });
        }

        Ok(results)
    }
}
