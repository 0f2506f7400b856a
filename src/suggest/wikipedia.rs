use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{SearchError, SearchResult};
use crate::settings::substitute_query;

use super::SuggestionSource;

/// Search endpoint used for completions. The article-page template for
/// finalized queries lives with the result navigator.
pub const WIKIPEDIA_SUGGEST_URL: &str =
    "https://en.wikipedia.org/w/api.php?action=query&generator=search&gsrsearch={{query}}&format=json";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    // An empty result set omits the query object entirely.
    query: Option<SearchBody>,
}

#[derive(Debug, Deserialize)]
struct SearchBody {
    #[serde(default)]
    pages: HashMap<String, Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    title: String,
}

/// Article-title lookups against the Wikipedia search API.
#[derive(Debug)]
pub struct WikipediaSuggestionSource {
    client: reqwest::Client,
    endpoint: String,
}

impl WikipediaSuggestionSource {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: WIKIPEDIA_SUGGEST_URL.to_string(),
        }
    }
}

impl Default for WikipediaSuggestionSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionSource for WikipediaSuggestionSource {
    /// Returns the page titles in whatever order the `pages` map yields.
    /// The API keys pages by id, so ranking order is best-effort only.
    async fn fetch_suggestions(&self, query: &str) -> SearchResult<Vec<String>> {
        let url = substitute_query(&self.endpoint, query);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| SearchError::network(source, format!("GET {url}")))?;
        let payload: SearchResponse = response.json().await.map_err(|source| {
            SearchError::parse(format!(
                "search response from {url} is not a page mapping: {source}"
            ))
        })?;

        let Some(body) = payload.query else {
            return Ok(Vec::new());
        };
        Ok(body.pages.into_values().map(|page| page.title).collect())
    }
}
