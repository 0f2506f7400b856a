use serde_json::Value;

use crate::error::{SearchError, SearchResult};
use crate::settings::substitute_query;

use super::SuggestionSource;

/// Suggest-API payload: a 4-element tuple whose second element carries the
/// completions for the partial query.
type SuggestPayload = (String, Vec<String>, Value, Value);

/// Autocomplete lookups against a search engine's suggest API.
///
/// The endpoint template comes from settings so users can point the panel at
/// any engine exposing the firefox-client response shape.
#[derive(Debug)]
pub struct WebSuggestionSource {
    client: reqwest::Client,
    suggest_template: String,
}

impl WebSuggestionSource {
    pub fn new(suggest_template: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            suggest_template: suggest_template.into(),
        }
    }
}

impl SuggestionSource for WebSuggestionSource {
    /// Returns the suggestion array verbatim: order preserved, no dedup, no
    /// truncation. The session trims the rendered list, not the source.
    async fn fetch_suggestions(&self, query: &str) -> SearchResult<Vec<String>> {
        let url = substitute_query(&self.suggest_template, query);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| SearchError::network(source, format!("GET {url}")))?;
        let payload: SuggestPayload = response.json().await.map_err(|source| {
            SearchError::parse(format!(
                "suggest response from {url} is not a 4-element tuple: {source}"
            ))
        })?;

        Ok(payload.1)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::error::SearchError;

    use super::super::SuggestionSource;
    use super::WebSuggestionSource;

    fn template_for(server: &MockServer) -> String {
        format!(
            "{}/complete/search?client=firefox&q={{{{query}}}}",
            server.uri()
        )
    }

    #[tokio::test]
    async fn returns_suggestion_array_verbatim() {
        let server = MockServer::start().await;
        let completions: Vec<String> = (0..12).map(|i| format!("rust {i}")).collect();
        Mock::given(method("GET"))
            .and(path("/complete/search"))
            .and(query_param("client", "firefox"))
            .and(query_param("q", "rust"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!(["rust", completions, [], {}])),
            )
            .mount(&server)
            .await;

        let source = WebSuggestionSource::new(template_for(&server));
        let suggestions = source
            .fetch_suggestions("rust")
            .await
            .expect("lookup should succeed");

        // Order preserved and nothing truncated; trimming to the rendered
        // maximum is the session's job.
        assert_eq!(suggestions, completions);
    }

    #[tokio::test]
    async fn rejects_payload_that_is_not_a_four_element_tuple() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/complete/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(["rust", ["a"]])))
            .mount(&server)
            .await;

        let source = WebSuggestionSource::new(template_for(&server));
        let err = source
            .fetch_suggestions("rust")
            .await
            .expect_err("short tuple should not parse");
        assert!(matches!(err, SearchError::Parse { .. }));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_network_error() {
        let source = WebSuggestionSource::new(
            "http://127.0.0.1:9/complete/search?client=firefox&q={{query}}",
        );
        let err = source
            .fetch_suggestions("rust")
            .await
            .expect_err("connection should fail");
        assert!(matches!(err, SearchError::Network { .. }));
    }
}
