mod engine;
mod guard;
mod web;
mod wikipedia;

use std::future::Future;

pub use engine::{LookupEngine, LookupEvent};
pub use guard::RequestGuard;
pub use web::WebSuggestionSource;
pub use wikipedia::{WIKIPEDIA_SUGGEST_URL, WikipediaSuggestionSource};

use crate::error::SearchResult;
use crate::settings::Settings;

/// Search mode, fixed for the lifetime of one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchMode {
    Web,
    Wikipedia,
}

impl SearchMode {
    pub fn id(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Wikipedia => "wikipedia",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "web" => Some(Self::Web),
            "wikipedia" => Some(Self::Wikipedia),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Web => "Web",
            Self::Wikipedia => "Wikipedia",
        }
    }
}

/// One outbound autocomplete lookup.
///
/// One request per call; no caching, no retry. Failures surface as
/// [`SearchError`](crate::error::SearchError) and the session recovers them
/// as zero suggestions for that keystroke.
pub trait SuggestionSource: Send + Sync + 'static {
    fn fetch_suggestions(
        &self,
        query: &str,
    ) -> impl Future<Output = SearchResult<Vec<String>>> + Send;
}

/// Mode-tagged suggestion source, selected once at session creation.
#[derive(Debug)]
pub enum SuggestionProvider {
    Web(WebSuggestionSource),
    Wikipedia(WikipediaSuggestionSource),
}

impl SuggestionProvider {
    pub fn for_mode(mode: SearchMode, settings: &Settings) -> Self {
        match mode {
            SearchMode::Web => Self::Web(WebSuggestionSource::new(
                settings.search_engine_query_api.clone(),
            )),
            SearchMode::Wikipedia => Self::Wikipedia(WikipediaSuggestionSource::new()),
        }
    }
}

impl SuggestionSource for SuggestionProvider {
    async fn fetch_suggestions(&self, query: &str) -> SearchResult<Vec<String>> {
        match self {
            Self::Web(source) => source.fetch_suggestions(query).await,
            Self::Wikipedia(source) => source.fetch_suggestions(query).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SearchMode;

    #[test]
    fn mode_ids_round_trip_through_parse() {
        for mode in [SearchMode::Web, SearchMode::Wikipedia] {
            assert_eq!(SearchMode::parse(mode.id()), Some(mode));
        }
        assert_eq!(SearchMode::parse("gopher"), None);
    }
}
