use std::sync::Arc;

use crate::error::SearchResult;
use crate::host::{PanelId, PanelRequest, Workspace};
use crate::settings::{Settings, substitute_query};
use crate::suggest::SearchMode;

/// Result-page template for wikipedia mode, distinct from the suggest API
/// endpoint.
pub const WIKIPEDIA_ARTICLE_URL: &str = "https://en.wikipedia.org/wiki/{{query}}";

/// Resolves the destination URL for a finalized query.
///
/// The query is substituted verbatim; reserved URL characters pass through
/// unchanged. Known limitation kept for compatibility with the configured
/// template contract.
pub fn resolve_result_url(mode: SearchMode, query: &str, settings: &Settings) -> String {
    let template = match mode {
        SearchMode::Web => settings.search_engine.as_str(),
        SearchMode::Wikipedia => WIKIPEDIA_ARTICLE_URL,
    };
    substitute_query(template, query)
}

/// Turns a finalized query into an embedded result panel.
pub struct ResultNavigator {
    workspace: Arc<dyn Workspace>,
}

impl ResultNavigator {
    pub fn new(workspace: Arc<dyn Workspace>) -> Self {
        Self { workspace }
    }

    /// Opens the resolved result in a new side-by-side embedded panel and
    /// gives it input focus.
    pub fn open_result(
        &self,
        mode: SearchMode,
        query: &str,
        settings: &Settings,
    ) -> SearchResult<PanelId> {
        let request = PanelRequest {
            url: resolve_result_url(mode, query, settings),
            title: format!("{}: {}", mode.label(), query),
        };

        let panel = self.workspace.open_embedded_page(&request)?;
        self.workspace.focus_panel(panel)?;
        Ok(panel)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::error::SearchResult;
    use crate::host::{PanelId, PanelRequest, Workspace};
    use crate::settings::Settings;
    use crate::suggest::SearchMode;

    use super::{ResultNavigator, resolve_result_url};

    #[derive(Default)]
    struct RecordingWorkspace {
        opened: Mutex<Vec<PanelRequest>>,
        focused: Mutex<Vec<PanelId>>,
    }

    impl Workspace for RecordingWorkspace {
        fn open_embedded_page(&self, request: &PanelRequest) -> SearchResult<PanelId> {
            let mut opened = self.opened.lock().expect("workspace lock should be held");
            opened.push(request.clone());
            Ok(PanelId(opened.len() as u64))
        }

        fn focus_panel(&self, panel: PanelId) -> SearchResult<()> {
            self.focused
                .lock()
                .expect("workspace lock should be held")
                .push(panel);
            Ok(())
        }
    }

    #[test]
    fn resolves_default_templates() {
        let settings = Settings::default();
        assert_eq!(
            resolve_result_url(SearchMode::Web, "cats", &settings),
            "https://www.google.com/search?q=cats"
        );
        assert_eq!(
            resolve_result_url(SearchMode::Wikipedia, "cats", &settings),
            "https://en.wikipedia.org/wiki/cats"
        );
    }

    #[test]
    fn resolves_overridden_web_template() {
        let mut settings = Settings::default();
        settings.search_engine = "https://duckduckgo.com/?q={{query}}".to_string();
        assert_eq!(
            resolve_result_url(SearchMode::Web, "cats", &settings),
            "https://duckduckgo.com/?q=cats"
        );
    }

    #[test]
    fn substitution_is_verbatim_even_for_reserved_characters() {
        let settings = Settings::default();
        assert_eq!(
            resolve_result_url(SearchMode::Web, "cats & dogs #1", &settings),
            "https://www.google.com/search?q=cats & dogs #1"
        );
    }

    #[test]
    fn open_result_opens_then_focuses_a_titled_panel() {
        let workspace = Arc::new(RecordingWorkspace::default());
        let navigator = ResultNavigator::new(Arc::clone(&workspace) as Arc<dyn Workspace>);

        let panel = navigator
            .open_result(SearchMode::Wikipedia, "cats", &Settings::default())
            .expect("panel should open");

        let opened = workspace.opened.lock().expect("workspace lock should be held");
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0].url, "https://en.wikipedia.org/wiki/cats");
        assert_eq!(opened[0].title, "Wikipedia: cats");

        let focused = workspace.focused.lock().expect("workspace lock should be held");
        assert_eq!(focused.as_slice(), &[panel]);
    }
}
