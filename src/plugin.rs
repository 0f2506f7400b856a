use std::sync::Arc;

use crate::error::SearchResult;
use crate::host::{PanelId, Workspace};
use crate::navigate::ResultNavigator;
use crate::prompt::{PromptSession, SubmitRequest};
use crate::settings::{Settings, SettingsEditor, SettingsStore};
use crate::suggest::{SearchMode, SuggestionProvider};

/// User-facing commands registered with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginCommand {
    OpenWebSearch,
    OpenWikipediaSearch,
}

impl PluginCommand {
    pub const ALL: [Self; 2] = [Self::OpenWebSearch, Self::OpenWikipediaSearch];

    pub fn id(self) -> &'static str {
        match self {
            Self::OpenWebSearch => "open-web-search",
            Self::OpenWikipediaSearch => "open-wikipedia-search",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::OpenWebSearch => "Open Web Search",
            Self::OpenWikipediaSearch => "Open Wikipedia Search",
        }
    }

    pub fn mode(self) -> SearchMode {
        match self {
            Self::OpenWebSearch => SearchMode::Web,
            Self::OpenWikipediaSearch => SearchMode::Wikipedia,
        }
    }
}

/// Host-facing entry point.
///
/// Owns the loaded settings and the injected host collaborators; opens search
/// sessions and routes finalized queries to the result navigator. One plugin
/// instance serves any number of consecutive sessions.
pub struct SearchPlugin {
    settings: Settings,
    store: Arc<dyn SettingsStore>,
    navigator: ResultNavigator,
}

impl SearchPlugin {
    /// Loads persisted settings (defaults on an empty or failing store) and
    /// wires the plugin against the host workspace.
    pub fn load(workspace: Arc<dyn Workspace>, store: Arc<dyn SettingsStore>) -> Self {
        let settings = Settings::load_from(store.as_ref());
        Self {
            settings,
            store,
            navigator: ResultNavigator::new(workspace),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Opens an incremental search session in `mode`.
    pub fn open_search(&self, mode: SearchMode) -> PromptSession<SuggestionProvider> {
        PromptSession::open(mode, &self.settings)
    }

    pub fn run_command(&self, command: PluginCommand) -> PromptSession<SuggestionProvider> {
        self.open_search(command.mode())
    }

    /// Hands a finalized query to the result navigator.
    pub fn submit(&self, request: &SubmitRequest) -> SearchResult<PanelId> {
        self.navigator
            .open_result(request.mode, &request.query, &self.settings)
    }

    /// Settings surface for the host's configuration UI; commits persist
    /// immediately.
    pub fn settings_editor(&mut self) -> SettingsEditor<'_> {
        SettingsEditor::new(&mut self.settings, self.store.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::error::{SearchError, SearchResult};
    use crate::host::{PanelId, PanelRequest, Workspace};
    use crate::prompt::SubmitRequest;
    use crate::settings::{Settings, SettingsStore};
    use crate::suggest::SearchMode;

    use super::{PluginCommand, SearchPlugin};

    #[derive(Default)]
    struct StubWorkspace {
        opened: Mutex<Vec<PanelRequest>>,
    }

    impl Workspace for StubWorkspace {
        fn open_embedded_page(&self, request: &PanelRequest) -> SearchResult<PanelId> {
            self.opened
                .lock()
                .expect("workspace lock should be held")
                .push(request.clone());
            Ok(PanelId(1))
        }

        fn focus_panel(&self, _panel: PanelId) -> SearchResult<()> {
            Ok(())
        }
    }

    struct StubStore(SearchResult<Option<Settings>>);

    impl SettingsStore for StubStore {
        fn load(&self) -> SearchResult<Option<Settings>> {
            match &self.0 {
                Ok(stored) => Ok(stored.clone()),
                Err(_) => Err(SearchError::workspace("stub load failure")),
            }
        }

        fn save(&self, _settings: &Settings) -> SearchResult<()> {
            Ok(())
        }
    }

    fn plugin_with_store(store: StubStore) -> (SearchPlugin, Arc<StubWorkspace>) {
        let workspace = Arc::new(StubWorkspace::default());
        let plugin = SearchPlugin::load(
            Arc::clone(&workspace) as Arc<dyn Workspace>,
            Arc::new(store),
        );
        (plugin, workspace)
    }

    #[test]
    fn command_table_maps_ids_names_and_modes() {
        assert_eq!(PluginCommand::ALL.len(), 2);
        assert_eq!(PluginCommand::OpenWebSearch.id(), "open-web-search");
        assert_eq!(PluginCommand::OpenWebSearch.name(), "Open Web Search");
        assert_eq!(PluginCommand::OpenWebSearch.mode(), SearchMode::Web);
        assert_eq!(
            PluginCommand::OpenWikipediaSearch.id(),
            "open-wikipedia-search"
        );
        assert_eq!(
            PluginCommand::OpenWikipediaSearch.mode(),
            SearchMode::Wikipedia
        );
    }

    #[test]
    fn empty_store_loads_defaults() {
        let (plugin, _workspace) = plugin_with_store(StubStore(Ok(None)));
        assert_eq!(*plugin.settings(), Settings::default());
    }

    #[test]
    fn failing_store_loads_defaults() {
        let (plugin, _workspace) = plugin_with_store(StubStore(Err(SearchError::workspace(
            "stub load failure",
        ))));
        assert_eq!(*plugin.settings(), Settings::default());
    }

    #[test]
    fn stored_settings_drive_submission() {
        let mut stored = Settings::default();
        stored.search_engine = "https://duckduckgo.com/?q={{query}}".to_string();
        let (plugin, workspace) = plugin_with_store(StubStore(Ok(Some(stored))));

        plugin
            .submit(&SubmitRequest {
                mode: SearchMode::Web,
                query: "cats".to_string(),
            })
            .expect("submission should open a panel");

        let opened = workspace.opened.lock().expect("workspace lock should be held");
        assert_eq!(opened[0].url, "https://duckduckgo.com/?q=cats");
        assert_eq!(opened[0].title, "Web: cats");
    }

    #[test]
    fn run_command_opens_a_session_in_the_command_mode() {
        let (plugin, _workspace) = plugin_with_store(StubStore(Ok(None)));
        let session = plugin.run_command(PluginCommand::OpenWikipediaSearch);
        assert_eq!(session.mode(), SearchMode::Wikipedia);
        assert!(session.is_open());
    }
}
