use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{SearchError, SearchResult};

/// Placeholder token replaced with the runtime query in every URL template.
pub const QUERY_PLACEHOLDER: &str = "{{query}}";

const DEFAULT_SEARCH_ENGINE: &str = "https://www.google.com/search?q={{query}}";
const DEFAULT_SEARCH_ENGINE_QUERY_API: &str =
    "https://suggestqueries.google.com/complete/search?client=firefox&q={{query}}";

/// URL templates driving web-mode lookups and result pages.
///
/// Stored values win over defaults; a partially stored document falls back to
/// the default for each missing key.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub search_engine: String,
    pub search_engine_query_api: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            search_engine: DEFAULT_SEARCH_ENGINE.to_string(),
            search_engine_query_api: DEFAULT_SEARCH_ENGINE_QUERY_API.to_string(),
        }
    }
}

impl Settings {
    /// Loads persisted settings, falling back to defaults when the store is
    /// empty or failing. A load failure is logged and never fatal.
    pub fn load_from(store: &dyn SettingsStore) -> Self {
        match store.load() {
            Ok(Some(stored)) => stored,
            Ok(None) => Self::default(),
            Err(err) => {
                warn!("loading settings failed, using defaults: {err}");
                Self::default()
            }
        }
    }
}

/// Replaces the `{{query}}` placeholder with `query`, verbatim.
///
/// Raw substring substitution: reserved URL characters in the query pass
/// through to the resolved URL unchanged.
pub fn substitute_query(template: &str, query: &str) -> String {
    template.replace(QUERY_PLACEHOLDER, query)
}

/// Host-provided persistence for [`Settings`].
///
/// Hosts with their own data store implement this directly;
/// [`TomlSettingsStore`] covers the rest.
pub trait SettingsStore: Send + Sync {
    /// Returns the stored settings, or `None` when nothing has been persisted
    /// yet. Partially stored documents merge over defaults.
    fn load(&self) -> SearchResult<Option<Settings>>;

    fn save(&self, settings: &Settings) -> SearchResult<()>;
}

/// File-backed store keeping settings as TOML under the user config directory.
#[derive(Debug)]
pub struct TomlSettingsStore {
    path: PathBuf,
}

impl TomlSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the conventional per-user location, or `None` when no config
    /// directory can be derived from the environment.
    pub fn at_default_path() -> Option<Self> {
        default_settings_path().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for TomlSettingsStore {
    fn load(&self) -> SearchResult<Option<Settings>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path).map_err(|source| {
            SearchError::persistence(
                source,
                format!("failed to read settings: {}", self.path.display()),
            )
        })?;
        let parsed = toml::from_str::<Settings>(&raw).map_err(|source| {
            SearchError::persistence(
                source,
                format!("failed to parse settings: {}", self.path.display()),
            )
        })?;
        Ok(Some(parsed))
    }

    fn save(&self, settings: &Settings) -> SearchResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| {
                SearchError::persistence(
                    source,
                    format!("failed to create settings directory: {}", parent.display()),
                )
            })?;
        }

        let raw = toml::to_string_pretty(settings).map_err(|source| {
            SearchError::persistence(source, "failed to serialize settings".to_string())
        })?;
        fs::write(&self.path, raw).map_err(|source| {
            SearchError::persistence(
                source,
                format!("failed to write settings: {}", self.path.display()),
            )
        })
    }
}

pub fn default_settings_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os("WEBSEARCH_SETTINGS_PATH")
        && !explicit.is_empty()
    {
        return Some(PathBuf::from(explicit));
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Some(
            PathBuf::from(xdg)
                .join("websearch-panel")
                .join("settings.toml"),
        );
    }
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join("websearch-panel")
                .join("settings.toml"),
        );
    }
    if let Some(appdata) = std::env::var_os("APPDATA")
        && !appdata.is_empty()
    {
        return Some(
            PathBuf::from(appdata)
                .join("websearch-panel")
                .join("settings.toml"),
        );
    }
    None
}

/// Settings surface handed to the host's configuration UI.
///
/// Only the result-page template is user-editable; the suggest-API template
/// keeps its stored or default value. Every commit persists immediately.
pub struct SettingsEditor<'a> {
    settings: &'a mut Settings,
    store: &'a dyn SettingsStore,
}

impl<'a> SettingsEditor<'a> {
    pub fn new(settings: &'a mut Settings, store: &'a dyn SettingsStore) -> Self {
        Self { settings, store }
    }

    pub fn search_engine(&self) -> &str {
        &self.settings.search_engine
    }

    pub fn set_search_engine(&mut self, value: impl Into<String>) -> SearchResult<()> {
        self.settings.search_engine = value.into();
        self.store.save(self.settings)
    }
}
