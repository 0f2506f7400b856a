use crate::error::SearchResult;

/// Handle to a workspace panel created by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelId(pub u64);

/// Request for a new side-by-side panel rendering an embedded page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRequest {
    pub url: String,
    pub title: String,
}

/// Host workspace surface consumed by the result navigator.
///
/// The host owns all rendering: the embedded page frame fills the panel area
/// and no sandboxing parameters are specified here.
pub trait Workspace: Send + Sync {
    /// Opens a new side-by-side panel and loads `request.url` into its
    /// embedded page frame.
    fn open_embedded_page(&self, request: &PanelRequest) -> SearchResult<PanelId>;

    /// Gives input focus to a previously opened panel.
    fn focus_panel(&self, panel: PanelId) -> SearchResult<()>;
}
