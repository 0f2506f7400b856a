use crate::suggest::SearchMode;

/// Keyboard input the host forwards to an open session.
///
/// Events arrive on key release, paired with the text field's content at
/// event time; the host owns the input element itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKey {
    Escape,
    Enter,
    Tab,
    ArrowUp,
    ArrowDown,
    /// Any other released key: a content-changing edit of the input field.
    Other,
}

/// What the host should do after forwarding a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    /// Nothing changed.
    None,
    /// Session state changed; re-render the prompt.
    Redraw,
    /// The user cancelled; tear the prompt down.
    Cancelled,
    /// The user finalized a query; hand it to the result navigator and tear
    /// the prompt down.
    Submit(SubmitRequest),
}

/// A finalized query ready for result navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub mode: SearchMode,
    pub query: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Open,
    Submitted,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionView {
    pub text: String,
    pub selected: bool,
}

/// Render snapshot of an open session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptView {
    pub mode: SearchMode,
    pub input: String,
    pub placeholder: &'static str,
    pub items: Vec<SuggestionView>,
}
