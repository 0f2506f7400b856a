mod session;
mod types;

pub use session::{MAX_VISIBLE_SUGGESTIONS, PromptSession};
pub use types::{
    PromptAction, PromptKey, PromptView, SessionState, SubmitRequest, SuggestionView,
};
