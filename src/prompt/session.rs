use tracing::{debug, warn};

use crate::settings::Settings;
use crate::suggest::{
    LookupEngine, LookupEvent, RequestGuard, SearchMode, SuggestionProvider, SuggestionSource,
};

use super::types::{
    PromptAction, PromptKey, PromptView, SessionState, SubmitRequest, SuggestionView,
};

/// Upper bound on rendered suggestions. Sources may return more; the session
/// trims on render.
pub const MAX_VISIBLE_SUGGESTIONS: usize = 10;

const INPUT_PLACEHOLDER: &str = "Search the web";

/// One interactive search session: text mirror, race-free suggestion list,
/// keyboard-driven selection, submission.
///
/// The session is a small state machine. Keyboard events are the only
/// transition triggers: Escape cancels, Enter and Tab submit, everything else
/// keeps the session open. Once closed, key events and late lookup
/// completions are absorbed as no-ops.
pub struct PromptSession<S> {
    mode: SearchMode,
    state: SessionState,
    input: String,
    suggestions: Vec<String>,
    selected: Option<usize>,
    guard: RequestGuard,
    engine: LookupEngine<S>,
}

impl PromptSession<SuggestionProvider> {
    /// Opens a session in `mode`, wiring the mode's suggestion source from
    /// settings.
    pub fn open(mode: SearchMode, settings: &Settings) -> Self {
        Self::with_source(mode, SuggestionProvider::for_mode(mode, settings))
    }
}

impl<S: SuggestionSource> PromptSession<S> {
    pub fn with_source(mode: SearchMode, source: S) -> Self {
        Self {
            mode,
            state: SessionState::Open,
            input: String::new(),
            suggestions: Vec::new(),
            selected: None,
            guard: RequestGuard::default(),
            engine: LookupEngine::new(source),
        }
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == SessionState::Open
    }

    /// Handles one released key. `text` is the field content at event time;
    /// Enter submits it raw, regardless of any selection.
    pub fn handle_key(&mut self, key: PromptKey, text: &str) -> PromptAction {
        if self.state != SessionState::Open {
            return PromptAction::None;
        }

        match key {
            PromptKey::Escape => {
                self.state = SessionState::Cancelled;
                PromptAction::Cancelled
            }
            PromptKey::Enter => self.finalize(text.to_string()),
            PromptKey::Tab => match self.selected_suggestion() {
                Some(suggestion) => {
                    let query = suggestion.to_string();
                    self.finalize(query)
                }
                // Nothing selected means nothing to submit.
                None => PromptAction::None,
            },
            PromptKey::ArrowUp => self.move_selection(-1),
            PromptKey::ArrowDown => self.move_selection(1),
            PromptKey::Other => self.edit(text),
        }
    }

    /// Applies pending lookup completions; returns whether a redraw is needed.
    ///
    /// Only completions carrying the current sequence id may mutate the list;
    /// everything else was superseded by a newer keystroke and is dropped.
    pub fn drain_lookups(&mut self) -> bool {
        let events = self.engine.drain_events();
        if self.state != SessionState::Open {
            return false;
        }

        let mut changed = false;
        for event in events {
            changed |= self.apply_event(event);
        }
        changed
    }

    pub fn view(&self) -> Option<PromptView> {
        if self.state != SessionState::Open {
            return None;
        }

        let items = self
            .suggestions
            .iter()
            .enumerate()
            .map(|(idx, text)| SuggestionView {
                text: text.clone(),
                selected: Some(idx) == self.selected,
            })
            .collect();
        Some(PromptView {
            mode: self.mode,
            input: self.input.clone(),
            placeholder: INPUT_PLACEHOLDER,
            items,
        })
    }

    fn edit(&mut self, text: &str) -> PromptAction {
        self.input = text.to_string();
        // Visual reset first: the stale list must never outlive the keystroke
        // that invalidated it.
        self.suggestions.clear();
        self.selected = None;

        let request_id = self.guard.issue();
        self.engine.dispatch(request_id, &self.input);
        PromptAction::Redraw
    }

    fn apply_event(&mut self, event: LookupEvent) -> bool {
        if self.state != SessionState::Open {
            return false;
        }

        match event {
            LookupEvent::Completed {
                request_id,
                suggestions,
            } => {
                if !self.guard.is_current(request_id) {
                    debug!(request_id, "discarding superseded suggestion lookup");
                    return false;
                }
                self.suggestions = suggestions;
                self.suggestions.truncate(MAX_VISIBLE_SUGGESTIONS);
                self.selected = if self.suggestions.is_empty() {
                    None
                } else {
                    Some(0)
                };
                true
            }
            LookupEvent::Failed {
                request_id,
                message,
            } => {
                if !self.guard.is_current(request_id) {
                    debug!(request_id, "discarding superseded lookup failure");
                    return false;
                }
                // Zero suggestions for this keystroke; typing continues.
                warn!(request_id, %message, "suggestion lookup failed");
                self.suggestions.clear();
                self.selected = None;
                true
            }
        }
    }

    fn finalize(&mut self, query: String) -> PromptAction {
        self.state = SessionState::Submitted;
        PromptAction::Submit(SubmitRequest {
            mode: self.mode,
            query,
        })
    }

    fn move_selection(&mut self, delta: i64) -> PromptAction {
        let Some(selected) = self.selected else {
            return PromptAction::None;
        };

        let last = self.suggestions.len().saturating_sub(1);
        let moved = if delta < 0 {
            selected.saturating_sub(1)
        } else {
            (selected + 1).min(last)
        };
        if moved == selected {
            return PromptAction::None;
        }

        self.selected = Some(moved);
        PromptAction::Redraw
    }

    fn selected_suggestion(&self) -> Option<&str> {
        self.selected
            .and_then(|idx| self.suggestions.get(idx))
            .map(String::as_str)
    }
}
