//! Incremental web-search prompt core for embedding in a host workspace.
//!
//! The crate owns one thing well: a keyboard-driven search session whose live
//! suggestion list stays consistent with the latest keystroke no matter how
//! the network reorders lookup completions. Suggestion sources (a search
//! engine's suggest API and the Wikipedia search API), the sequence guard
//! that drops superseded responses, and the result navigator that resolves a
//! finalized query into an embedded panel all hang off that session. The host
//! application supplies the UI, the panel system, and settings persistence
//! through the traits in [`host`] and [`settings`].

pub mod error;
pub mod host;
pub mod navigate;
pub mod plugin;
pub mod prompt;
pub mod settings;
pub mod suggest;

pub use error::{SearchError, SearchResult};
pub use plugin::{PluginCommand, SearchPlugin};
