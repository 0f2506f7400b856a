use std::sync::Arc;

use tokio::runtime::{Builder, Handle, Runtime};
use tokio::sync::mpsc::{
    UnboundedReceiver, UnboundedSender, error::TryRecvError, unbounded_channel,
};

use super::SuggestionSource;

/// Completion of one dispatched lookup, tagged with the sequence id captured
/// at dispatch time. The session compares the tag against its live sequence
/// before applying anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupEvent {
    Completed {
        request_id: u64,
        suggestions: Vec<String>,
    },
    Failed {
        request_id: u64,
        message: String,
    },
}

/// Dispatches suggestion lookups without blocking the control-flow thread.
///
/// Each dispatched lookup runs as its own task so completions can arrive in
/// any order; the sequence guard, not the engine, decides which one renders.
/// No caching, no retry: a failed lookup reports once and is done.
pub struct LookupEngine<S> {
    source: Arc<S>,
    event_tx: UnboundedSender<LookupEvent>,
    event_rx: UnboundedReceiver<LookupEvent>,
    runtime: LookupRuntime,
}

struct LookupRuntime {
    _owned: Option<Runtime>,
    handle: Handle,
}

impl LookupRuntime {
    fn new() -> Self {
        if let Ok(handle) = Handle::try_current() {
            return Self {
                _owned: None,
                handle,
            };
        }

        let runtime = Builder::new_multi_thread()
            .enable_all()
            .thread_name("wsp-suggest")
            .build()
            .expect("lookup runtime should initialize");
        let handle = runtime.handle().clone();
        Self {
            _owned: Some(runtime),
            handle,
        }
    }
}

impl<S: SuggestionSource> LookupEngine<S> {
    pub fn new(source: S) -> Self {
        let (event_tx, event_rx) = unbounded_channel();
        Self {
            source: Arc::new(source),
            event_tx,
            event_rx,
            runtime: LookupRuntime::new(),
        }
    }

    /// Starts one lookup for `query`, tagged with `request_id`.
    ///
    /// Returns immediately; the completion arrives through
    /// [`drain_events`](Self::drain_events).
    pub fn dispatch(&self, request_id: u64, query: &str) {
        let source = Arc::clone(&self.source);
        let event_tx = self.event_tx.clone();
        let query = query.to_string();

        self.runtime.handle.spawn(async move {
            let event = match source.fetch_suggestions(&query).await {
                Ok(suggestions) => LookupEvent::Completed {
                    request_id,
                    suggestions,
                },
                Err(err) => LookupEvent::Failed {
                    request_id,
                    message: err.to_string(),
                },
            };
            // The session may already be gone; a closed channel drops the event.
            let _ = event_tx.send(event);
        });
    }

    pub fn drain_events(&mut self) -> Vec<LookupEvent> {
        let mut drained = Vec::new();

        loop {
            match self.event_rx.try_recv() {
                Ok(event) => drained.push(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => break,
            }
        }

        drained
    }
}
