/// Freshness gate for asynchronous lookup completions.
///
/// Every lookup-triggering keystroke takes a fresh sequence id from
/// [`issue`](RequestGuard::issue); a completion may touch session state only
/// while [`is_current`](RequestGuard::is_current) holds for its captured id.
/// Responses superseded by a newer keystroke fail the check and are dropped,
/// whatever order the network delivers them in.
#[derive(Debug, Default)]
pub struct RequestGuard {
    latest: u64,
}

impl RequestGuard {
    /// Starts a new lookup, superseding every id issued before.
    pub fn issue(&mut self) -> u64 {
        self.latest = self.latest.saturating_add(1);
        self.latest
    }

    pub fn is_current(&self, request_id: u64) -> bool {
        request_id == self.latest
    }

    /// The most recently issued id; the only one allowed to render.
    pub fn latest(&self) -> u64 {
        self.latest
    }
}
