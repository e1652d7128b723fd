//! The seam between the core and whatever watches the page.
//!
//! Discovery of the log container, retry until it exists, and mutation
//! batching all belong to the browser-side collaborator. The core only
//! consumes the resulting ordered stream through [`LogSource`], so it can
//! be driven identically by a live page adapter or a captured session.

use std::collections::VecDeque;

use cardcount_types::RawLogEntry;

/// An ordered, pull-based stream of raw log entries.
///
/// Implementations own their delivery mechanics (polling, buffering,
/// backoff); the core only requires that entries come out in arrival order
/// and that `None` means "nothing available right now", not end-of-session.
pub trait LogSource {
    /// Pull the next entry, if one is available.
    fn next_entry(&mut self) -> Option<RawLogEntry>;
}

/// A [`LogSource`] replaying a captured entry sequence.
///
/// Used by tests and for offline analysis of saved sessions.
#[derive(Debug, Default, Clone)]
pub struct ReplaySource {
    entries: VecDeque<RawLogEntry>,
}

impl ReplaySource {
    /// Build a replay source from entries in arrival order.
    pub fn new<I: IntoIterator<Item = RawLogEntry>>(entries: I) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// How many entries remain to be replayed.
    pub fn remaining(&self) -> usize {
        self.entries.len()
    }
}

impl LogSource for ReplaySource {
    fn next_entry(&mut self) -> Option<RawLogEntry> {
        self.entries.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_preserves_arrival_order() {
        let mut source = ReplaySource::new([
            RawLogEntry::new("first"),
            RawLogEntry::new("second"),
        ]);
        assert_eq!(source.remaining(), 2);
        assert_eq!(source.next_entry().map(|e| e.text), Some("first".to_owned()));
        assert_eq!(source.next_entry().map(|e| e.text), Some("second".to_owned()));
        assert!(source.next_entry().is_none());
    }
}
