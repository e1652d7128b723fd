//! The ingest pipeline: classify, resolve, apply — one entry at a time.
//!
//! Processing is single-threaded and strictly ordered: each entry runs to
//! completion (classification, extraction or trade resolution, ledger
//! mutation) before the next is considered. The [`HandTracker`] owns the
//! ledger outright; there are no ambient globals and no second writer.

use cardcount_ledger::Ledger;
use cardcount_parse::classify;
use cardcount_types::{Event, RawLogEntry, TableSnapshot};
use tracing::debug;

use crate::source::LogSource;

/// The session-scoped tracker: owns the ledger and feeds it classified
/// entries in arrival order.
#[derive(Debug, Default, Clone)]
pub struct HandTracker {
    ledger: Ledger,
}

impl HandTracker {
    /// Start a tracker with an empty ledger for a new session.
    pub const fn new() -> Self {
        Self {
            ledger: Ledger::new(),
        }
    }

    /// Process one raw entry, mutating the ledger.
    ///
    /// Never fails: unrecognized and malformed entries are skipped (the
    /// classifier has already logged why), and every other event applies
    /// whole — a trade touches both rows or, on soft failure upstream,
    /// neither.
    pub fn ingest(&mut self, entry: &RawLogEntry) {
        match classify(entry) {
            Event::PlacementSeed { player } => {
                if self.ledger.seed(&player) {
                    debug!(player, "seeded ledger row from placement");
                }
            }
            Event::StartingResources { player, resources } | Event::Gain { player, resources } => {
                self.ledger.apply(&player, resources);
            }
            Event::Trade {
                giver,
                receiver,
                given,
                received,
            } => {
                self.ledger.apply_trade(&giver, &receiver, given, received);
            }
            Event::Unrecognized => {}
        }
    }

    /// Drain a source, ingesting every currently available entry in order.
    pub fn ingest_all<S: LogSource>(&mut self, source: &mut S) {
        while let Some(entry) = source.next_entry() {
            self.ingest(&entry);
        }
    }

    /// Read-only view of the ledger.
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The renderer-facing projection, in first-seen player order.
    pub fn snapshot(&self) -> TableSnapshot {
        self.ledger.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use cardcount_types::ResourceVector;

    use super::*;

    #[test]
    fn ingest_applies_gain() {
        let mut tracker = HandTracker::new();
        tracker.ingest(
            &RawLogEntry::new("Bob got")
                .with_names(["Bob"])
                .with_icons(["card_ore", "card_ore"]),
        );
        assert_eq!(
            tracker.ledger().get("Bob"),
            Some(&ResourceVector {
                stone: 2,
                ..ResourceVector::ZERO
            })
        );
    }

    #[test]
    fn unrecognized_entry_is_a_no_op() {
        let mut tracker = HandTracker::new();
        tracker.ingest(&RawLogEntry::new("Alice rolled a 4").with_names(["Alice"]));
        assert!(tracker.ledger().is_empty());
    }

    #[test]
    fn placement_seeds_visible_row() {
        let mut tracker = HandTracker::new();
        tracker.ingest(&RawLogEntry::new("Carol placed a road").with_names(["Carol"]));
        assert_eq!(tracker.ledger().get("Carol"), Some(&ResourceVector::ZERO));
        assert_eq!(tracker.snapshot().hands.len(), 1);
    }
}
