//! The ledger: the single source of truth for inferred hands.
//!
//! One row per player, keyed by exact display name (case- and trim-
//! sensitive). Rows are created lazily on first reference and never removed.
//! The ledger is mutated only through additive deltas — there is no setter —
//! and it lives for one observed session; nothing is persisted.
//!
//! No bounds are enforced on counts. The midpoint trade heuristic can push
//! an inferred count below zero when its split guesses wrong; that is
//! accepted input-driven behavior, not validated away.

use cardcount_types::{PlayerHand, ResourceVector, TableSnapshot};
use tracing::warn;

use crate::conservation::{ConservationResult, verify_trade_deltas};

/// The mapping of player name to inferred resource vector.
///
/// Rows keep first-seen order, which makes [`Ledger::snapshot`]
/// deterministic for the renderer. Player counts are tiny (a table seats
/// four to six), so lookup is a linear scan.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Ledger {
    /// All rows, in first-seen order.
    rows: Vec<PlayerHand>,
}

impl Ledger {
    /// Create an empty ledger for a new session.
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Number of known players.
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no player has been seen yet.
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Ensure a player has a row, creating an all-zero one if absent.
    ///
    /// Returns `true` if a row was created. Re-seeding an existing player is
    /// a no-op — placements arrive before gains, and neither order may
    /// disturb an existing row.
    pub fn seed(&mut self, player: &str) -> bool {
        if self.rows.iter().any(|row| row.player == player) {
            return false;
        }
        self.rows.push(PlayerHand {
            player: player.to_owned(),
            resources: ResourceVector::ZERO,
        });
        true
    }

    /// Apply an additive delta to one player's row.
    ///
    /// Creates the row (zero vector) first if the player is unseen, so the
    /// result for a fresh player equals zero plus `delta`. Addition
    /// saturates at the integer bounds; it never panics.
    pub fn apply(&mut self, player: &str, delta: ResourceVector) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.player == player) {
            row.resources = row.resources.saturating_add(delta);
            return;
        }
        self.rows.push(PlayerHand {
            player: player.to_owned(),
            resources: delta,
        });
    }

    /// Apply both sides of a trade, atomically from the caller's view.
    ///
    /// The giver loses `given` and gains `received`; the receiver gains
    /// `given` and loses `received`. The paired deltas are checked against
    /// the conservation law first; an anomaly (possible only under
    /// saturation) is logged and the trade is still applied, since partial
    /// information beats none for a passive observer.
    pub fn apply_trade(
        &mut self,
        giver: &str,
        receiver: &str,
        given: ResourceVector,
        received: ResourceVector,
    ) {
        let giver_delta = received.saturating_sub(given);
        let receiver_delta = given.saturating_sub(received);

        if let ConservationResult::Anomaly(anomaly) =
            verify_trade_deltas(giver_delta, receiver_delta)
        {
            warn!(%anomaly, giver, receiver, "trade deltas do not balance");
        }

        self.apply(giver, giver_delta);
        self.apply(receiver, receiver_delta);
    }

    /// Look up one player's inferred hand by exact name.
    pub fn get(&self, player: &str) -> Option<&ResourceVector> {
        self.rows
            .iter()
            .find(|row| row.player == player)
            .map(|row| &row.resources)
    }

    /// Iterate player names in first-seen order.
    pub fn players(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.player.as_str())
    }

    /// An immutable copy of the full ledger for the renderer,
    /// in first-seen player order.
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            hands: self.rows.clone(),
        }
    }
}
