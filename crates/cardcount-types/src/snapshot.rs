//! The renderer-facing projection of the ledger.
//!
//! The overlay table consumes a [`TableSnapshot`] as JSON after every
//! ingested entry. Hands appear in first-seen player order, which is stable
//! for the whole session; the renderer never re-sorts.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::vector::ResourceVector;

/// One player's inferred hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PlayerHand {
    /// The player's exact display name (case- and trim-sensitive identity).
    pub player: String,
    /// The inferred resource counts.
    pub resources: ResourceVector,
}

/// An immutable copy of the full ledger, in first-seen player order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TableSnapshot {
    /// All known players' hands.
    pub hands: Vec<PlayerHand>,
}

impl TableSnapshot {
    /// Look up one player's hand by exact name.
    pub fn hand(&self, player: &str) -> Option<&ResourceVector> {
        self.hands
            .iter()
            .find(|hand| hand.player == player)
            .map(|hand| &hand.resources)
    }
}
