//! Typed events produced by classifying raw log entries.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::vector::ResourceVector;

/// The typed meaning of one classified log entry.
///
/// Classification produces exactly one event per entry; entries the
/// classifier cannot interpret become [`Event::Unrecognized`] and are
/// skipped without touching the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Event {
    /// A player placed an initial piece; seeds an all-zero ledger row so the
    /// player is visible in the overlay before they gain anything.
    PlacementSeed {
        /// The placing player.
        player: String,
    },
    /// A player received their starting hand.
    StartingResources {
        /// The receiving player.
        player: String,
        /// The starting hand, from icon evidence.
        resources: ResourceVector,
    },
    /// A player gained resources (dice roll, steal payout, and similar).
    Gain {
        /// The gaining player.
        player: String,
        /// The gained resources, from icon evidence.
        resources: ResourceVector,
    },
    /// Two players exchanged resources.
    Trade {
        /// The player named first ("X gave ...").
        giver: String,
        /// The player named last ("... from Y").
        receiver: String,
        /// What the giver handed over.
        given: ResourceVector,
        /// What the giver got back.
        received: ResourceVector,
    },
    /// The entry matched no rule; ignored.
    Unrecognized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_round_trip_for_trade() {
        let event = Event::Trade {
            giver: "Alice".to_owned(),
            receiver: "Bob".to_owned(),
            given: ResourceVector {
                wood: 2,
                ..ResourceVector::ZERO
            },
            received: ResourceVector {
                stone: 1,
                ..ResourceVector::ZERO
            },
        };
        let json = serde_json::to_string(&event);
        assert!(json.is_ok());
        if let Ok(text) = json {
            let back: Result<Event, _> = serde_json::from_str(&text);
            assert_eq!(back.ok(), Some(event));
        }
    }
}
