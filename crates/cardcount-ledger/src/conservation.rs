//! Conservation check for trade application.
//!
//! A trade only moves resources between its two named parties: for every
//! kind, the giver's delta and the receiver's delta must cancel exactly.
//! The deltas are opposing differences of the same two vectors, so the
//! check passes by construction — it exists as defense-in-depth against
//! saturation at the integer bounds and future changes to delta derivation.

use std::collections::BTreeMap;
use std::fmt;

use cardcount_types::{ResourceKind, ResourceVector};

/// The result of a conservation check on one trade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConservationResult {
    /// The paired deltas cancel for every kind.
    Balanced,
    /// One or more kinds would be created or destroyed.
    Anomaly(ConservationAnomaly),
}

/// A conservation violation: the per-kind net change that should be zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConservationAnomaly {
    /// Net change per kind, for kinds where it is nonzero.
    pub imbalances: BTreeMap<ResourceKind, i64>,
}

impl fmt::Display for ConservationAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "trade deltas net nonzero for {} kind(s)",
            self.imbalances.len()
        )
    }
}

/// Verify that a trade's paired deltas net to zero for every kind.
pub fn verify_trade_deltas(
    giver_delta: ResourceVector,
    receiver_delta: ResourceVector,
) -> ConservationResult {
    let net = giver_delta.saturating_add(receiver_delta);
    if net.is_zero() {
        return ConservationResult::Balanced;
    }

    let imbalances: BTreeMap<ResourceKind, i64> =
        net.iter().filter(|&(_, count)| count != 0).collect();
    ConservationResult::Anomaly(ConservationAnomaly { imbalances })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposing_deltas_balance() {
        let given = ResourceVector {
            wood: 2,
            ..ResourceVector::ZERO
        };
        let received = ResourceVector {
            stone: 1,
            ..ResourceVector::ZERO
        };
        let giver_delta = received.saturating_sub(given);
        let receiver_delta = given.saturating_sub(received);
        assert_eq!(
            verify_trade_deltas(giver_delta, receiver_delta),
            ConservationResult::Balanced
        );
    }

    #[test]
    fn zero_deltas_balance() {
        assert_eq!(
            verify_trade_deltas(ResourceVector::ZERO, ResourceVector::ZERO),
            ConservationResult::Balanced
        );
    }

    #[test]
    fn non_opposing_deltas_are_an_anomaly() {
        let giver_delta = ResourceVector {
            wood: 1,
            ..ResourceVector::ZERO
        };
        // Same sign on both sides: wood would be created from nothing.
        let result = verify_trade_deltas(giver_delta, giver_delta);
        if let ConservationResult::Anomaly(anomaly) = result {
            assert_eq!(anomaly.imbalances.get(&ResourceKind::Wood), Some(&2));
            assert_eq!(anomaly.imbalances.len(), 1);
        } else {
            assert_ne!(result, ConservationResult::Balanced);
        }
    }

    #[test]
    fn anomaly_display_names_the_kind_count() {
        let mut imbalances = BTreeMap::new();
        imbalances.insert(ResourceKind::Wood, 2);
        imbalances.insert(ResourceKind::Stone, -1);
        let anomaly = ConservationAnomaly { imbalances };
        assert!(format!("{anomaly}").contains("2 kind(s)"));
    }
}
