//! The per-player resource vector.
//!
//! A [`ResourceVector`] always carries all five kinds; absent is represented
//! as zero, never as a missing key. Counts are signed: trade deltas subtract,
//! and the midpoint trade heuristic can legitimately drive an inferred count
//! below zero when its split guesses wrong. That is tolerated input-driven
//! behavior, not validated away.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::kinds::ResourceKind;

/// Signed per-kind resource counts, all five kinds always present.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub struct ResourceVector {
    /// Lumber count.
    pub wood: i64,
    /// Brick count.
    pub brick: i64,
    /// Grain count.
    pub wheat: i64,
    /// Wool count.
    pub sheep: i64,
    /// Ore count.
    pub stone: i64,
}

impl ResourceVector {
    /// The zero vector.
    pub const ZERO: Self = Self {
        wood: 0,
        brick: 0,
        wheat: 0,
        sheep: 0,
        stone: 0,
    };

    /// Read the count for one kind.
    pub const fn get(&self, kind: ResourceKind) -> i64 {
        match kind {
            ResourceKind::Wood => self.wood,
            ResourceKind::Brick => self.brick,
            ResourceKind::Wheat => self.wheat,
            ResourceKind::Sheep => self.sheep,
            ResourceKind::Stone => self.stone,
        }
    }

    /// Mutable access to the count for one kind.
    pub const fn get_mut(&mut self, kind: ResourceKind) -> &mut i64 {
        match kind {
            ResourceKind::Wood => &mut self.wood,
            ResourceKind::Brick => &mut self.brick,
            ResourceKind::Wheat => &mut self.wheat,
            ResourceKind::Sheep => &mut self.sheep,
            ResourceKind::Stone => &mut self.stone,
        }
    }

    /// Add `count` to one kind, saturating at the integer bounds.
    pub const fn add(&mut self, kind: ResourceKind, count: i64) {
        let slot = self.get_mut(kind);
        *slot = slot.saturating_add(count);
    }

    /// Component-wise saturating addition.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self {
            wood: self.wood.saturating_add(other.wood),
            brick: self.brick.saturating_add(other.brick),
            wheat: self.wheat.saturating_add(other.wheat),
            sheep: self.sheep.saturating_add(other.sheep),
            stone: self.stone.saturating_add(other.stone),
        }
    }

    /// Component-wise saturating subtraction.
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self {
            wood: self.wood.saturating_sub(other.wood),
            brick: self.brick.saturating_sub(other.brick),
            wheat: self.wheat.saturating_sub(other.wheat),
            sheep: self.sheep.saturating_sub(other.sheep),
            stone: self.stone.saturating_sub(other.stone),
        }
    }

    /// Whether every kind's count is zero.
    pub const fn is_zero(&self) -> bool {
        self.wood == 0 && self.brick == 0 && self.wheat == 0 && self.sheep == 0 && self.stone == 0
    }

    /// Total card count across all kinds (saturating).
    pub const fn total(&self) -> i64 {
        self.wood
            .saturating_add(self.brick)
            .saturating_add(self.wheat)
            .saturating_add(self.sheep)
            .saturating_add(self.stone)
    }

    /// Iterate `(kind, count)` pairs in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, i64)> + '_ {
        ResourceKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Shorthand for a vector literal in kind order.
    fn vec5(wood: i64, brick: i64, wheat: i64, sheep: i64, stone: i64) -> ResourceVector {
        ResourceVector {
            wood,
            brick,
            wheat,
            sheep,
            stone,
        }
    }

    #[test]
    fn default_is_zero_for_every_kind() {
        let v = ResourceVector::default();
        for kind in ResourceKind::ALL {
            assert_eq!(v.get(kind), 0);
        }
        assert!(v.is_zero());
    }

    #[test]
    fn add_accumulates_per_kind() {
        let mut v = ResourceVector::ZERO;
        v.add(ResourceKind::Stone, 2);
        v.add(ResourceKind::Stone, 1);
        v.add(ResourceKind::Wood, 4);
        assert_eq!(v.get(ResourceKind::Stone), 3);
        assert_eq!(v.get(ResourceKind::Wood), 4);
        assert_eq!(v.get(ResourceKind::Sheep), 0);
    }

    #[test]
    fn subtraction_may_go_negative() {
        let v = ResourceVector::ZERO.saturating_sub(vec5(2, 0, 0, 0, 0));
        assert_eq!(v.get(ResourceKind::Wood), -2);
        assert!(!v.is_zero());
    }

    #[test]
    fn add_saturates_at_bounds() {
        let mut v = vec5(i64::MAX, 0, 0, 0, 0);
        v.add(ResourceKind::Wood, 1);
        assert_eq!(v.get(ResourceKind::Wood), i64::MAX);
    }

    #[test]
    fn total_sums_all_kinds() {
        assert_eq!(vec5(1, 2, 3, 4, 5).total(), 15);
        assert_eq!(vec5(-2, 0, 0, 0, 1).total(), -1);
    }

    #[test]
    fn iter_yields_presentation_order() {
        let v = vec5(1, 2, 3, 4, 5);
        let pairs: Vec<_> = v.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (ResourceKind::Wood, 1),
                (ResourceKind::Brick, 2),
                (ResourceKind::Wheat, 3),
                (ResourceKind::Sheep, 4),
                (ResourceKind::Stone, 5),
            ]
        );
    }

    #[test]
    fn serde_round_trip_keeps_all_kinds() {
        let v = vec5(1, 0, -1, 2, 0);
        let json = serde_json::to_string(&v);
        assert!(json.is_ok());
        if let Ok(text) = json {
            // Zero counts are serialized explicitly, never omitted.
            assert!(text.contains("\"brick\":0"));
            let back: Result<ResourceVector, _> = serde_json::from_str(&text);
            assert_eq!(back.ok(), Some(v));
        }
    }
}
