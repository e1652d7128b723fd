//! The closed set of tracked resource kinds and their external identifiers.
//!
//! The game never names resources directly in its log markup; it renders an
//! icon whose asset identifier contains a fixed token (`card_lumber`,
//! `card_brick`, ...). The token table here is the only mapping between the
//! game's presentation layer and the tracker's data model, and it is fixed
//! for the process lifetime.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One of the five tracked commodity types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ResourceKind {
    /// Lumber cards (icon token `card_lumber`).
    Wood,
    /// Brick cards (icon token `card_brick`).
    Brick,
    /// Grain cards (icon token `card_grain`).
    Wheat,
    /// Wool cards (icon token `card_wool`).
    Sheep,
    /// Ore cards (icon token `card_ore`).
    Stone,
}

impl ResourceKind {
    /// All kinds, in the fixed presentation order used by the overlay table.
    pub const ALL: [Self; 5] = [Self::Wood, Self::Brick, Self::Wheat, Self::Sheep, Self::Stone];

    /// The substring that identifies this kind inside an icon identifier.
    pub const fn icon_token(self) -> &'static str {
        match self {
            Self::Wood => "card_lumber",
            Self::Brick => "card_brick",
            Self::Wheat => "card_grain",
            Self::Sheep => "card_wool",
            Self::Stone => "card_ore",
        }
    }

    /// Match an icon identifier against the token table.
    ///
    /// Icon identifiers are full asset paths; the match is by substring, so
    /// `"/assets/img/card_lumber.svg"` resolves to [`Self::Wood`]. Unknown
    /// identifiers resolve to `None` and contribute to no kind's count.
    pub fn from_icon(icon: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| icon.contains(kind.icon_token()))
    }

    /// Match a single word from log text against the known resource names.
    ///
    /// Accepts both the tracker's name for the kind and the label the game
    /// uses in prose ("lumber", "grain", "wool", "ore"). Case-insensitive;
    /// a trailing plural `s` is tolerated ("2 sheeps" never occurs, but
    /// "2 bricks" does).
    pub fn from_word(word: &str) -> Option<Self> {
        let lower = word.to_ascii_lowercase();
        let stem = lower.strip_suffix('s').unwrap_or(&lower);
        match stem {
            "wood" | "lumber" => Some(Self::Wood),
            "brick" => Some(Self::Brick),
            "wheat" | "grain" => Some(Self::Wheat),
            "sheep" | "wool" => Some(Self::Sheep),
            "stone" | "ore" => Some(Self::Stone),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_tokens_are_distinct() {
        for a in ResourceKind::ALL {
            for b in ResourceKind::ALL {
                if a != b {
                    assert!(!a.icon_token().contains(b.icon_token()));
                }
            }
        }
    }

    #[test]
    fn from_icon_matches_by_substring() {
        assert_eq!(
            ResourceKind::from_icon("https://game/assets/card_lumber.svg"),
            Some(ResourceKind::Wood)
        );
        assert_eq!(ResourceKind::from_icon("card_ore"), Some(ResourceKind::Stone));
    }

    #[test]
    fn unknown_icon_resolves_to_none() {
        assert_eq!(ResourceKind::from_icon("card_devcardback"), None);
        assert_eq!(ResourceKind::from_icon(""), None);
    }

    #[test]
    fn from_word_accepts_game_labels() {
        assert_eq!(ResourceKind::from_word("ore"), Some(ResourceKind::Stone));
        assert_eq!(ResourceKind::from_word("grain"), Some(ResourceKind::Wheat));
        assert_eq!(ResourceKind::from_word("wool"), Some(ResourceKind::Sheep));
        assert_eq!(ResourceKind::from_word("lumber"), Some(ResourceKind::Wood));
    }

    #[test]
    fn from_word_accepts_plurals_and_case() {
        assert_eq!(ResourceKind::from_word("Bricks"), Some(ResourceKind::Brick));
        assert_eq!(ResourceKind::from_word("WHEAT"), Some(ResourceKind::Wheat));
        assert_eq!(ResourceKind::from_word("sheep"), Some(ResourceKind::Sheep));
    }

    #[test]
    fn from_word_rejects_unknown_names() {
        assert_eq!(ResourceKind::from_word("gold"), None);
        assert_eq!(ResourceKind::from_word(""), None);
    }
}
