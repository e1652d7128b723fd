//! Trade resolution: the hardest and most failure-prone parse.
//!
//! A trade entry reads "X gave ... and got ... from Y". The two participants
//! come from the first and last name spans. The goods come from one of two
//! encodings, tried in order of reliability:
//!
//! 1. **Textual counts** — "gave 2 wood and got 1 ore from". The counts are
//!    explicit, so the sides are exact. Preferred whenever both sides parse.
//! 2. **Icon midpoint split** — the entry's ordered icon sequence is cut at
//!    `floor(len / 2)`; the first half is what the giver gave, the second
//!    half what the giver got. This is a positional heuristic with no
//!    semantic backing: when the two sides exchange unequal icon counts, or
//!    icon order does not follow the "gave ... and got ..." narrative, the
//!    split lands wrong. It is the tracker's dominant source of inaccuracy,
//!    kept explicit and tested as a heuristic rather than hidden.
//!
//! Whichever path wins, the resulting deltas are opposing: the giver loses
//! `given` and gains `received`, the receiver gains `given` and loses
//! `received`. A trade moves resources between the two named parties, never
//! creates or destroys them.

use cardcount_types::{Event, RawLogEntry, ResourceVector};

use crate::error::ParseError;
use crate::extract;

/// Trade phrasing markers, in narrative order.
const GAVE: &str = "gave";
const AND_GOT: &str = "and got";
const FROM: &str = "from";

/// Resolve a trade entry into a [`Event::Trade`].
///
/// # Errors
///
/// Returns [`ParseError::IncompleteTrade`] if the entry carries no name
/// spans, or [`ParseError::SingleParticipant`] if the first and last spans
/// name the same player. On error the entry must be dropped whole — no
/// partial ledger mutation.
pub fn resolve(entry: &RawLogEntry) -> Result<Event, ParseError> {
    let giver = entry.first_name().ok_or(ParseError::IncompleteTrade {
        found: entry.names.len(),
    })?;
    // `names` is non-empty here, so last_name() always yields.
    let receiver = entry.last_name().ok_or(ParseError::IncompleteTrade {
        found: entry.names.len(),
    })?;
    if giver == receiver {
        return Err(ParseError::SingleParticipant {
            player: giver.to_owned(),
        });
    }

    let (given, received) = textual_sides(&entry.text).unwrap_or_else(|| {
        let (gave_half, got_half) = split_at_midpoint(&entry.icons);
        (extract::from_icons(gave_half), extract::from_icons(got_half))
    });

    Ok(Event::Trade {
        giver: giver.to_owned(),
        receiver: receiver.to_owned(),
        given,
        received,
    })
}

/// Try the exact textual path: counts spelled out between the phrase markers.
///
/// Returns the (given, received) pair only when both sides yield at least
/// one counted resource; a half-parsed trade falls back to icon evidence.
fn textual_sides(text: &str) -> Option<(ResourceVector, ResourceVector)> {
    let (_, after_gave) = text.split_once(GAVE)?;
    let (gave_span, after_got) = after_gave.split_once(AND_GOT)?;
    let (got_span, _) = after_got.split_once(FROM)?;

    let given = extract::from_text(gave_span);
    let received = extract::from_text(got_span);
    (!given.is_zero() && !received.is_zero()).then_some((given, received))
}

/// Cut an icon sequence at `floor(len / 2)` into (first half, second half).
///
/// With an odd count the first half is the shorter one: `[wood, wood,
/// stone]` splits into `[wood]` given and `[wood, stone]` received.
pub fn split_at_midpoint<T>(items: &[T]) -> (&[T], &[T]) {
    // len / 2 <= len, so split_at cannot be out of bounds.
    items.split_at(items.len() / 2)
}
