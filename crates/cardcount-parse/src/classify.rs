//! The event classifier: one raw entry in, exactly one typed event out.
//!
//! Classification is a priority-ordered keyword match over the entry text,
//! expressed as a fixed table of (predicate, constructor) pairs. The first
//! rule whose predicate matches wins; later rules are never evaluated.
//!
//! Ordering matters: trade phrasing ("gave ... and got ... from") also
//! contains "got", so the trade rule sits above the plain-gain rule. A trade
//! misread as a gain would credit one side of the exchange and drop the
//! other.

use cardcount_types::{Event, RawLogEntry};
use tracing::{debug, warn};

use crate::error::ParseError;
use crate::{extract, trade};

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

/// One classification rule: a text predicate and an event constructor.
struct Rule {
    /// Rule name, used in diagnostics only.
    name: &'static str,
    /// Whether this rule claims the entry.
    matches: fn(&str) -> bool,
    /// Build the event once the rule has claimed the entry.
    build: fn(&RawLogEntry) -> Result<Event, ParseError>,
}

/// The fixed rule table, in priority order. First match wins.
const RULES: &[Rule] = &[
    Rule {
        name: "starting_resources",
        matches: |text| text.contains("received starting resources"),
        build: build_starting_resources,
    },
    Rule {
        name: "trade",
        matches: |text| text.contains("gave") && text.contains("and got") && text.contains("from"),
        build: trade::resolve,
    },
    Rule {
        name: "gain",
        matches: |text| text.contains("got"),
        build: build_gain,
    },
    Rule {
        name: "placement",
        matches: |text| text.contains("placed a"),
        build: build_placement,
    },
];

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify one raw log entry into exactly one [`Event`].
///
/// Entries that match no rule, and entries whose matched rule fails softly
/// (missing player identity, incomplete trade), classify as
/// [`Event::Unrecognized`]. The failure is logged as a diagnostic and never
/// surfaces to the caller — one malformed entry must not abort the stream.
pub fn classify(entry: &RawLogEntry) -> Event {
    for rule in RULES {
        if !(rule.matches)(&entry.text) {
            continue;
        }
        return match (rule.build)(entry) {
            Ok(event) => {
                debug!(rule = rule.name, "classified log entry");
                event
            }
            Err(error) => {
                warn!(rule = rule.name, %error, text = %entry.text, "dropping entry");
                Event::Unrecognized
            }
        };
    }
    Event::Unrecognized
}

fn build_starting_resources(entry: &RawLogEntry) -> Result<Event, ParseError> {
    let player = entry.first_name().ok_or(ParseError::MissingPlayer)?;
    Ok(Event::StartingResources {
        player: player.to_owned(),
        resources: extract::from_icons(&entry.icons),
    })
}

fn build_gain(entry: &RawLogEntry) -> Result<Event, ParseError> {
    let player = entry.first_name().ok_or(ParseError::MissingPlayer)?;
    Ok(Event::Gain {
        player: player.to_owned(),
        resources: extract::from_icons(&entry.icons),
    })
}

fn build_placement(entry: &RawLogEntry) -> Result<Event, ParseError> {
    let player = entry.first_name().ok_or(ParseError::MissingPlayer)?;
    Ok(Event::PlacementSeed {
        player: player.to_owned(),
    })
}
