//! Resource extraction from icon evidence and from prose.
//!
//! Two encodings carry resource quantities in the log:
//!
//! - **Icons**: an ordered list of asset identifiers, one icon per card.
//!   Counting is a multiset — repeated icons of the same kind accumulate.
//! - **Text**: comma-separated "`<count> <resource-name>`" fragments, as in
//!   "gave 2 wood and got 1 ore". The count is explicit here, which makes
//!   this path exact where the icon path can only count glyphs.
//!
//! Both paths silently ignore anything they cannot map to a kind: unknown
//! icons (development cards, UI chrome) and unknown words contribute to no
//! kind's count. That is the contract, not an error.

use cardcount_types::{ResourceKind, ResourceVector};

/// Count icons per kind via the fixed icon-token table.
///
/// Each identifier is matched by substring; unmatched identifiers are
/// skipped. The input order does not affect the result — only multiplicity.
pub fn from_icons<S: AsRef<str>>(icons: &[S]) -> ResourceVector {
    let mut counts = ResourceVector::ZERO;
    for icon in icons {
        if let Some(kind) = ResourceKind::from_icon(icon.as_ref()) {
            counts.add(kind, 1);
        }
    }
    counts
}

/// Parse "`<count> <resource-name>`" fragments out of a text span.
///
/// Tokens are split on whitespace and commas. An integer token arms a
/// pending count; the immediately following token consumes it if it names a
/// resource kind. Any other word disarms the pending count, so stray
/// numbers ("rolled a 7") never attach to a later resource word.
pub fn from_text(fragment: &str) -> ResourceVector {
    let mut counts = ResourceVector::ZERO;
    let mut pending: Option<i64> = None;

    for token in fragment.split(|c: char| c.is_whitespace() || c == ',') {
        if token.is_empty() {
            continue;
        }
        if let Ok(count) = token.parse::<i64>() {
            pending = Some(count);
            continue;
        }
        // Any non-integer token consumes the pending count; only a resource
        // name puts it to use.
        let armed = pending.take();
        if let (Some(kind), Some(count)) = (ResourceKind::from_word(token), armed) {
            counts.add(kind, count);
        }
    }

    counts
}
