//! The normalized representation of one game-log entry.
//!
//! The browser-side collaborator walks the log container's DOM once per
//! appended node and flattens it into a [`RawLogEntry`]: the node's visible
//! text, its icon asset identifiers in document order, and its player-name
//! spans in document order. The core never sees the DOM; it parses this
//! already-normalized structure only.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One atomic, arrival-ordered unit of the external event stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RawLogEntry {
    /// The entry's full visible text.
    pub text: String,
    /// Icon asset identifiers attached to the entry, in textual order.
    pub icons: Vec<String>,
    /// Candidate player-name spans, in textual order of appearance.
    pub names: Vec<String>,
}

impl RawLogEntry {
    /// Start an entry from its visible text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icons: Vec::new(),
            names: Vec::new(),
        }
    }

    /// Attach the ordered icon identifiers.
    #[must_use]
    pub fn with_icons<I, S>(mut self, icons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.icons = icons.into_iter().map(Into::into).collect();
        self
    }

    /// Attach the ordered player-name spans.
    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// The first name span, if any — the acting player for most entry kinds.
    pub fn first_name(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    /// The last name span, if any — the counterparty in trade entries.
    pub fn last_name(&self) -> Option<&str> {
        self.names.last().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_icons_and_names() {
        let entry = RawLogEntry::new("Alice got")
            .with_icons(["card_lumber", "card_ore"])
            .with_names(["Alice"]);
        assert_eq!(entry.text, "Alice got");
        assert_eq!(entry.icons.len(), 2);
        assert_eq!(entry.first_name(), Some("Alice"));
        assert_eq!(entry.last_name(), Some("Alice"));
    }

    #[test]
    fn name_accessors_on_empty_entry() {
        let entry = RawLogEntry::new("the robber moved");
        assert_eq!(entry.first_name(), None);
        assert_eq!(entry.last_name(), None);
    }
}
