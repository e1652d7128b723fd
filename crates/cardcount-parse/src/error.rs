//! Error types for the `cardcount-parse` crate.
//!
//! Every variant here is a soft failure: the pipeline logs it as a
//! diagnostic and skips the entry. Nothing in this crate aborts the
//! ingest stream.

/// Reasons an entry could not be turned into a usable event.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// An entry kind that requires an acting player carried no name span.
    #[error("no player name span in entry")]
    MissingPlayer,

    /// A trade entry carried fewer name spans than a trade needs.
    #[error("trade entry has {found} name span(s), need two")]
    IncompleteTrade {
        /// How many name spans were present.
        found: usize,
    },

    /// A trade entry named the same player on both sides.
    #[error("trade entry names only one distinct player: {player}")]
    SingleParticipant {
        /// The one distinct player found.
        player: String,
    },
}
