//! Log-entry parsing for the Cardcount hand tracker.
//!
//! This crate turns normalized [`RawLogEntry`] values into typed
//! [`Event`] values. Everything here is a pure function over its input —
//! the only mutable state in the workspace lives in the ledger crate.
//!
//! # Modules
//!
//! - [`classify`] -- Priority-ordered rule table mapping entries to events
//! - [`extract`] -- Icon-multiset and textual-count resource extraction
//! - [`trade`] -- Participant resolution and the given/received split
//! - [`error`] -- Soft-failure diagnostics
//!
//! [`RawLogEntry`]: cardcount_types::RawLogEntry
//! [`Event`]: cardcount_types::Event

pub mod classify;
pub mod error;
pub mod extract;
pub mod trade;

pub use classify::classify;
pub use error::ParseError;
