//! Sequential ingest pipeline for the Cardcount hand tracker.
//!
//! Wires the parsing crate to the ledger crate behind two small surfaces:
//!
//! - [`HandTracker`] -- `ingest` one entry or `ingest_all` from a source,
//!   then `snapshot` for the renderer.
//! - [`LogSource`] -- the capability the page-watching collaborator
//!   implements; [`ReplaySource`] replays captured sessions.
//!
//! The core has no CLI, no network surface, and no persistence: state lives
//! in memory and resets with the observing process.

pub mod pipeline;
pub mod source;

pub use pipeline::HandTracker;
pub use source::{LogSource, ReplaySource};
