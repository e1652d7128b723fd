//! Per-player resource ledger for the Cardcount hand tracker.
//!
//! The [`Ledger`] is the sole mutable state of the core: a mapping of player
//! name to a signed five-kind resource vector, mutated only through additive
//! deltas and read through immutable snapshots.
//!
//! # Modules
//!
//! - [`ledger`] -- The [`Ledger`] struct: rows, deltas, seeding, snapshots.
//! - [`conservation`] -- Verification that trade deltas only move resources.
//!
//! # Conservation
//!
//! For every applied trade and every resource kind:
//!
//! ```text
//! giver_after + receiver_after == giver_before + receiver_before
//! ```
//!
//! The check is by construction (the two deltas are opposing differences),
//! and [`conservation`] re-verifies it before every application as
//! defense-in-depth. Anomalies are logged, never raised: a passive observer
//! prefers slightly wrong counts over halting.

pub mod conservation;
pub mod ledger;

pub use conservation::{ConservationAnomaly, ConservationResult};
pub use ledger::Ledger;
