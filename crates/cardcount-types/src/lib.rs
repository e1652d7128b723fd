//! Shared type definitions for the Cardcount hand tracker.
//!
//! This crate is the single source of truth for all types used across the
//! Cardcount workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for the extension's overlay table.
//!
//! # Modules
//!
//! - [`kinds`] -- The closed set of resource kinds and the icon-token table
//! - [`vector`] -- Signed per-kind resource counts
//! - [`entry`] -- The normalized raw log entry consumed from the page
//! - [`event`] -- Typed events produced by classification
//! - [`snapshot`] -- The renderer-facing ledger projection

pub mod entry;
pub mod event;
pub mod kinds;
pub mod snapshot;
pub mod vector;

// Re-export all public types at crate root for convenience.
pub use entry::RawLogEntry;
pub use event::Event;
pub use kinds::ResourceKind;
pub use snapshot::{PlayerHand, TableSnapshot};
pub use vector::ResourceVector;

#[cfg(test)]
mod tests {
    //! Integration tests for type exports and `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs generates TypeScript bindings when types with
        // #[ts(export)] are used. Importing them here triggers generation.
        // The actual files are written to the `bindings/` directory
        // relative to the crate root.
        use ts_rs::TS;

        let _ = crate::kinds::ResourceKind::export_all();
        let _ = crate::vector::ResourceVector::export_all();
        let _ = crate::entry::RawLogEntry::export_all();
        let _ = crate::event::Event::export_all();
        let _ = crate::snapshot::PlayerHand::export_all();
        let _ = crate::snapshot::TableSnapshot::export_all();
    }
}
