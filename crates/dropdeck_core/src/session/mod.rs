//! Transient UI session state.
//!
//! # Responsibility
//! - Own view, selection, dropdown and project-pick state for one mount.
//! - Keep the dataset read-only while state changes.
//!
//! # Invariants
//! - `Dashboard` is the only owner of mutable state; children get snapshots.
//! - All operations are synchronous and complete within the calling event.

pub mod dashboard;
pub mod dropdown;
pub mod state;
