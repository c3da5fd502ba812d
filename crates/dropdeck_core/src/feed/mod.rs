//! Read-side logic over the notification collection.
//!
//! # Responsibility
//! - Group notifications into date sections (`grouping`).
//! - Format section headers against an injected "today" (`header`).
//! - Resolve the selected notification (`selection`).
//!
//! # Invariants
//! - Functions here are pure and never mutate the collection.

pub mod grouping;
pub mod header;
pub mod selection;
