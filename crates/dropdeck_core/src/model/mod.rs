//! Domain model for the notification dashboard.
//!
//! # Responsibility
//! - Define the immutable records (contacts, notifications, projects) and the
//!   closed tag enums (`NotificationType`, `ViewState`).
//!
//! # Invariants
//! - Records are immutable once built; only UI state changes during a session.
//! - Notification dates are validated at construction/deserialization time.

pub mod contact;
pub mod date;
pub mod notification;
pub mod view;
