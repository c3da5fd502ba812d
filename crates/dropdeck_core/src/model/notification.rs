//! Outbound notification model.
//!
//! # Responsibility
//! - Define the canonical email/SMS notification record shown by the dashboard.
//!
//! # Invariants
//! - `date` is a validated calendar date; malformed dates never reach grouping.
//! - `time` is display text only and never participates in ordering.
//! - `recipients` keeps input order and is not deduplicated.

use crate::model::contact::Contact;
use crate::model::date::NotificationDate;
use serde::{Deserialize, Serialize};

/// Delivery channel of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NotificationType {
    Email,
    Sms,
}

impl NotificationType {
    /// Stable wire id (`EMAIL|SMS`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "EMAIL",
            Self::Sms => "SMS",
        }
    }
}

/// One scheduled or sent communication to a named audience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique identifier within the dataset.
    pub id: String,
    pub title: String,
    /// Message body rendered in list rows and the phone preview.
    pub message: String,
    /// Calendar day used as the grouping key.
    pub date: NotificationDate,
    /// Free-form display time such as `11:45 AM`.
    pub time: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    /// Human-readable audience label.
    pub group_name: String,
    /// Embedded recipient copies.
    #[serde(default)]
    pub recipients: Vec<Contact>,
}

impl Notification {
    /// Returns the number of embedded recipients, duplicates included.
    pub fn recipient_count(&self) -> usize {
        self.recipients.len()
    }
}
