//! Detail pane projection: phone preview plus recipient roster.
//!
//! # Invariants
//! - A missing selection renders the empty state; it is never an error.
//! - The roster lists recipients in stored order, duplicates included.

use crate::model::contact::Contact;
use crate::model::notification::{Notification, NotificationType};

pub const EMPTY_DETAIL_TITLE: &str = "No Selection";
pub const EMPTY_DETAIL_HINT: &str =
    "Select a notification from the list to view its details and recipients.";

/// One roster line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientRow {
    pub id: String,
    pub name: String,
    /// Email when present, else phone.
    pub reach: Option<String>,
    /// `None` renders the generic user icon.
    pub avatar: Option<String>,
}

impl From<&Contact> for RecipientRow {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id.clone(),
            name: contact.name.clone(),
            reach: contact.reach().map(str::to_string),
            avatar: contact.avatar.clone(),
        }
    }
}

/// Phone preview content for the selected notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationPreview {
    pub id: String,
    pub kind: NotificationType,
    /// Header badge, e.g. `SMS Preview`.
    pub badge: String,
    pub title: String,
    pub message: String,
    /// e.g. `Delivered 11:45 AM`.
    pub delivered_label: String,
    /// Call-to-action mockup image, seeded by notification id.
    pub preview_image: String,
    /// e.g. `4 Fans`.
    pub recipient_count_label: String,
    pub recipients: Vec<RecipientRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailPane {
    Empty {
        title: &'static str,
        hint: &'static str,
    },
    Preview(NotificationPreview),
}

impl DetailPane {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

/// Builds the detail pane for the resolved selection.
pub fn build_detail_pane(selected: Option<&Notification>) -> DetailPane {
    let Some(notification) = selected else {
        return DetailPane::Empty {
            title: EMPTY_DETAIL_TITLE,
            hint: EMPTY_DETAIL_HINT,
        };
    };

    DetailPane::Preview(NotificationPreview {
        id: notification.id.clone(),
        kind: notification.kind,
        badge: format!("{} Preview", notification.kind.as_str()),
        title: notification.title.clone(),
        message: notification.message.clone(),
        delivered_label: format!("Delivered {}", notification.time),
        preview_image: format!("https://picsum.photos/seed/{}/200/150", notification.id),
        recipient_count_label: format!("{} Fans", notification.recipient_count()),
        recipients: notification.recipients.iter().map(RecipientRow::from).collect(),
    })
}
