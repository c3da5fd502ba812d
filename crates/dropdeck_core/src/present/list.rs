//! Notification list projection (date sections with rows).

use crate::feed::grouping::DateGroups;
use crate::feed::header::format_date_header;
use crate::model::date::NotificationDate;
use crate::model::notification::{Notification, NotificationType};

pub const LIST_TITLE: &str = "Drop Messages";
pub const LIST_SUBTITLE: &str = "Manage your automated communications";

/// One clickable list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRow {
    pub id: String,
    pub title: String,
    pub group_name: String,
    pub message: String,
    pub time: String,
    pub kind: NotificationType,
    /// Row matches the current selection id.
    pub selected: bool,
}

impl NotificationRow {
    fn from_notification(notification: &Notification, selected_id: Option<&str>) -> Self {
        Self {
            id: notification.id.clone(),
            title: notification.title.clone(),
            group_name: notification.group_name.clone(),
            message: notification.message.clone(),
            time: notification.time.clone(),
            kind: notification.kind,
            selected: selected_id == Some(notification.id.as_str()),
        }
    }
}

/// Rows sharing one date, headed by a "Today"/long-form label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSection {
    pub date: NotificationDate,
    pub label: String,
    pub rows: Vec<NotificationRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationListView {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Sections newest-first.
    pub sections: Vec<DateSection>,
}

/// Builds list sections from grouped notifications.
pub fn build_list_view(
    groups: &DateGroups<'_>,
    selected_id: Option<&str>,
    today: NotificationDate,
) -> NotificationListView {
    let sections = groups
        .iter()
        .map(|group| DateSection {
            date: group.date,
            label: format_date_header(group.date, today),
            rows: group
                .items
                .iter()
                .map(|notification| NotificationRow::from_notification(notification, selected_id))
                .collect(),
        })
        .collect();

    NotificationListView {
        title: LIST_TITLE,
        subtitle: LIST_SUBTITLE,
        sections,
    }
}
