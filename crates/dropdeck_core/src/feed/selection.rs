//! Selected notification lookup.

use crate::model::notification::Notification;

/// Resolves the selected id against the collection.
///
/// Returns `None` for a null id or an id with no match; a miss is an empty
/// selection, not a fault. Linear scan, first match wins.
pub fn resolve_selection<'a>(
    selected_id: Option<&str>,
    notifications: &'a [Notification],
) -> Option<&'a Notification> {
    let selected_id = selected_id?;
    notifications
        .iter()
        .find(|notification| notification.id == selected_id)
}
