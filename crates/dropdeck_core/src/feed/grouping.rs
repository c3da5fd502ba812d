//! Date grouping for the notification list.
//!
//! # Responsibility
//! - Partition notifications by calendar date.
//! - Order date groups newest-first.
//!
//! # Invariants
//! - Every input notification appears in exactly one group.
//! - Keys are strictly descending by calendar date.
//! - Relative input order is preserved inside a group.

use crate::model::date::NotificationDate;
use crate::model::notification::Notification;
use std::collections::BTreeMap;

/// Notifications sharing one calendar date, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateGroup<'a> {
    pub date: NotificationDate,
    pub items: Vec<&'a Notification>,
}

/// Grouped view over a borrowed notification slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateGroups<'a> {
    keys: Vec<NotificationDate>,
    groups: BTreeMap<NotificationDate, Vec<&'a Notification>>,
}

impl<'a> DateGroups<'a> {
    /// Date keys, most recent first.
    pub fn keys(&self) -> &[NotificationDate] {
        &self.keys
    }

    /// Notifications for one date, or `None` when no notification has it.
    pub fn get(&self, date: NotificationDate) -> Option<&[&'a Notification]> {
        self.groups.get(&date).map(Vec::as_slice)
    }

    /// Iterates groups in key order (newest first).
    pub fn iter(&self) -> impl Iterator<Item = DateGroup<'a>> + '_ {
        self.keys.iter().map(move |date| DateGroup {
            date: *date,
            items: self.groups.get(date).cloned().unwrap_or_default(),
        })
    }

    /// Number of distinct dates.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of notifications across all groups.
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// Groups notifications by date and orders the groups newest-first.
///
/// Empty input yields empty groups. Dates are already validated, so no
/// invalid-date bucket exists.
pub fn group_by_date(notifications: &[Notification]) -> DateGroups<'_> {
    let mut groups: BTreeMap<NotificationDate, Vec<&Notification>> = BTreeMap::new();
    for notification in notifications {
        groups.entry(notification.date).or_default().push(notification);
    }
    let keys = groups.keys().rev().copied().collect();
    DateGroups { keys, groups }
}
