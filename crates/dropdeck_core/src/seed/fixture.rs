//! Built-in demo dataset and JSON fixture loaders.

use super::{Dataset, DatasetError};
use crate::model::contact::Contact;
use crate::model::date::NotificationDate;
use crate::model::notification::{Notification, NotificationType};
use crate::model::view::Project;
use log::{error, info};
use std::path::Path;

/// Returns the built-in demo dataset.
///
/// Four notifications across 2025-05-28..=2025-05-30, four shared contacts
/// plus one extra recipient, and three campaign projects.
pub fn seed_dataset() -> Dataset {
    let contacts = vec![
        Contact::new("1", "Ana Garcia")
            .with_email("ana@example.com")
            .with_avatar("https://picsum.photos/id/64/100/100"),
        Contact::new("2", "David Lee")
            .with_phone("+1 555-0123")
            .with_avatar("https://picsum.photos/id/91/100/100"),
        Contact::new("3", "Sophie Turner")
            .with_email("sophie@music.com")
            .with_avatar("https://picsum.photos/id/129/100/100"),
        Contact::new("4", "Marcus Jones").with_phone("+1 555-0987"),
    ];

    let mut all_subscribers = contacts.clone();
    all_subscribers.push(Contact::new("5", "Extra Fan").with_email("fan@fan.com"));

    let notifications = vec![
        seed_notification(
            "1",
            "Lanzamiento Musica Basura",
            "Este es el nuevo lanzamiento de mi Musica Basura!!! Check it out now.",
            (2025, 5, 30),
            "11:45 AM",
            NotificationType::Sms,
            "Super Fans",
            contacts.clone(),
        ),
        seed_notification(
            "2",
            "Pre-save Reminder",
            "Hey! Just a reminder that the new track drops in 24 hours. Pre-save now to be the first to hear it.",
            (2025, 5, 30),
            "09:00 AM",
            NotificationType::Email,
            "All Subscribers",
            all_subscribers,
        ),
        seed_notification(
            "3",
            "Merch Drop Early Access",
            "Secret link for the new hoodie drop. Only for VIPs.",
            (2025, 5, 29),
            "4:20 PM",
            NotificationType::Sms,
            "VIP",
            vec![contacts[0].clone(), contacts[2].clone()],
        ),
        seed_notification(
            "4",
            "Tour Announcement",
            "We are going on tour! Check the dates in your city.",
            (2025, 5, 28),
            "10:00 AM",
            NotificationType::Email,
            "Newsletter",
            contacts.clone(),
        ),
    ];

    let projects = vec![
        Project::new("1", "Musica Basura Launch"),
        Project::new("2", "Summer Tour 2025"),
        Project::new("3", "Merch Drop V1"),
    ];

    Dataset {
        contacts,
        notifications,
        projects,
    }
}

#[allow(clippy::too_many_arguments)]
fn seed_notification(
    id: &str,
    title: &str,
    message: &str,
    (year, month, day): (i32, u32, u32),
    time: &str,
    kind: NotificationType,
    group_name: &str,
    recipients: Vec<Contact>,
) -> Notification {
    Notification {
        id: id.to_string(),
        title: title.to_string(),
        message: message.to_string(),
        date: NotificationDate::from_ymd(year, month, day).expect("seed dates are valid"),
        time: time.to_string(),
        kind,
        group_name: group_name.to_string(),
        recipients,
    }
}

/// Parses and validates a JSON fixture.
///
/// # Errors
/// - `DatasetError::Json` for malformed JSON or non-ISO dates.
/// - Identifier errors from `Dataset::validate`.
pub fn load_dataset_from_str(json: &str) -> Result<Dataset, DatasetError> {
    let dataset: Dataset = serde_json::from_str(json)?;
    dataset.validate()?;
    Ok(dataset)
}

/// Reads, parses and validates a JSON fixture file.
///
/// # Side effects
/// - Emits `dataset_load` logging events with counts or the failure reason.
pub fn load_dataset_from_path(path: impl AsRef<Path>) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    info!("event=dataset_load module=seed status=start mode=file");

    let result = std::fs::read_to_string(path)
        .map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|text| load_dataset_from_str(&text));

    match &result {
        Ok(dataset) => info!(
            "event=dataset_load module=seed status=ok mode=file notifications={} projects={}",
            dataset.notifications.len(),
            dataset.projects.len()
        ),
        Err(err) => error!(
            "event=dataset_load module=seed status=error mode=file error={}",
            err
        ),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::seed_dataset;

    #[test]
    fn seed_dataset_is_valid() {
        let dataset = seed_dataset();
        dataset.validate().expect("seed must validate");
        assert_eq!(dataset.notifications.len(), 4);
        assert_eq!(dataset.projects.len(), 3);
        assert_eq!(dataset.notifications[1].recipient_count(), 5);
    }
}
