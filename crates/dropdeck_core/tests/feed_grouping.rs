use dropdeck_core::{
    format_date_header, group_by_date, Contact, Notification, NotificationDate, NotificationType,
};
use std::collections::BTreeSet;

fn date(raw: &str) -> NotificationDate {
    NotificationDate::parse(raw).unwrap()
}

fn notification(id: &str, raw_date: &str) -> Notification {
    Notification {
        id: id.to_string(),
        title: format!("title {id}"),
        message: format!("message {id}"),
        date: date(raw_date),
        time: "10:00 AM".to_string(),
        kind: NotificationType::Email,
        group_name: "Newsletter".to_string(),
        recipients: vec![Contact::new("c1", "Ana").with_email("ana@example.com")],
    }
}

fn ids(items: &[&Notification]) -> Vec<String> {
    items.iter().map(|item| item.id.clone()).collect()
}

#[test]
fn four_notifications_group_into_three_dates_newest_first() {
    let input = vec![
        notification("1", "2025-05-30"),
        notification("2", "2025-05-30"),
        notification("3", "2025-05-29"),
        notification("4", "2025-05-28"),
    ];

    let groups = group_by_date(&input);
    assert_eq!(
        groups.keys(),
        &[date("2025-05-30"), date("2025-05-29"), date("2025-05-28")]
    );
    let first = groups.get(date("2025-05-30")).unwrap();
    assert_eq!(ids(first), vec!["1", "2"]);
}

#[test]
fn grouping_preserves_counts_order_and_stability_for_shuffled_input() {
    let input = vec![
        notification("a", "2024-12-31"),
        notification("b", "2025-01-02"),
        notification("c", "2024-12-31"),
        notification("d", "2023-06-15"),
        notification("e", "2025-01-02"),
        notification("f", "2024-12-31"),
    ];

    let groups = group_by_date(&input);

    let distinct_dates: BTreeSet<_> = input.iter().map(|n| n.date).collect();
    assert_eq!(groups.len(), distinct_dates.len());
    assert_eq!(groups.total(), input.len());

    assert!(groups.keys().windows(2).all(|pair| pair[0] > pair[1]));

    assert_eq!(ids(groups.get(date("2024-12-31")).unwrap()), vec!["a", "c", "f"]);
    assert_eq!(ids(groups.get(date("2025-01-02")).unwrap()), vec!["b", "e"]);

    let flattened: Vec<String> = groups
        .iter()
        .flat_map(|group| ids(&group.items))
        .collect();
    assert_eq!(flattened, vec!["b", "e", "a", "c", "f", "d"]);
}

#[test]
fn calendar_order_wins_over_text_order_across_years() {
    let input = vec![notification("old", "2024-12-31"), notification("new", "2025-01-01")];
    let groups = group_by_date(&input);
    assert_eq!(groups.keys()[0], date("2025-01-01"));
}

#[test]
fn missing_date_has_no_group() {
    let input = vec![notification("1", "2025-05-30")];
    let groups = group_by_date(&input);
    assert!(groups.get(date("2025-05-29")).is_none());
}

#[test]
fn header_uses_injected_today() {
    let today = date("2025-05-30");
    assert_eq!(format_date_header(date("2025-05-30"), today), "Today");
    assert_eq!(format_date_header(date("2025-05-28"), today), "Wednesday, May 28");
    assert_eq!(
        format_date_header(date("2025-05-30"), date("2025-05-31")),
        "Friday, May 30"
    );
}
