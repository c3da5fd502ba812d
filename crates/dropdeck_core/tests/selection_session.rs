use dropdeck_core::{
    resolve_selection, seed_dataset, Dashboard, DropdownKind, Notification, ViewState,
};

#[test]
fn resolver_returns_none_for_null_or_unknown_id() {
    let dataset = seed_dataset();
    assert!(resolve_selection(None, &dataset.notifications).is_none());
    assert!(resolve_selection(Some("999"), &dataset.notifications).is_none());
    assert!(resolve_selection(Some(""), &dataset.notifications).is_none());
}

#[test]
fn resolver_returns_matching_notification() {
    let dataset = seed_dataset();
    let found = resolve_selection(Some("3"), &dataset.notifications).unwrap();
    assert_eq!(found.title, "Merch Drop Early Access");
}

#[test]
fn resolver_on_empty_collection_is_none() {
    let empty: Vec<Notification> = Vec::new();
    assert!(resolve_selection(Some("1"), &empty).is_none());
}

#[test]
fn select_then_close_leaves_dataset_untouched() {
    let before = seed_dataset().notifications;
    let mut dashboard = Dashboard::seeded();

    dashboard.select_notification("1");
    assert_eq!(dashboard.selected_notification().unwrap().id, "1");
    dashboard.close_detail();

    assert!(dashboard.selected_notification().is_none());
    assert_eq!(dashboard.state().selected_id(), None);
    assert_eq!(dashboard.notifications(), before.as_slice());
}

#[test]
fn unknown_selection_resolves_to_empty_without_fault() {
    let mut dashboard = Dashboard::seeded();
    dashboard.select_notification("missing");
    assert_eq!(dashboard.state().selected_id(), Some("missing"));
    assert!(dashboard.selected_notification().is_none());
}

#[test]
fn seeded_dashboard_starts_on_notifications_with_first_selected() {
    let dashboard = Dashboard::seeded();
    assert_eq!(dashboard.state().view(), ViewState::Notifications);
    assert_eq!(dashboard.state().selected_id(), Some("1"));
    assert_eq!(dashboard.selected_project().unwrap().name, "Musica Basura Launch");
}

#[test]
fn outside_pointer_down_closes_only_other_open_dropdowns() {
    let mut dashboard = Dashboard::seeded();
    dashboard.toggle_dropdown(DropdownKind::CreateMenu);
    dashboard.toggle_dropdown(DropdownKind::UserMenu);

    let closed = dashboard.pointer_down(Some(DropdownKind::CreateMenu));
    assert_eq!(closed, vec![DropdownKind::UserMenu]);
    assert!(dashboard.dropdowns().is_open(DropdownKind::CreateMenu));
    assert!(!dashboard.dropdowns().is_open(DropdownKind::UserMenu));

    let closed = dashboard.pointer_down(None);
    assert_eq!(closed, vec![DropdownKind::CreateMenu]);
    assert!(dashboard.dropdowns().open_dropdowns().is_empty());
    assert!(!dashboard
        .dropdowns()
        .watch()
        .is_subscribed(DropdownKind::CreateMenu));
}

#[test]
fn pointer_down_with_nothing_open_is_a_no_op() {
    let mut dashboard = Dashboard::seeded();
    assert!(dashboard.pointer_down(None).is_empty());
    assert!(dashboard.dropdowns().open_dropdowns().is_empty());
}

#[test]
fn pick_project_closes_picker_and_ignores_unknown_ids() {
    let mut dashboard = Dashboard::seeded();
    dashboard.toggle_dropdown(DropdownKind::ProjectPicker);

    assert!(dashboard.pick_project("nope").is_none());
    assert!(dashboard.dropdowns().is_open(DropdownKind::ProjectPicker));
    assert_eq!(dashboard.selected_project().unwrap().id, "1");

    let picked = dashboard.pick_project("2").unwrap();
    assert_eq!(picked.name, "Summer Tour 2025");
    assert!(!dashboard.dropdowns().is_open(DropdownKind::ProjectPicker));
    assert_eq!(dashboard.selected_project().unwrap().id, "2");
}
