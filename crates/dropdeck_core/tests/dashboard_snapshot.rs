use dropdeck_core::{
    Dashboard, DetailPane, DropdownKind, MainContent, NotificationDate, NotificationType,
    ViewState,
};

fn today() -> NotificationDate {
    NotificationDate::parse("2025-05-30").unwrap()
}

#[test]
fn notifications_view_renders_sections_and_selected_preview() {
    let dashboard = Dashboard::seeded();
    let snapshot = dashboard.snapshot(today());

    let MainContent::Notifications { list, detail } = snapshot.content else {
        panic!("notifications view should render the split layout");
    };
    assert_eq!(list.title, "Drop Messages");
    let labels: Vec<&str> = list.sections.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["Today", "Thursday, May 29", "Wednesday, May 28"]);

    let today_rows = &list.sections[0].rows;
    assert_eq!(today_rows.len(), 2);
    assert!(today_rows[0].selected);
    assert!(!today_rows[1].selected);
    assert_eq!(today_rows[1].kind, NotificationType::Email);

    let DetailPane::Preview(preview) = detail else {
        panic!("selected notification should render a preview");
    };
    assert_eq!(preview.badge, "SMS Preview");
    assert_eq!(preview.delivered_label, "Delivered 11:45 AM");
    assert_eq!(preview.recipient_count_label, "4 Fans");
    assert_eq!(preview.preview_image, "https://picsum.photos/seed/1/200/150");
    let reaches: Vec<Option<&str>> = preview
        .recipients
        .iter()
        .map(|row| row.reach.as_deref())
        .collect();
    assert_eq!(
        reaches,
        vec![
            Some("ana@example.com"),
            Some("+1 555-0123"),
            Some("sophie@music.com"),
            Some("+1 555-0987"),
        ]
    );
    assert!(preview.recipients[3].avatar.is_none());
}

#[test]
fn closed_detail_renders_empty_state() {
    let mut dashboard = Dashboard::seeded();
    dashboard.close_detail();

    let MainContent::Notifications { list, detail } = dashboard.snapshot(today()).content else {
        panic!("notifications view should render the split layout");
    };
    assert!(detail.is_empty());
    assert!(list
        .sections
        .iter()
        .flat_map(|section| section.rows.iter())
        .all(|row| !row.selected));
}

#[test]
fn other_views_render_placeholders_and_keep_selection() {
    let mut dashboard = Dashboard::seeded();
    dashboard.change_view(ViewState::Calendar);

    let snapshot = dashboard.snapshot(today());
    assert_eq!(snapshot.view, ViewState::Calendar);
    let MainContent::Placeholder(panel) = snapshot.content else {
        panic!("calendar view should render a placeholder");
    };
    assert_eq!(panel.heading, "Google Calendar");

    let active: Vec<&str> = snapshot
        .sidebar
        .nav
        .iter()
        .filter(|item| item.active)
        .map(|item| item.label)
        .collect();
    assert_eq!(active, vec!["Calendar"]);
    assert_eq!(dashboard.state().selected_id(), Some("1"));
}

#[test]
fn sidebar_reflects_dropdowns_and_project() {
    let mut dashboard = Dashboard::seeded();
    dashboard.toggle_dropdown(DropdownKind::UserMenu);
    dashboard.pick_project("3");

    let sidebar = dashboard.snapshot(today()).sidebar;
    assert_eq!(sidebar.project_label.as_deref(), Some("Merch Drop V1"));
    assert!(sidebar.user_menu_open);
    assert!(!sidebar.create_menu_open);
    assert!(!sidebar.project_picker_open);
    let labels: Vec<&str> = sidebar.nav.iter().map(|item| item.label).collect();
    assert_eq!(labels, vec!["Home", "Agenda", "Calendar", "Fans"]);

    assert_eq!(sidebar.create_menu_title, "Create New");
    let create: Vec<&str> = sidebar.create_actions.iter().map(|a| a.label()).collect();
    assert_eq!(create, vec!["Event", "Contact", "Notification"]);
    let account: Vec<&str> = sidebar.account_actions.iter().map(|a| a.label()).collect();
    assert_eq!(account, vec!["Settings", "Public Profile", "Logout"]);
}
