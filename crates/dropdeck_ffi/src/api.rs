//! FFI use-case API for the Flutter dashboard shell.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Own the single process-wide dashboard session.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Calls are serialized through one session lock.
//! - Wire ids for views, types and dropdowns are the core `as_str()` values.

use dropdeck_core::present::detail::{DetailPane, NotificationPreview};
use dropdeck_core::present::list::DateSection;
use dropdeck_core::present::sidebar::SidebarView;
use dropdeck_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    load_dataset_from_path, ping as ping_inner, Dashboard, DashboardSnapshot,
    DropdownKind, MainContent, NotificationDate, ViewState,
};
use log::{error, info};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

const FIXTURE_PATH_ENV: &str = "DROPDECK_FIXTURE_PATH";

static SESSION: OnceLock<Mutex<Dashboard>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope for interaction calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the interaction was applied.
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// One list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRowItem {
    pub id: String,
    pub title: String,
    pub group_name: String,
    pub message: String,
    pub time: String,
    /// `EMAIL|SMS`.
    pub kind: String,
    pub selected: bool,
}

/// One date section; `date` is `YYYY-MM-DD`, `label` is `Today` or long form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSectionItem {
    pub date: String,
    pub label: String,
    pub rows: Vec<NotificationRowItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientItem {
    pub id: String,
    pub name: String,
    pub reach: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewItem {
    pub id: String,
    pub kind: String,
    pub badge: String,
    pub title: String,
    pub message: String,
    pub delivered_label: String,
    pub preview_image: String,
    pub recipient_count_label: String,
    pub recipients: Vec<RecipientItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailPaneItem {
    Empty { title: String, hint: String },
    Preview(PreviewItem),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainContentItem {
    Notifications {
        title: String,
        subtitle: String,
        sections: Vec<DateSectionItem>,
        detail: DetailPaneItem,
    },
    Placeholder {
        heading: String,
        caption: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItemView {
    /// View wire id.
    pub view: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarItem {
    pub project_label: Option<String>,
    pub projects: Vec<ProjectItem>,
    pub nav: Vec<NavItemView>,
    pub create_menu_title: String,
    /// "Create New" menu entry labels.
    pub create_actions: Vec<String>,
    /// Account menu entry labels.
    pub account_actions: Vec<String>,
    /// Dropdown wire ids currently open.
    pub open_dropdowns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardFrame {
    pub view: String,
    pub sidebar: SidebarItem,
    pub content: MainContentItem,
}

/// Snapshot response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotResponse {
    pub ok: bool,
    pub message: String,
    /// `None` when `ok == false`.
    pub frame: Option<DashboardFrame>,
}

/// Builds the render frame for the current session state.
///
/// Input semantics:
/// - `today`: `YYYY-MM-DD`; empty string means the device's local date.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics; invalid `today` returns `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_snapshot(today: String) -> SnapshotResponse {
    let today = match resolve_today(&today) {
        Ok(today) => today,
        Err(message) => {
            return SnapshotResponse {
                ok: false,
                message,
                frame: None,
            }
        }
    };

    match with_session(|dashboard| dashboard.snapshot(today)) {
        Ok(snapshot) => SnapshotResponse {
            ok: true,
            message: String::new(),
            frame: Some(to_frame(snapshot)),
        },
        Err(message) => SnapshotResponse {
            ok: false,
            message,
            frame: None,
        },
    }
}

/// Selects one notification by id. Unknown ids render the empty detail pane.
#[flutter_rust_bridge::frb(sync)]
pub fn select_notification(id: String) -> ActionResponse {
    let id = id.trim().to_string();
    if id.is_empty() {
        return ActionResponse::failure("select_notification failed: id cannot be empty");
    }
    match with_session(|dashboard| {
        dashboard.select_notification(id.clone());
        dashboard.selected_notification().is_some()
    }) {
        Ok(true) => ActionResponse::success("Notification selected."),
        Ok(false) => ActionResponse::success(format!("No notification with id `{id}`.")),
        Err(err) => ActionResponse::failure(format!("select_notification failed: {err}")),
    }
}

/// Clears the selection (detail pane close button).
#[flutter_rust_bridge::frb(sync)]
pub fn close_detail() -> ActionResponse {
    match with_session(Dashboard::close_detail) {
        Ok(()) => ActionResponse::success("Detail closed."),
        Err(err) => ActionResponse::failure(format!("close_detail failed: {err}")),
    }
}

/// Switches the active view by wire id (`NOTIFICATIONS|AGENDA|CALENDAR|REPORTS`).
#[flutter_rust_bridge::frb(sync)]
pub fn change_view(view: String) -> ActionResponse {
    let view = match view.parse::<ViewState>() {
        Ok(view) => view,
        Err(err) => return ActionResponse::failure(format!("change_view failed: {err}")),
    };
    match with_session(|dashboard| dashboard.change_view(view)) {
        Ok(()) => ActionResponse::success(format!("View {view} active.")),
        Err(err) => ActionResponse::failure(format!("change_view failed: {err}")),
    }
}

/// Toggles a sidebar dropdown by wire id (`PROJECT_PICKER|CREATE_MENU|USER_MENU`).
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_dropdown(dropdown: String) -> ActionResponse {
    let kind = match dropdown.parse::<DropdownKind>() {
        Ok(kind) => kind,
        Err(err) => return ActionResponse::failure(format!("toggle_dropdown failed: {err}")),
    };
    match with_session(|dashboard| dashboard.toggle_dropdown(kind)) {
        Ok(true) => ActionResponse::success(format!("{kind} opened.")),
        Ok(false) => ActionResponse::success(format!("{kind} closed.")),
        Err(err) => ActionResponse::failure(format!("toggle_dropdown failed: {err}")),
    }
}

/// Reports a pointer-down; `region` is the dropdown it started in, or `None`.
///
/// Returns the closed dropdown wire ids in `message`, comma separated.
#[flutter_rust_bridge::frb(sync)]
pub fn pointer_down(region: Option<String>) -> ActionResponse {
    let origin = match region.as_deref().map(str::trim).filter(|raw| !raw.is_empty()) {
        None => None,
        Some(raw) => match raw.parse::<DropdownKind>() {
            Ok(kind) => Some(kind),
            Err(err) => return ActionResponse::failure(format!("pointer_down failed: {err}")),
        },
    };
    match with_session(|dashboard| dashboard.pointer_down(origin)) {
        Ok(closed) => ActionResponse::success(
            closed
                .iter()
                .map(|kind| kind.as_str())
                .collect::<Vec<_>>()
                .join(","),
        ),
        Err(err) => ActionResponse::failure(format!("pointer_down failed: {err}")),
    }
}

/// Picks the cosmetic project label from the picker.
#[flutter_rust_bridge::frb(sync)]
pub fn pick_project(id: String) -> ActionResponse {
    let id = id.trim().to_string();
    match with_session(|dashboard| dashboard.pick_project(&id).map(|project| project.name.clone()))
    {
        Ok(Some(name)) => ActionResponse::success(format!("Project `{name}` selected.")),
        Ok(None) => ActionResponse::failure(format!("pick_project failed: unknown project `{id}`")),
        Err(err) => ActionResponse::failure(format!("pick_project failed: {err}")),
    }
}

fn resolve_today(raw: &str) -> Result<NotificationDate, String> {
    if raw.trim().is_empty() {
        return Ok(NotificationDate::today_local());
    }
    NotificationDate::parse(raw).map_err(|err| format!("dashboard_snapshot failed: {err}"))
}

fn resolve_fixture_path() -> Option<PathBuf> {
    let raw = std::env::var(FIXTURE_PATH_ENV).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}

fn mount_session() -> Dashboard {
    let Some(path) = resolve_fixture_path() else {
        return Dashboard::seeded();
    };
    match load_dataset_from_path(&path) {
        Ok(dataset) => {
            info!("event=session_mount module=ffi status=ok source=fixture");
            let first = dataset.notifications.first().map(|n| n.id.clone());
            Dashboard::new(dataset, first)
        }
        Err(err) => {
            error!(
                "event=session_mount module=ffi status=error source=fixture fallback=seed error={}",
                err
            );
            Dashboard::seeded()
        }
    }
}

fn with_session<T>(f: impl FnOnce(&mut Dashboard) -> T) -> Result<T, String> {
    let session = SESSION.get_or_init(|| Mutex::new(mount_session()));
    let mut guard = session
        .lock()
        .map_err(|_| "dashboard session lock poisoned".to_string())?;
    Ok(f(&mut *guard))
}

fn to_frame(snapshot: DashboardSnapshot) -> DashboardFrame {
    DashboardFrame {
        view: snapshot.view.as_str().to_string(),
        sidebar: to_sidebar_item(snapshot.sidebar),
        content: match snapshot.content {
            MainContent::Notifications { list, detail } => MainContentItem::Notifications {
                title: list.title.to_string(),
                subtitle: list.subtitle.to_string(),
                sections: list.sections.into_iter().map(to_section_item).collect(),
                detail: to_detail_item(detail),
            },
            MainContent::Placeholder(panel) => MainContentItem::Placeholder {
                heading: panel.heading.to_string(),
                caption: panel.caption.to_string(),
            },
        },
    }
}

fn to_sidebar_item(sidebar: SidebarView) -> SidebarItem {
    let mut open_dropdowns = Vec::new();
    for (open, kind) in [
        (sidebar.project_picker_open, DropdownKind::ProjectPicker),
        (sidebar.create_menu_open, DropdownKind::CreateMenu),
        (sidebar.user_menu_open, DropdownKind::UserMenu),
    ] {
        if open {
            open_dropdowns.push(kind.as_str().to_string());
        }
    }

    SidebarItem {
        project_label: sidebar.project_label,
        projects: sidebar
            .projects
            .into_iter()
            .map(|project| ProjectItem {
                id: project.id,
                name: project.name,
            })
            .collect(),
        nav: sidebar
            .nav
            .into_iter()
            .map(|item| NavItemView {
                view: item.view.as_str().to_string(),
                label: item.label.to_string(),
                active: item.active,
            })
            .collect(),
        create_menu_title: sidebar.create_menu_title.to_string(),
        create_actions: sidebar
            .create_actions
            .iter()
            .map(|action| action.label().to_string())
            .collect(),
        account_actions: sidebar
            .account_actions
            .iter()
            .map(|action| action.label().to_string())
            .collect(),
        open_dropdowns,
    }
}

fn to_section_item(section: DateSection) -> DateSectionItem {
    DateSectionItem {
        date: section.date.to_iso_string(),
        label: section.label,
        rows: section
            .rows
            .into_iter()
            .map(|row| NotificationRowItem {
                id: row.id,
                title: row.title,
                group_name: row.group_name,
                message: row.message,
                time: row.time,
                kind: row.kind.as_str().to_string(),
                selected: row.selected,
            })
            .collect(),
    }
}

fn to_detail_item(detail: DetailPane) -> DetailPaneItem {
    match detail {
        DetailPane::Empty { title, hint } => DetailPaneItem::Empty {
            title: title.to_string(),
            hint: hint.to_string(),
        },
        DetailPane::Preview(preview) => DetailPaneItem::Preview(to_preview_item(preview)),
    }
}

fn to_preview_item(preview: NotificationPreview) -> PreviewItem {
    PreviewItem {
        id: preview.id,
        kind: preview.kind.as_str().to_string(),
        badge: preview.badge,
        title: preview.title,
        message: preview.message,
        delivered_label: preview.delivered_label,
        preview_image: preview.preview_image,
        recipient_count_label: preview.recipient_count_label,
        recipients: preview
            .recipients
            .into_iter()
            .map(|row| RecipientItem {
                id: row.id,
                name: row.name,
                reach: row.reach,
                avatar: row.avatar,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        change_view, close_detail, core_version, dashboard_snapshot, init_logging, pick_project,
        ping, pointer_down, select_notification, toggle_dropdown, DetailPaneItem,
        MainContentItem,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn invalid_inputs_fail_without_touching_session() {
        let response = dashboard_snapshot("30/05/2025".to_string());
        assert!(!response.ok);
        assert!(response.frame.is_none());
        assert!(response.message.contains("ISO"));

        assert!(!change_view("Fans".to_string()).ok);
        assert!(!toggle_dropdown("sidebar".to_string()).ok);
        assert!(!pointer_down(Some("nav".to_string())).ok);
        assert!(!select_notification("  ".to_string()).ok);
        assert!(!pick_project("missing".to_string()).ok);
    }

    // Single test drives the shared session so assertions do not race.
    #[test]
    fn session_flow_updates_frames() {
        assert!(change_view("notifications".to_string()).ok);
        assert!(select_notification("3".to_string()).ok);

        let frame = dashboard_snapshot("2025-05-30".to_string())
            .frame
            .expect("frame");
        assert_eq!(frame.view, "NOTIFICATIONS");
        let MainContentItem::Notifications {
            sections, detail, ..
        } = frame.content
        else {
            panic!("notifications content expected");
        };
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].label, "Today");
        assert_eq!(sections[1].date, "2025-05-29");
        assert!(sections[1].rows[0].selected);
        let DetailPaneItem::Preview(preview) = detail else {
            panic!("preview expected");
        };
        assert_eq!(preview.badge, "SMS Preview");
        assert_eq!(preview.recipient_count_label, "2 Fans");

        assert!(close_detail().ok);
        let frame = dashboard_snapshot("2025-05-30".to_string())
            .frame
            .expect("frame");
        let MainContentItem::Notifications { detail, .. } = frame.content else {
            panic!("notifications content expected");
        };
        assert!(matches!(detail, DetailPaneItem::Empty { .. }));

        let opened = toggle_dropdown("CREATE_MENU".to_string());
        assert_eq!(opened.message, "CREATE_MENU opened.");
        let closed = pointer_down(None);
        assert_eq!(closed.message, "CREATE_MENU");

        assert!(pick_project("2".to_string()).ok);
        assert!(change_view("REPORTS".to_string()).ok);
        let frame = dashboard_snapshot("2025-05-30".to_string())
            .frame
            .expect("frame");
        assert_eq!(frame.sidebar.project_label.as_deref(), Some("Summer Tour 2025"));
        assert!(frame.sidebar.open_dropdowns.is_empty());
        assert_eq!(frame.sidebar.create_menu_title, "Create New");
        assert_eq!(
            frame.sidebar.create_actions,
            vec!["Event", "Contact", "Notification"]
        );
        assert_eq!(
            frame.sidebar.account_actions,
            vec!["Settings", "Public Profile", "Logout"]
        );
        assert!(matches!(
            frame.content,
            MainContentItem::Placeholder { ref heading, .. } if heading == "Analytics"
        ));
    }
}
