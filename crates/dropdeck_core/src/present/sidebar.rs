//! Sidebar projection: project picker, create menu, navigation, account menu.

use crate::model::view::{Project, ViewState, ALL_VIEWS};
use crate::session::dropdown::{DropdownKind, Dropdowns};

/// Entries of the "Create New" menu. They have no behavior yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateAction {
    Event,
    Contact,
    Notification,
}

impl CreateAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Event => "Event",
            Self::Contact => "Contact",
            Self::Notification => "Notification",
        }
    }
}

pub const CREATE_MENU_TITLE: &str = "Create New";
pub const CREATE_ACTIONS: [CreateAction; 3] = [
    CreateAction::Event,
    CreateAction::Contact,
    CreateAction::Notification,
];

/// Entries of the account menu. They have no behavior yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountAction {
    Settings,
    PublicProfile,
    Logout,
}

impl AccountAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Settings => "Settings",
            Self::PublicProfile => "Public Profile",
            Self::Logout => "Logout",
        }
    }
}

pub const ACCOUNT_ACTIONS: [AccountAction; 3] = [
    AccountAction::Settings,
    AccountAction::PublicProfile,
    AccountAction::Logout,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub view: ViewState,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarView {
    /// Name shown on the picker button.
    pub project_label: Option<String>,
    pub projects: Vec<Project>,
    pub nav: Vec<NavItem>,
    /// Heading of the "New" button menu.
    pub create_menu_title: &'static str,
    pub create_actions: Vec<CreateAction>,
    pub account_actions: Vec<AccountAction>,
    pub project_picker_open: bool,
    pub create_menu_open: bool,
    pub user_menu_open: bool,
}

/// Builds the sidebar for the active view, project and dropdown state.
pub fn build_sidebar(
    active_view: ViewState,
    projects: &[Project],
    selected_project: Option<&Project>,
    dropdowns: &Dropdowns,
) -> SidebarView {
    let nav = ALL_VIEWS
        .into_iter()
        .map(|view| NavItem {
            view,
            label: view.nav_label(),
            active: view == active_view,
        })
        .collect();

    SidebarView {
        project_label: selected_project.map(|project| project.name.clone()),
        projects: projects.to_vec(),
        nav,
        create_menu_title: CREATE_MENU_TITLE,
        create_actions: CREATE_ACTIONS.to_vec(),
        account_actions: ACCOUNT_ACTIONS.to_vec(),
        project_picker_open: dropdowns.is_open(DropdownKind::ProjectPicker),
        create_menu_open: dropdowns.is_open(DropdownKind::CreateMenu),
        user_menu_open: dropdowns.is_open(DropdownKind::UserMenu),
    }
}

/// Static screen shown for views other than notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderPanel {
    pub view: ViewState,
    pub heading: &'static str,
    pub caption: &'static str,
}

/// Returns the placeholder for `view`, or `None` for the notifications view.
pub fn placeholder_for(view: ViewState) -> Option<PlaceholderPanel> {
    let (heading, caption) = match view {
        ViewState::Notifications => return None,
        ViewState::Agenda => (
            "Google Contacts",
            "Syncing your contacts directory... (Simulation)",
        ),
        ViewState::Calendar => (
            "Google Calendar",
            "Fetching your scheduled events... (Simulation)",
        ),
        ViewState::Reports => ("Analytics", "Viewing fan engagement reports... (Simulation)"),
    };
    Some(PlaceholderPanel {
        view,
        heading,
        caption,
    })
}
