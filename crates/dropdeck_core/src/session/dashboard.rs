//! Dashboard aggregate: the single owner of dataset and UI state.
//!
//! # Responsibility
//! - Hold the session dataset read-only.
//! - Route UI interactions (view, selection, dropdowns, project pick) to the
//!   matching state container.
//! - Build render snapshots.
//!
//! # Invariants
//! - No operation here mutates notifications or projects.
//! - The selected project, when set, always names a project in the dataset.

use crate::feed::grouping::{group_by_date, DateGroups};
use crate::feed::selection::resolve_selection;
use crate::model::date::NotificationDate;
use crate::model::notification::Notification;
use crate::model::view::{Project, ViewState};
use crate::present::detail::build_detail_pane;
use crate::present::list::build_list_view;
use crate::present::sidebar::{build_sidebar, placeholder_for};
use crate::present::{DashboardSnapshot, MainContent};
use crate::seed::{seed_dataset, Dataset};
use crate::session::dropdown::{DropdownKind, Dropdowns};
use crate::session::state::DashboardState;
use log::{debug, info};

/// Notification selected when the seeded dashboard mounts.
pub const SEED_INITIAL_SELECTION: &str = "1";

pub struct Dashboard {
    notifications: Vec<Notification>,
    projects: Vec<Project>,
    state: DashboardState,
    dropdowns: Dropdowns,
    selected_project: Option<usize>,
}

impl Dashboard {
    /// Mounts a dashboard over `dataset` with an optional initial selection.
    ///
    /// The first project (if any) starts as the selected project.
    pub fn new(dataset: Dataset, initial_selection: Option<String>) -> Self {
        info!(
            "event=dashboard_mount module=session status=ok notifications={} projects={}",
            dataset.notifications.len(),
            dataset.projects.len()
        );
        let selected_project = if dataset.projects.is_empty() {
            None
        } else {
            Some(0)
        };
        Self {
            notifications: dataset.notifications,
            projects: dataset.projects,
            state: DashboardState::new(initial_selection),
            dropdowns: Dropdowns::default(),
            selected_project,
        }
    }

    /// Mounts the built-in demo dataset with notification `1` selected.
    pub fn seeded() -> Self {
        Self::new(seed_dataset(), Some(SEED_INITIAL_SELECTION.to_string()))
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn dropdowns(&self) -> &Dropdowns {
        &self.dropdowns
    }

    pub fn grouped(&self) -> DateGroups<'_> {
        group_by_date(&self.notifications)
    }

    /// Resolved selection; `None` when nothing or an unknown id is selected.
    pub fn selected_notification(&self) -> Option<&Notification> {
        resolve_selection(self.state.selected_id(), &self.notifications)
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.selected_project
            .and_then(|index| self.projects.get(index))
    }

    pub fn change_view(&mut self, view: ViewState) {
        self.state.set_view(view);
    }

    pub fn select_notification(&mut self, id: impl Into<String>) {
        self.state.select(id);
    }

    pub fn close_detail(&mut self) {
        self.state.close_detail();
    }

    /// Flips a dropdown and returns its new open state.
    pub fn toggle_dropdown(&mut self, kind: DropdownKind) -> bool {
        self.dropdowns.toggle(kind)
    }

    /// Forwards a pointer-down to outside-interaction tracking.
    pub fn pointer_down(&mut self, origin: Option<DropdownKind>) -> Vec<DropdownKind> {
        self.dropdowns.pointer_down(origin)
    }

    /// Picks a project from the picker and closes the picker.
    ///
    /// Returns `None` and leaves state unchanged when `id` is unknown.
    pub fn pick_project(&mut self, id: &str) -> Option<&Project> {
        let index = self.projects.iter().position(|project| project.id == id)?;
        debug!("event=project_pick module=session status=ok project={id}");
        self.selected_project = Some(index);
        self.dropdowns.close(DropdownKind::ProjectPicker);
        self.projects.get(index)
    }

    /// Builds the render projection for the current state.
    pub fn snapshot(&self, today: NotificationDate) -> DashboardSnapshot {
        let view = self.state.view();
        let sidebar = build_sidebar(
            view,
            &self.projects,
            self.selected_project(),
            &self.dropdowns,
        );
        let content = match placeholder_for(view) {
            Some(panel) => MainContent::Placeholder(panel),
            None => MainContent::Notifications {
                list: build_list_view(&self.grouped(), self.state.selected_id(), today),
                detail: build_detail_pane(self.selected_notification()),
            },
        };
        DashboardSnapshot {
            view,
            sidebar,
            content,
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::seeded()
    }
}
