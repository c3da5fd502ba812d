//! View and selection state for one dashboard session.
//!
//! # Invariants
//! - Exactly one view is active; changing it is an unconditional overwrite.
//! - The selected id is stored as given and only resolved at read time.
//! - Selection and view are independent; the detail pane is shown only while
//!   the notifications view is active.

use crate::model::view::ViewState;
use log::debug;

/// Mutable UI state owned by the top-level dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    view: ViewState,
    selected_id: Option<String>,
}

impl DashboardState {
    /// Creates state on the notifications view with an optional initial selection.
    pub fn new(initial_selection: Option<String>) -> Self {
        Self {
            view: ViewState::Notifications,
            selected_id: initial_selection,
        }
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Activates `view`. Any view may follow any view.
    pub fn set_view(&mut self, view: ViewState) {
        debug!(
            "event=view_change module=session status=ok from={} to={}",
            self.view, view
        );
        self.view = view;
    }

    /// Sets the selected notification id without checking it exists.
    pub fn select(&mut self, id: impl Into<String>) {
        let id = id.into();
        debug!("event=selection_change module=session status=ok selected={id}");
        self.selected_id = Some(id);
    }

    /// Clears the selection.
    pub fn close_detail(&mut self) {
        debug!("event=selection_change module=session status=ok selected=none");
        self.selected_id = None;
    }

    /// Returns whether the detail pane belongs on screen for the active view.
    pub fn detail_visible(&self) -> bool {
        self.view == ViewState::Notifications
    }
}

#[cfg(test)]
mod tests {
    use super::DashboardState;
    use crate::model::view::{ViewState, ALL_VIEWS};

    #[test]
    fn any_view_can_follow_any_view() {
        let mut state = DashboardState::default();
        for from in ALL_VIEWS {
            for to in ALL_VIEWS {
                state.set_view(from);
                state.set_view(to);
                assert_eq!(state.view(), to);
            }
        }
    }

    #[test]
    fn selection_survives_view_changes() {
        let mut state = DashboardState::new(Some("2".to_string()));
        state.set_view(ViewState::Reports);
        assert!(!state.detail_visible());
        assert_eq!(state.selected_id(), Some("2"));

        state.set_view(ViewState::Notifications);
        assert!(state.detail_visible());
        state.close_detail();
        assert_eq!(state.selected_id(), None);
    }
}
