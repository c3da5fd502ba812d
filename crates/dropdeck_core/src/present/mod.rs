//! Render projections handed to the UI shell.
//!
//! # Responsibility
//! - Turn dataset + session state into plain display data (labels, flags,
//!   rows) so the shell never re-implements grouping or selection rules.
//!
//! # Invariants
//! - Projections are owned snapshots; building one never mutates state.
//! - "Today" is always injected by the caller.

pub mod detail;
pub mod list;
pub mod sidebar;

use crate::model::view::ViewState;
use detail::DetailPane;
use list::NotificationListView;
use sidebar::{PlaceholderPanel, SidebarView};

/// Main area content for the active view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainContent {
    /// Split layout: grouped list and detail pane.
    Notifications {
        list: NotificationListView,
        detail: DetailPane,
    },
    Placeholder(PlaceholderPanel),
}

/// Everything needed to render one dashboard frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSnapshot {
    pub view: ViewState,
    pub sidebar: SidebarView,
    pub content: MainContent,
}
