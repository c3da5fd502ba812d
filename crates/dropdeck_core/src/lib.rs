//! Core logic for the DropDeck notification dashboard.
//! UI shells render what this crate projects; grouping, selection and
//! session rules live only here.

pub mod feed;
pub mod logging;
pub mod model;
pub mod present;
pub mod seed;
pub mod session;

pub use feed::grouping::{group_by_date, DateGroup, DateGroups};
pub use feed::header::{format_date_header, TODAY_LABEL};
pub use feed::selection::resolve_selection;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::Contact;
pub use model::date::{DateParseError, NotificationDate};
pub use model::notification::{Notification, NotificationType};
pub use model::view::{Project, ViewParseError, ViewState, ALL_VIEWS};
pub use present::detail::{DetailPane, NotificationPreview, RecipientRow};
pub use present::list::{DateSection, NotificationListView, NotificationRow};
pub use present::sidebar::{NavItem, PlaceholderPanel, SidebarView};
pub use present::{DashboardSnapshot, MainContent};
pub use seed::{load_dataset_from_path, load_dataset_from_str, seed_dataset, Dataset, DatasetError};
pub use session::dashboard::Dashboard;
pub use session::dropdown::{DropdownKind, DropdownParseError, Dropdowns};
pub use session::state::DashboardState;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
