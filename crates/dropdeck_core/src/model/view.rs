//! Top-level screen tags and the cosmetic project label.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Active top-level screen. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ViewState {
    /// Split list + detail view.
    #[default]
    Notifications,
    /// Contacts directory placeholder.
    Agenda,
    /// Calendar placeholder.
    Calendar,
    /// Engagement reports placeholder.
    Reports,
}

/// Navigation order used by the sidebar.
pub const ALL_VIEWS: [ViewState; 4] = [
    ViewState::Notifications,
    ViewState::Agenda,
    ViewState::Calendar,
    ViewState::Reports,
];

impl ViewState {
    /// Stable wire id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Notifications => "NOTIFICATIONS",
            Self::Agenda => "AGENDA",
            Self::Calendar => "CALENDAR",
            Self::Reports => "REPORTS",
        }
    }

    /// Sidebar navigation label.
    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Notifications => "Home",
            Self::Agenda => "Agenda",
            Self::Calendar => "Calendar",
            Self::Reports => "Fans",
        }
    }
}

impl Display for ViewState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewState {
    type Err = ViewParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        ALL_VIEWS
            .into_iter()
            .find(|view| view.as_str() == normalized)
            .ok_or_else(|| ViewParseError(s.trim().to_string()))
    }
}

/// Unknown view id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewParseError(pub String);

impl Display for ViewParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported view `{}`; expected NOTIFICATIONS|AGENDA|CALENDAR|REPORTS",
            self.0
        )
    }
}

impl Error for ViewParseError {}

/// Campaign label shown in the sidebar picker. Has no behavioral effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
}

impl Project {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
