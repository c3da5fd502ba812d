//! Sidebar dropdowns and outside-interaction tracking.
//!
//! # Responsibility
//! - Track open/closed state of the sidebar dropdowns.
//! - Close open dropdowns when a pointer interaction starts outside them.
//!
//! # Invariants
//! - A dropdown is subscribed to outside-interaction checks exactly while it
//!   is open; closing always unsubscribes.
//! - Pointer events only ever close dropdowns, never open them.

use log::debug;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Sidebar dropdown regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DropdownKind {
    /// Campaign/project picker.
    ProjectPicker,
    /// "New" button menu.
    CreateMenu,
    /// Account menu in the footer.
    UserMenu,
}

pub const ALL_DROPDOWNS: [DropdownKind; 3] = [
    DropdownKind::ProjectPicker,
    DropdownKind::CreateMenu,
    DropdownKind::UserMenu,
];

impl DropdownKind {
    /// Stable wire id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProjectPicker => "PROJECT_PICKER",
            Self::CreateMenu => "CREATE_MENU",
            Self::UserMenu => "USER_MENU",
        }
    }
}

impl Display for DropdownKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DropdownKind {
    type Err = DropdownParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        ALL_DROPDOWNS
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| DropdownParseError(s.trim().to_string()))
    }
}

/// Unknown dropdown id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownParseError(pub String);

impl Display for DropdownParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported dropdown `{}`; expected PROJECT_PICKER|CREATE_MENU|USER_MENU",
            self.0
        )
    }
}

impl Error for DropdownParseError {}

/// Subscriptions to "interaction started outside my region" checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutsideInteractionWatch {
    subscribed: BTreeSet<DropdownKind>,
}

impl OutsideInteractionWatch {
    /// Returns `true` when the region was not subscribed before.
    pub fn subscribe(&mut self, region: DropdownKind) -> bool {
        self.subscribed.insert(region)
    }

    /// Returns `true` when the region was subscribed before.
    pub fn unsubscribe(&mut self, region: DropdownKind) -> bool {
        self.subscribed.remove(&region)
    }

    pub fn is_subscribed(&self, region: DropdownKind) -> bool {
        self.subscribed.contains(&region)
    }

    /// Subscribed regions that did not contain the interaction origin.
    ///
    /// `origin = None` means the interaction started outside every tracked region.
    pub fn outside_of(&self, origin: Option<DropdownKind>) -> Vec<DropdownKind> {
        self.subscribed
            .iter()
            .copied()
            .filter(|region| Some(*region) != origin)
            .collect()
    }
}

/// Open state for all sidebar dropdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dropdowns {
    open: BTreeSet<DropdownKind>,
    watch: OutsideInteractionWatch,
}

impl Dropdowns {
    pub fn is_open(&self, kind: DropdownKind) -> bool {
        self.open.contains(&kind)
    }

    /// Open dropdowns in declaration order.
    pub fn open_dropdowns(&self) -> Vec<DropdownKind> {
        self.open.iter().copied().collect()
    }

    pub fn open(&mut self, kind: DropdownKind) {
        if self.open.insert(kind) {
            self.watch.subscribe(kind);
            debug!("event=dropdown_toggle module=session status=ok dropdown={kind} open=true");
        }
    }

    pub fn close(&mut self, kind: DropdownKind) {
        if self.open.remove(&kind) {
            self.watch.unsubscribe(kind);
            debug!("event=dropdown_toggle module=session status=ok dropdown={kind} open=false");
        }
    }

    /// Flips one dropdown and returns its new open state.
    pub fn toggle(&mut self, kind: DropdownKind) -> bool {
        if self.is_open(kind) {
            self.close(kind);
            false
        } else {
            self.open(kind);
            true
        }
    }

    /// Handles a pointer-down that started in `origin` and returns the
    /// dropdowns it closed.
    pub fn pointer_down(&mut self, origin: Option<DropdownKind>) -> Vec<DropdownKind> {
        let closing = self.watch.outside_of(origin);
        for kind in &closing {
            self.close(*kind);
        }
        closing
    }

    pub fn watch(&self) -> &OutsideInteractionWatch {
        &self.watch
    }
}
