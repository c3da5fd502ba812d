//! Session dataset: embedded seed and JSON fixture loading.
//!
//! # Responsibility
//! - Provide the built-in demo dataset.
//! - Load and validate alternative fixtures from JSON text or files.
//!
//! # Invariants
//! - A `Dataset` returned from this module has non-empty, unique
//!   notification and project ids and only valid calendar dates.
//! - Datasets are immutable for the session once loaded.

mod fixture;

pub use fixture::{load_dataset_from_path, load_dataset_from_str, seed_dataset};

use crate::model::contact::Contact;
use crate::model::notification::Notification;
use crate::model::view::Project;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Everything the dashboard shows during one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Contact directory the recipients were drawn from. Informational only.
    #[serde(default)]
    pub contacts: Vec<Contact>,
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Dataset {
    /// Checks identifier invariants.
    ///
    /// # Errors
    /// - `EmptyIdentifier` when a notification, project, or recipient id is blank.
    /// - `DuplicateNotificationId` / `DuplicateProjectId` on repeated ids.
    ///
    /// Duplicate recipients inside one notification are allowed.
    pub fn validate(&self) -> Result<(), DatasetError> {
        let mut seen = HashSet::new();
        for notification in &self.notifications {
            if notification.id.trim().is_empty() {
                return Err(DatasetError::EmptyIdentifier("notification"));
            }
            if !seen.insert(notification.id.as_str()) {
                return Err(DatasetError::DuplicateNotificationId(
                    notification.id.clone(),
                ));
            }
            if notification
                .recipients
                .iter()
                .any(|contact| contact.id.trim().is_empty())
            {
                return Err(DatasetError::EmptyIdentifier("contact"));
            }
        }

        let mut seen = HashSet::new();
        for project in &self.projects {
            if project.id.trim().is_empty() {
                return Err(DatasetError::EmptyIdentifier("project"));
            }
            if !seen.insert(project.id.as_str()) {
                return Err(DatasetError::DuplicateProjectId(project.id.clone()));
            }
        }
        Ok(())
    }
}

/// Dataset loading/validation failures.
#[derive(Debug)]
pub enum DatasetError {
    /// Fixture file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Fixture text is not valid JSON for `Dataset`, including malformed dates.
    Json(serde_json::Error),
    /// Blank identifier on the named entity kind.
    EmptyIdentifier(&'static str),
    DuplicateNotificationId(String),
    DuplicateProjectId(String),
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read fixture `{}`: {source}", path.display())
            }
            Self::Json(err) => write!(f, "invalid fixture: {err}"),
            Self::EmptyIdentifier(kind) => write!(f, "{kind} id cannot be empty"),
            Self::DuplicateNotificationId(id) => write!(f, "duplicate notification id `{id}`"),
            Self::DuplicateProjectId(id) => write!(f, "duplicate project id `{id}`"),
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
