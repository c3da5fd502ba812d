//! Recipient contact record.
//!
//! Contacts are embedded by value into each notification; the same person may
//! appear as separate records across notifications.

use serde::{Deserialize, Serialize};

/// One recipient with optional reach channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Unique identifier within the dataset.
    pub id: String,
    /// Display name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Avatar image reference (URL or asset key).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Contact {
    /// Creates a contact with no channels set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: None,
            phone: None,
            avatar: None,
        }
    }

    /// Sets the email channel.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the phone channel.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the avatar reference.
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Returns the channel shown under the name: email first, then phone.
    ///
    /// Blank values count as missing.
    pub fn reach(&self) -> Option<&str> {
        non_blank(self.email.as_deref()).or_else(|| non_blank(self.phone.as_deref()))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|raw| !raw.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::Contact;

    #[test]
    fn reach_prefers_email_over_phone() {
        let contact = Contact::new("1", "Ana")
            .with_phone("+1 555-0000")
            .with_email("ana@example.com");
        assert_eq!(contact.reach(), Some("ana@example.com"));
    }

    #[test]
    fn reach_skips_blank_email() {
        let mut contact = Contact::new("2", "David").with_phone("+1 555");
        contact.email = Some(String::new());
        assert_eq!(contact.reach(), Some("+1 555"));

        contact.phone = Some("  ".to_string());
        assert_eq!(contact.reach(), None);
    }

    #[test]
    fn reach_is_none_without_channels() {
        let contact = Contact::new("9", "Ghost");
        assert_eq!(contact.reach(), None);
    }
}
