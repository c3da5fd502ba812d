//! Calendar date value used as the notification grouping key.
//!
//! # Responsibility
//! - Parse strict ISO `YYYY-MM-DD` input into a validated calendar date.
//! - Serialize back to the same canonical text form.
//!
//! # Invariants
//! - A `NotificationDate` always holds a real calendar day.
//! - Non-ISO shapes (`5/28/2025`, `2025-5-28`, `May 28`) are rejected, never guessed.
//! - Ordering follows the calendar, not the text.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid iso date regex"));

/// Validated date-only value (no time zone semantics).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationDate(NaiveDate);

impl NotificationDate {
    /// Parses strict ISO `YYYY-MM-DD` text.
    ///
    /// # Errors
    /// - `DateParseError::Empty` for blank input.
    /// - `DateParseError::NotIso` when the shape is not `YYYY-MM-DD`.
    /// - `DateParseError::OutOfRange` when the shape is right but the day does not exist.
    pub fn parse(value: &str) -> Result<Self, DateParseError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DateParseError::Empty);
        }
        if !ISO_DATE_RE.is_match(trimmed) {
            return Err(DateParseError::NotIso(trimmed.to_string()));
        }
        NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT)
            .map(Self)
            .map_err(|_| DateParseError::OutOfRange(trimmed.to_string()))
    }

    /// Builds a date from numeric parts, returning `None` for impossible days.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Reads the local calendar day from the system clock.
    ///
    /// Only entry points (FFI, CLI) call this; core logic takes "today" as input.
    pub fn today_local() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    /// Returns the underlying calendar date.
    pub fn as_naive(self) -> NaiveDate {
        self.0
    }

    /// Returns the canonical `YYYY-MM-DD` text form.
    pub fn to_iso_string(self) -> String {
        self.0.format(ISO_DATE_FORMAT).to_string()
    }
}

impl From<NaiveDate> for NotificationDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl FromStr for NotificationDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for NotificationDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(ISO_DATE_FORMAT))
    }
}

impl Serialize for NotificationDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_iso_string())
    }
}

impl<'de> Deserialize<'de> for NotificationDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Date parse failures. Every variant means the input must be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    /// Blank input.
    Empty,
    /// Input is not shaped like `YYYY-MM-DD`.
    NotIso(String),
    /// Input is shaped correctly but names a day that does not exist.
    OutOfRange(String),
}

impl Display for DateParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "date cannot be empty"),
            Self::NotIso(value) => {
                write!(f, "date `{value}` is not an ISO calendar date (YYYY-MM-DD)")
            }
            Self::OutOfRange(value) => write!(f, "date `{value}` is not a valid calendar day"),
        }
    }
}

impl Error for DateParseError {}

#[cfg(test)]
mod tests {
    use super::{DateParseError, NotificationDate};

    #[test]
    fn parse_accepts_iso_and_trims() {
        let date = NotificationDate::parse(" 2025-05-30 ").expect("iso date should parse");
        assert_eq!(date.to_iso_string(), "2025-05-30");
    }

    #[test]
    fn parse_rejects_non_iso_shapes() {
        for raw in [
            "5/28/2025",
            "2025-5-28",
            "May 28",
            "2025-05-28T10:00:00",
            "２０２５-０５-３０",
        ] {
            let err = NotificationDate::parse(raw).expect_err("non-iso must be rejected");
            assert!(matches!(err, DateParseError::NotIso(_)), "{raw}: {err}");
        }
    }

    #[test]
    fn parse_rejects_impossible_days() {
        let err = NotificationDate::parse("2025-02-30").unwrap_err();
        assert_eq!(err, DateParseError::OutOfRange("2025-02-30".to_string()));
    }

    #[test]
    fn ordering_follows_calendar() {
        let earlier = NotificationDate::parse("2024-12-31").unwrap();
        let later = NotificationDate::parse("2025-01-01").unwrap();
        assert!(earlier < later);
    }
}
