//! LearnTrack core data models.
//!
//! This crate defines the learning-activity records and the small
//! enumerations the rest of the workspace is typed against.

#![warn(missing_docs)]

// Identity
mod id;

// Activities
mod activity;
mod display;
mod theme;

mod error;

// Re-exports
pub use id::{ActivityId, IdGenerator};

pub use activity::{ActivityFilter, ActivityRecord, ActivityStatus, ActivityType, NextAction};
pub use display::{format_display_date, ColorRole};
pub use theme::ThemeMode;

pub use error::ParseError;

/// Calendar date type (no time component)
pub type Date = chrono::NaiveDate;

/// Today's date on the local calendar.
pub fn today() -> Date {
    chrono::Local::now().date_naive()
}

/// Normalize a user-supplied label for case/separator-insensitive matching.
pub(crate) fn normalize_label(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
