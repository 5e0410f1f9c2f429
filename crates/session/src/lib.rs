//! Session state for LearnTrack.
//!
//! Tracks what the user is looking at (filter, open dialogs, selected
//! record, theme) and owns the activity store for the lifetime of the
//! process.

#![warn(missing_docs)]

pub mod config;
pub mod notification;
pub mod view;
pub mod tracker;

pub use config::TrackerConfig;
pub use notification::{Notification, Notifier};
pub use view::{CreateDraft, ViewState};
pub use tracker::Tracker;
