//! Tracker configuration.

use std::time::Duration;

use learntrack_core::{ActivityType, ThemeMode};

/// How long a notification stays visible unless superseded.
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_millis(1800);

/// Configuration for a [`Tracker`](crate::Tracker) session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Visibility window for notifications
    pub notification_ttl: Duration,
    /// Type preselected in the create dialog
    pub default_create_type: ActivityType,
    /// Theme at startup
    pub initial_theme: ThemeMode,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            notification_ttl: DEFAULT_NOTIFICATION_TTL,
            default_create_type: ActivityType::Assignment,
            initial_theme: ThemeMode::Light,
        }
    }
}
