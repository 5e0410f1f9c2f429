//! Presentation lookups: palette slots per enum value and date labels.
//!
//! These are total functions; the UI resolves a [`ColorRole`] against its
//! active theme palette.

use crate::activity::{ActivityStatus, ActivityType, NextAction};
use crate::Date;

/// Named slot in the theme palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Main accent
    Primary,
    /// Secondary accent
    Secondary,
    /// Third accent
    Tertiary,
    /// Error accent
    Error,
    /// Muted surface
    SurfaceVariant,
}

impl ActivityType {
    /// Chip color for this type.
    pub fn color_role(&self) -> ColorRole {
        match self {
            ActivityType::OnlineClass => ColorRole::Tertiary,
            ActivityType::Assignment => ColorRole::Secondary,
            ActivityType::Quiz => ColorRole::Error,
            ActivityType::Discussion => ColorRole::Primary,
        }
    }
}

impl ActivityStatus {
    /// Badge color for this status.
    pub fn color_role(&self) -> ColorRole {
        match self {
            ActivityStatus::NotStarted => ColorRole::SurfaceVariant,
            ActivityStatus::InProgress => ColorRole::Tertiary,
            ActivityStatus::Completed => ColorRole::Primary,
        }
    }
}

impl NextAction {
    /// Button color for this action.
    pub fn color_role(&self) -> ColorRole {
        match self {
            NextAction::Start => ColorRole::Primary,
            NextAction::Continue => ColorRole::Tertiary,
            NextAction::Review => ColorRole::Secondary,
        }
    }
}

/// Render a date as `Oct 18, 2025`.
pub fn format_display_date(date: Date) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_roles() {
        assert_eq!(ActivityType::Quiz.color_role(), ColorRole::Error);
        assert_eq!(ActivityType::OnlineClass.color_role(), ColorRole::Tertiary);
        assert_eq!(ActivityStatus::NotStarted.color_role(), ColorRole::SurfaceVariant);
        assert_eq!(ActivityStatus::Completed.color_role(), ColorRole::Primary);
        assert_eq!(NextAction::Review.color_role(), ColorRole::Secondary);
    }

    #[test]
    fn test_format_display_date() {
        let date = Date::from_ymd_opt(2025, 10, 8).unwrap();
        assert_eq!(format_display_date(date), "Oct 8, 2025");
    }
}
