//! Activity model - one trackable learning item.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::id::ActivityId;
use crate::{normalize_label, Date};

/// A learning activity shown in the tracker list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    /// Unique identifier, never reassigned
    pub id: ActivityId,

    /// Kind of activity
    #[serde(rename = "type")]
    pub activity_type: ActivityType,

    /// Display title
    pub title: String,

    /// Current status
    pub status: ActivityStatus,

    /// Scheduled calendar date
    pub date: Date,

    /// Primary action currently available
    pub next_action: NextAction,
}

impl ActivityRecord {
    /// Build a fresh record as the create flow does: not started, action "Start".
    pub fn new_not_started(
        id: ActivityId,
        title: impl Into<String>,
        activity_type: ActivityType,
        date: Date,
    ) -> Self {
        Self {
            id,
            activity_type,
            title: title.into(),
            status: ActivityStatus::NotStarted,
            date,
            next_action: NextAction::Start,
        }
    }
}

/// Kind of learning activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    /// Live or recorded lecture
    #[serde(rename = "Online Class")]
    OnlineClass,
    /// Graded take-home work
    Assignment,
    /// Short assessment
    Quiz,
    /// Forum or group discussion
    Discussion,
}

impl ActivityType {
    /// Every type, in menu order.
    pub const ALL: [ActivityType; 4] = [
        ActivityType::OnlineClass,
        ActivityType::Assignment,
        ActivityType::Quiz,
        ActivityType::Discussion,
    ];

    /// Human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::OnlineClass => "Online Class",
            ActivityType::Assignment => "Assignment",
            ActivityType::Quiz => "Quiz",
            ActivityType::Discussion => "Discussion",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "onlineclass" | "class" => Ok(ActivityType::OnlineClass),
            "assignment" => Ok(ActivityType::Assignment),
            "quiz" => Ok(ActivityType::Quiz),
            "discussion" => Ok(ActivityType::Discussion),
            _ => Err(ParseError::new("activity type", s)),
        }
    }
}

/// Progress status of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityStatus {
    /// Not yet begun
    #[serde(rename = "Not Started")]
    NotStarted,
    /// Begun but not finished
    #[serde(rename = "In Progress")]
    InProgress,
    /// Finished
    Completed,
}

impl ActivityStatus {
    /// Human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityStatus::NotStarted => "Not Started",
            ActivityStatus::InProgress => "In Progress",
            ActivityStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ActivityStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "notstarted" => Ok(ActivityStatus::NotStarted),
            "inprogress" => Ok(ActivityStatus::InProgress),
            "completed" => Ok(ActivityStatus::Completed),
            _ => Err(ParseError::new("activity status", s)),
        }
    }
}

/// Primary action offered for an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NextAction {
    /// Begin the activity
    Start,
    /// Resume the activity
    Continue,
    /// Look back over a finished activity
    Review,
}

impl NextAction {
    /// Button label.
    pub fn as_str(&self) -> &'static str {
        match self {
            NextAction::Start => "Start",
            NextAction::Continue => "Continue",
            NextAction::Review => "Review",
        }
    }
}

impl fmt::Display for NextAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for NextAction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "start" => Ok(NextAction::Start),
            "continue" => Ok(NextAction::Continue),
            "review" => Ok(NextAction::Review),
            _ => Err(ParseError::new("next action", s)),
        }
    }
}

/// Filter applied to the activity list: one type, or the `All` wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActivityFilter {
    /// Show every record
    #[default]
    All,
    /// Show only records of this type
    Only(ActivityType),
}

impl ActivityFilter {
    /// Filter options in menu order: `All` first, then each type.
    pub const ALL_OPTIONS: [ActivityFilter; 5] = [
        ActivityFilter::All,
        ActivityFilter::Only(ActivityType::OnlineClass),
        ActivityFilter::Only(ActivityType::Assignment),
        ActivityFilter::Only(ActivityType::Quiz),
        ActivityFilter::Only(ActivityType::Discussion),
    ];

    /// Whether a record passes this filter.
    pub fn matches(&self, record: &ActivityRecord) -> bool {
        match self {
            ActivityFilter::All => true,
            ActivityFilter::Only(t) => record.activity_type == *t,
        }
    }

    /// Menu label.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityFilter::All => "All",
            ActivityFilter::Only(t) => t.as_str(),
        }
    }
}

impl From<ActivityType> for ActivityFilter {
    fn from(t: ActivityType) -> Self {
        ActivityFilter::Only(t)
    }
}

impl fmt::Display for ActivityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ActivityFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if normalize_label(s) == "all" {
            return Ok(ActivityFilter::All);
        }
        s.parse::<ActivityType>()
            .map(ActivityFilter::Only)
            .map_err(|_| ParseError::new("filter", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(activity_type: ActivityType) -> ActivityRecord {
        ActivityRecord::new_not_started(
            ActivityId::new("t"),
            "Test",
            activity_type,
            Date::from_ymd_opt(2025, 10, 18).unwrap(),
        )
    }

    #[test]
    fn test_parse_labels_loosely() {
        assert_eq!("Online Class".parse::<ActivityType>(), Ok(ActivityType::OnlineClass));
        assert_eq!("online-class".parse::<ActivityType>(), Ok(ActivityType::OnlineClass));
        assert_eq!("QUIZ".parse::<ActivityType>(), Ok(ActivityType::Quiz));
        assert_eq!("in_progress".parse::<ActivityStatus>(), Ok(ActivityStatus::InProgress));
        assert_eq!("review".parse::<NextAction>(), Ok(NextAction::Review));
        assert!("lecture hall".parse::<ActivityType>().is_err());
    }

    #[test]
    fn test_filter_parse_and_match() {
        assert_eq!("all".parse::<ActivityFilter>(), Ok(ActivityFilter::All));
        assert_eq!(
            "discussion".parse::<ActivityFilter>(),
            Ok(ActivityFilter::Only(ActivityType::Discussion))
        );

        let err = "everything".parse::<ActivityFilter>().unwrap_err();
        assert_eq!(err.kind, "filter");

        let quiz = record(ActivityType::Quiz);
        assert!(ActivityFilter::All.matches(&quiz));
        assert!(ActivityFilter::Only(ActivityType::Quiz).matches(&quiz));
        assert!(!ActivityFilter::Only(ActivityType::Assignment).matches(&quiz));
    }

    #[test]
    fn test_filter_options_cover_every_type() {
        assert_eq!(ActivityFilter::ALL_OPTIONS[0], ActivityFilter::All);
        for t in ActivityType::ALL {
            assert!(ActivityFilter::ALL_OPTIONS.contains(&ActivityFilter::Only(t)));
        }
    }

    #[test]
    fn test_record_json_uses_display_labels() {
        let json = serde_json::to_value(record(ActivityType::OnlineClass)).unwrap();
        assert_eq!(json["type"], "Online Class");
        assert_eq!(json["status"], "Not Started");
        assert_eq!(json["nextAction"], "Start");
        assert_eq!(json["date"], "2025-10-18");
    }

    #[test]
    fn test_record_json_reads_display_labels() {
        let json = r#"{
            "id": "7",
            "type": "Online Class",
            "title": "Data Structures Lecture",
            "status": "In Progress",
            "date": "2025-11-03",
            "nextAction": "Continue"
        }"#;

        let parsed: ActivityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, ActivityId::new("7"));
        assert_eq!(parsed.activity_type, ActivityType::OnlineClass);
        assert_eq!(parsed.status, ActivityStatus::InProgress);
        assert_eq!(parsed.next_action, NextAction::Continue);
        assert_eq!(parsed.date, Date::from_ymd_opt(2025, 11, 3).unwrap());

        let not_started: ActivityStatus = serde_json::from_str("\"Not Started\"").unwrap();
        assert_eq!(not_started, ActivityStatus::NotStarted);

        // Variant names are not accepted on the wire, only labels.
        assert!(serde_json::from_str::<ActivityType>("\"OnlineClass\"").is_err());
    }
}
