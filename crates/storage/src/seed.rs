//! Built-in records the store starts with.

use learntrack_core::{ActivityId, ActivityRecord, ActivityStatus, ActivityType, Date, NextAction};

fn seed(
    id: &str,
    activity_type: ActivityType,
    title: &str,
    status: ActivityStatus,
    (y, m, d): (i32, u32, u32),
    next_action: NextAction,
) -> ActivityRecord {
    ActivityRecord {
        id: ActivityId::new(id),
        activity_type,
        title: title.to_string(),
        status,
        // Constant, valid dates
        date: Date::from_ymd_opt(y, m, d).unwrap_or_default(),
        next_action,
    }
}

/// The four starter activities, one per type, covering every status.
pub fn seed_activities() -> Vec<ActivityRecord> {
    vec![
        seed(
            "1",
            ActivityType::OnlineClass,
            "Introduction to AI",
            ActivityStatus::NotStarted,
            (2025, 10, 18),
            NextAction::Start,
        ),
        seed(
            "2",
            ActivityType::Assignment,
            "ML Basics Assignment",
            ActivityStatus::InProgress,
            (2025, 10, 20),
            NextAction::Continue,
        ),
        seed(
            "3",
            ActivityType::Quiz,
            "Cloud Computing Quiz",
            ActivityStatus::Completed,
            (2025, 10, 22),
            NextAction::Review,
        ),
        seed(
            "4",
            ActivityType::Discussion,
            "AI Ethics Discussion",
            ActivityStatus::NotStarted,
            (2025, 10, 25),
            NextAction::Start,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_spans_every_type_and_status() {
        let records = seed_activities();
        assert_eq!(records.len(), 4);

        let types: HashSet<_> = records.iter().map(|r| r.activity_type).collect();
        assert_eq!(types.len(), ActivityType::ALL.len());

        let statuses: HashSet<_> = records.iter().map(|r| r.status).collect();
        assert!(statuses.contains(&ActivityStatus::NotStarted));
        assert!(statuses.contains(&ActivityStatus::InProgress));
        assert!(statuses.contains(&ActivityStatus::Completed));

        let ids: HashSet<_> = records.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn test_seed_dates_parse() {
        let records = seed_activities();
        assert_eq!(records[0].date.to_string(), "2025-10-18");
        assert_eq!(records[3].date.to_string(), "2025-10-25");
    }
}
