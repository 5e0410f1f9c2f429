//! Plain-text rendering of records for the terminal.

use learntrack_core::{format_display_date, ActivityFilter, ActivityRecord};

/// Header line: title plus the count under the active filter.
pub fn header(filter: ActivityFilter, count: usize) -> String {
    match filter {
        ActivityFilter::All => format!("My Learning ({} activities)", count),
        other => format!("My Learning ({} activities, filter: {})", count, other),
    }
}

/// One list row.
pub fn row(record: &ActivityRecord) -> String {
    format!(
        "  {:<26} | {:<28} | {:<12} | {:<11} | {:<12} | {}",
        record.id,
        record.title,
        record.activity_type,
        record.status,
        format_display_date(record.date),
        record.next_action,
    )
}

/// Header plus one row per record.
pub fn listing(filter: ActivityFilter, records: &[&ActivityRecord]) -> String {
    let mut out = header(filter, records.len());
    out.push('\n');
    for record in records {
        out.push_str(&row(record));
        out.push('\n');
    }
    out
}

/// Multi-line details view.
pub fn details(record: &ActivityRecord) -> String {
    format!(
        "{}\n  Type:   {}\n  Status: {}\n  Date:   {}\n  Action: {}\n",
        record.title,
        record.activity_type,
        record.status,
        format_display_date(record.date),
        record.next_action,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use learntrack_core::ActivityType;
    use learntrack_storage::seed_activities;

    #[test]
    fn test_listing_counts_rows() {
        let records = seed_activities();
        let refs: Vec<&ActivityRecord> = records.iter().collect();
        let text = listing(ActivityFilter::All, &refs);
        assert!(text.starts_with("My Learning (4 activities)"));
        assert_eq!(text.lines().count(), 5);
        assert!(text.contains("Oct 18, 2025"));
    }

    #[test]
    fn test_header_names_filter() {
        let text = header(ActivityFilter::Only(ActivityType::Quiz), 1);
        assert_eq!(text, "My Learning (1 activities, filter: Quiz)");
    }

    #[test]
    fn test_details() {
        let records = seed_activities();
        let text = details(&records[2]);
        assert!(text.starts_with("Cloud Computing Quiz\n"));
        assert!(text.contains("Status: Completed"));
        assert!(text.contains("Action: Review"));
    }
}
