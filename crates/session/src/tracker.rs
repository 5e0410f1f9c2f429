//! Top-level tracker: owns the store and the view state.
//!
//! Presentation code holds a `Tracker` and calls into it for every user
//! action. Store writes only happen through [`Tracker::submit_create`].

use std::time::Instant;

use learntrack_core::{ActivityFilter, ActivityId, ActivityRecord, ActivityType, ThemeMode};
use learntrack_storage::{ActivityStore, MemoryStore, Result, StoreError};
use tracing::{info, warn};

use crate::config::TrackerConfig;
use crate::view::ViewState;

/// Notification posted after a successful create.
pub const MSG_ACTIVITY_ADDED: &str = "Activity added";

/// A store plus the UI state around it.
#[derive(Debug)]
pub struct Tracker<S: ActivityStore = MemoryStore> {
    store: S,
    view: ViewState,
    config: TrackerConfig,
}

impl Tracker<MemoryStore> {
    /// Tracker over the seeded in-memory store.
    pub fn seeded() -> Self {
        Self::new(MemoryStore::new())
    }
}

impl Default for Tracker<MemoryStore> {
    fn default() -> Self {
        Self::seeded()
    }
}

impl<S: ActivityStore> Tracker<S> {
    /// Create a tracker over `store` with default configuration.
    pub fn new(store: S) -> Self {
        let config = TrackerConfig::default();
        Self {
            store,
            view: ViewState::new(&config),
            config,
        }
    }

    /// Set the configuration. Resets view state to the new defaults.
    pub fn with_config(mut self, config: TrackerConfig) -> Self {
        self.view = ViewState::new(&config);
        self.config = config;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Read access to the store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read access to the view state.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Records under the active filter, head-first.
    pub fn visible(&self) -> Vec<&ActivityRecord> {
        self.store.list(self.view.active_filter())
    }

    // === Filter ===

    /// Select a filter.
    pub fn select_filter(&mut self, filter: ActivityFilter) {
        self.view.select_filter(filter);
    }

    /// Reset the filter to `All`.
    pub fn clear_filter(&mut self) {
        self.view.clear_filter();
    }

    // === Create ===

    /// Open the create dialog.
    pub fn request_create(&mut self) {
        self.view.request_create();
    }

    /// Close the create dialog without creating anything.
    pub fn cancel_create(&mut self) {
        self.view.cancel_create();
    }

    /// Edit the draft title.
    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.view.set_draft_title(title);
    }

    /// Edit the draft type.
    pub fn set_draft_type(&mut self, activity_type: ActivityType) {
        self.view.set_draft_type(activity_type);
    }

    /// Create a record from the draft.
    ///
    /// On success the dialog closes and the draft title is cleared. On a
    /// validation failure the dialog stays open. Either way the outcome is
    /// posted as a notification.
    pub fn submit_create(&mut self) -> Result<ActivityRecord> {
        let draft = self.view.draft().clone();
        self.create(&draft.title, draft.activity_type)
    }

    /// Create a record directly, with the same dialog and notification
    /// effects as [`Tracker::submit_create`].
    pub fn create(&mut self, title: &str, activity_type: ActivityType) -> Result<ActivityRecord> {
        match self.store.create(title, activity_type) {
            Ok(record) => {
                self.view.finish_create();
                self.view.notify(MSG_ACTIVITY_ADDED);
                Ok(record)
            }
            Err(e) => {
                warn!("Create rejected: {}", e);
                if let StoreError::Validation(v) = &e {
                    self.view.notify(v.to_string());
                }
                Err(e)
            }
        }
    }

    // === Details ===

    /// Open details for `id`. Returns false if no such record exists.
    pub fn open_details(&mut self, id: &ActivityId) -> bool {
        self.view.open_details(&self.store, id)
    }

    /// Close the details dialog.
    pub fn close_details(&mut self) {
        self.view.close_details();
    }

    /// The selected record, if one is selected and still present.
    pub fn selected(&self) -> Option<&ActivityRecord> {
        self.view.selected_id().and_then(|id| self.store.get(id))
    }

    /// Run the primary action from the details dialog.
    ///
    /// Closes the dialog and reports the action. Returns the record acted
    /// on, or `None` when the dialog is not open.
    pub fn perform_selected_action(&mut self) -> Option<ActivityRecord> {
        if !self.view.is_details_open() {
            return None;
        }
        let record = self.selected()?.clone();
        self.view.close_details();
        info!("{} activity {}", record.next_action, record.id);
        self.view
            .notify(format!("{} activity: {}", record.next_action, record.title));
        Some(record)
    }

    // === Theme & notification ===

    /// Switch between light and dark.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.view.toggle_theme()
    }

    /// Post a notification now.
    pub fn notify(&mut self, text: impl Into<String>) {
        self.view.notify(text);
    }

    /// Expire the notification if its window has passed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.view.tick(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use learntrack_core::{ActivityStatus, NextAction};
    use learntrack_storage::ValidationError;

    fn ids(records: &[&ActivityRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn test_visible_follows_filter() {
        let mut tracker = Tracker::seeded();
        assert_eq!(ids(&tracker.visible()), vec!["1", "2", "3", "4"]);

        tracker.select_filter(ActivityFilter::Only(ActivityType::Quiz));
        assert_eq!(ids(&tracker.visible()), vec!["3"]);

        tracker.select_filter(ActivityFilter::All);
        assert_eq!(ids(&tracker.visible()), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_filter_round_trip_keeps_created_at_head() {
        let mut tracker = Tracker::seeded();
        tracker.request_create();
        tracker.set_draft_title("Final Exam");
        tracker.set_draft_type(ActivityType::Quiz);
        let created = tracker.submit_create().unwrap();

        tracker.select_filter(ActivityFilter::Only(ActivityType::Quiz));
        assert_eq!(ids(&tracker.visible()), vec![created.id.to_string(), "3".to_string()]);

        tracker.clear_filter();
        assert_eq!(
            ids(&tracker.visible()),
            vec![created.id.to_string(), "1".into(), "2".into(), "3".into(), "4".into()]
        );
    }

    #[test]
    fn test_submit_create_success_closes_dialog_and_notifies() {
        let mut tracker = Tracker::seeded();
        tracker.request_create();
        tracker.set_draft_title("Final Exam");
        tracker.set_draft_type(ActivityType::Quiz);

        let created = tracker.submit_create().unwrap();
        assert_eq!(created.status, ActivityStatus::NotStarted);
        assert_eq!(created.next_action, NextAction::Start);
        assert_eq!(tracker.visible()[0].id, created.id);

        assert!(!tracker.view().is_create_open());
        assert!(tracker.view().draft().title.is_empty());
        assert_eq!(tracker.view().draft().activity_type, ActivityType::Quiz);
        assert_eq!(tracker.view().notification(), Some(MSG_ACTIVITY_ADDED));
    }

    #[test]
    fn test_submit_create_blank_title_notifies_and_keeps_dialog() {
        let mut tracker = Tracker::seeded();
        tracker.request_create();
        tracker.set_draft_title("   ");

        let err = tracker.submit_create().unwrap_err();
        assert_eq!(err, StoreError::Validation(ValidationError::EmptyTitle));
        assert!(tracker.view().is_create_open());
        assert_eq!(tracker.store().len(), 4);
        assert_eq!(tracker.view().notification(), Some("Title is required"));
    }

    #[test]
    fn test_details_round_trip_leaves_store_alone() {
        let mut tracker = Tracker::seeded();
        let before: Vec<ActivityRecord> = tracker.visible().into_iter().cloned().collect();

        assert!(tracker.open_details(&ActivityId::new("3")));
        assert_eq!(tracker.selected().map(|r| r.title.as_str()), Some("Cloud Computing Quiz"));
        tracker.close_details();

        assert!(!tracker.view().is_details_open());
        let after: Vec<ActivityRecord> = tracker.visible().into_iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_open_details_unknown_id_is_noop() {
        let mut tracker = Tracker::seeded();
        assert!(!tracker.open_details(&ActivityId::new("nope")));
        assert!(!tracker.view().is_details_open());
        assert!(tracker.selected().is_none());
    }

    #[test]
    fn test_perform_selected_action() {
        let mut tracker = Tracker::seeded();
        assert!(tracker.perform_selected_action().is_none());

        tracker.open_details(&ActivityId::new("2"));
        let acted = tracker.perform_selected_action().unwrap();
        assert_eq!(acted.id, ActivityId::new("2"));
        assert!(!tracker.view().is_details_open());
        assert_eq!(
            tracker.view().notification(),
            Some("Continue activity: ML Basics Assignment")
        );

        // Dialog is closed now, so a second press does nothing.
        assert!(tracker.perform_selected_action().is_none());
    }

    #[test]
    fn test_two_quick_creates_have_distinct_ids() {
        let mut tracker = Tracker::seeded();
        let a = tracker.create("A", ActivityType::Assignment).unwrap();
        let b = tracker.create("B", ActivityType::Assignment).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(tracker.visible()[0].id, b.id);
        assert_eq!(tracker.visible()[1].id, a.id);
    }

    #[test]
    fn test_with_config() {
        let tracker = Tracker::seeded().with_config(TrackerConfig {
            initial_theme: ThemeMode::Dark,
            ..Default::default()
        });
        assert_eq!(tracker.view().theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_theme() {
        let mut tracker = Tracker::seeded();
        assert_eq!(tracker.toggle_theme(), ThemeMode::Dark);
        assert_eq!(tracker.toggle_theme(), ThemeMode::Light);
    }
}
