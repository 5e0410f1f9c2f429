//! View state: active filter, dialog visibility, selection, theme.
//!
//! Each axis changes independently. Nothing here touches the store except
//! the existence check when opening details.

use std::time::Instant;

use learntrack_core::{ActivityFilter, ActivityId, ActivityType, ThemeMode};
use learntrack_storage::ActivityStore;
use tracing::{debug, info};

use crate::config::TrackerConfig;
use crate::notification::Notifier;

/// Contents of the create dialog's form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDraft {
    /// Title as typed so far
    pub title: String,
    /// Selected type
    pub activity_type: ActivityType,
}

impl CreateDraft {
    /// Empty draft with `activity_type` preselected.
    pub fn new(activity_type: ActivityType) -> Self {
        Self {
            title: String::new(),
            activity_type,
        }
    }
}

/// Ephemeral UI state, reset to defaults on every start.
#[derive(Debug, Clone)]
pub struct ViewState {
    active_filter: ActivityFilter,
    create_open: bool,
    details_open: bool,
    selected: Option<ActivityId>,
    draft: CreateDraft,
    theme: ThemeMode,
    notifier: Notifier,
}

impl ViewState {
    /// Fresh state for `config`.
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            active_filter: ActivityFilter::All,
            create_open: false,
            details_open: false,
            selected: None,
            draft: CreateDraft::new(config.default_create_type),
            theme: config.initial_theme,
            notifier: Notifier::new(config.notification_ttl),
        }
    }

    // === Filter ===

    /// Currently selected filter.
    pub fn active_filter(&self) -> ActivityFilter {
        self.active_filter
    }

    /// Select a filter.
    pub fn select_filter(&mut self, filter: ActivityFilter) {
        if self.active_filter != filter {
            debug!("Filter changed: {} -> {}", self.active_filter, filter);
        }
        self.active_filter = filter;
    }

    /// Reset the filter to `All`.
    pub fn clear_filter(&mut self) {
        self.select_filter(ActivityFilter::All);
    }

    // === Create dialog ===

    /// Whether the create dialog is showing.
    pub fn is_create_open(&self) -> bool {
        self.create_open
    }

    /// Show the create dialog.
    pub fn request_create(&mut self) {
        self.create_open = true;
        debug!("Create dialog opened");
    }

    /// Hide the create dialog. The draft is left as it was.
    pub fn cancel_create(&mut self) {
        self.create_open = false;
        debug!("Create dialog cancelled");
    }

    /// The form contents.
    pub fn draft(&self) -> &CreateDraft {
        &self.draft
    }

    /// Replace the draft title.
    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    /// Pick the draft type.
    pub fn set_draft_type(&mut self, activity_type: ActivityType) {
        self.draft.activity_type = activity_type;
    }

    /// Close the dialog after a successful create and clear the title.
    pub(crate) fn finish_create(&mut self) {
        self.create_open = false;
        self.draft.title.clear();
    }

    // === Details dialog ===

    /// Whether the details dialog is showing.
    pub fn is_details_open(&self) -> bool {
        self.details_open
    }

    /// Id of the selected record, if any.
    ///
    /// Stays set after the details dialog closes.
    pub fn selected_id(&self) -> Option<&ActivityId> {
        self.selected.as_ref()
    }

    /// Show details for `id`.
    ///
    /// Does nothing and returns false when `store` has no such record.
    pub fn open_details<S>(&mut self, store: &S, id: &ActivityId) -> bool
    where
        S: ActivityStore + ?Sized,
    {
        if !store.contains(id) {
            debug!("Ignored details request for unknown activity {}", id);
            return false;
        }
        self.selected = Some(id.clone());
        self.details_open = true;
        debug!("Details opened for {}", id);
        true
    }

    /// Hide the details dialog.
    pub fn close_details(&mut self) {
        self.details_open = false;
        debug!("Details closed");
    }

    // === Theme ===

    /// Current theme.
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Switch between light and dark.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        let next = self.theme.toggled();
        info!("Theme toggled from {} to {}", self.theme, next);
        self.theme = next;
        next
    }

    // === Notification ===

    /// Post a notification now.
    pub fn notify(&mut self, text: impl Into<String>) {
        self.notifier.post(text, Instant::now());
    }

    /// Notification text visible now.
    pub fn notification(&self) -> Option<&str> {
        self.notifier.visible(Instant::now())
    }

    /// The notification slot.
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Expire the notification if its window has passed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.notifier.tick(now)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(&TrackerConfig::default())
    }
}
