//! Store trait abstraction.

use learntrack_core::{ActivityFilter, ActivityId, ActivityRecord, ActivityType};

/// Error type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Input rejected before touching the store
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Item not found
    #[error("Not found: {0}")]
    NotFound(ActivityId),
}

/// Reasons a create request is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Title is empty or only whitespace
    #[error("Title is required")]
    EmptyTitle,
}

/// Ordered collection of activity records, most recent first.
///
/// The store is owned by the application and handed to whatever drives
/// the UI; all writes go through [`ActivityStore::create`].
pub trait ActivityStore {
    /// Records passing `filter`, head-first.
    fn list(&self, filter: ActivityFilter) -> Vec<&ActivityRecord>;

    /// Look up a record by id.
    fn get(&self, id: &ActivityId) -> Option<&ActivityRecord>;

    /// Create a record with a fresh id and insert it at the head.
    ///
    /// Fails with [`ValidationError::EmptyTitle`] when `title` is blank,
    /// leaving the store unchanged.
    fn create(&mut self, title: &str, activity_type: ActivityType) -> Result<ActivityRecord>;

    /// Number of records.
    fn len(&self) -> usize;

    /// Whether the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a record with this id exists.
    fn contains(&self, id: &ActivityId) -> bool {
        self.get(id).is_some()
    }

    /// Look up a record that must exist.
    fn require(&self, id: &ActivityId) -> Result<&ActivityRecord> {
        self.get(id).ok_or_else(|| StoreError::NotFound(id.clone()))
    }
}
