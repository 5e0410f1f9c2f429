//! In-memory store implementation.
//!
//! Records live in a deque with the newest at the front. Nothing is
//! written anywhere; a new process starts again from the seed list.

use std::collections::VecDeque;

use learntrack_core::{
    today, ActivityFilter, ActivityId, ActivityRecord, ActivityType, Date, IdGenerator,
};
use tracing::{debug, info};

use super::{seed_activities, ActivityStore, Result, ValidationError};

/// In-memory activity store.
#[derive(Debug)]
pub struct MemoryStore {
    records: VecDeque<ActivityRecord>,
    ids: IdGenerator,
}

impl MemoryStore {
    /// Create a store holding the built-in seed records.
    pub fn new() -> Self {
        Self::with_records(seed_activities())
    }

    /// Create an empty store.
    pub fn empty() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a store holding `records` in the given order.
    pub fn with_records(records: Vec<ActivityRecord>) -> Self {
        Self {
            records: records.into(),
            ids: IdGenerator::new(),
        }
    }

    /// Create a record dated `date` instead of today.
    pub fn create_on(
        &mut self,
        title: &str,
        activity_type: ActivityType,
        date: Date,
    ) -> Result<ActivityRecord> {
        // Validated on the trimmed form, stored as typed.
        if title.trim().is_empty() {
            debug!("Rejected create: empty title");
            return Err(ValidationError::EmptyTitle.into());
        }

        let id = self.fresh_id();
        let record = ActivityRecord::new_not_started(id, title, activity_type, date);
        self.records.push_front(record.clone());

        info!("Created activity {} ({}) - {}", record.id, record.activity_type, record.title);
        Ok(record)
    }

    /// Draw ids until one is unused.
    fn fresh_id(&mut self) -> ActivityId {
        loop {
            let id = self.ids.next_id();
            if !self.records.iter().any(|r| r.id == id) {
                return id;
            }
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityStore for MemoryStore {
    fn list(&self, filter: ActivityFilter) -> Vec<&ActivityRecord> {
        self.records.iter().filter(|r| filter.matches(r)).collect()
    }

    fn get(&self, id: &ActivityId) -> Option<&ActivityRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    fn create(&mut self, title: &str, activity_type: ActivityType) -> Result<ActivityRecord> {
        self.create_on(title, activity_type, today())
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
