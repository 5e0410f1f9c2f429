//! Identifiers for activity records.

use serde::{Deserialize, Serialize};
use ulid::{Generator, Ulid};

/// Unique identifier for an ActivityRecord.
///
/// Seeded records carry short numeric ids; records created at runtime
/// carry a monotonic ULID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(String);

impl ActivityId {
    /// Wrap an existing id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ActivityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for ActivityId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ActivityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Time-derived id source.
///
/// Ids drawn within the same millisecond still differ: the generator bumps
/// the random component instead of re-rolling it.
pub struct IdGenerator {
    inner: Generator,
}

impl IdGenerator {
    /// Create a new generator.
    pub fn new() -> Self {
        Self {
            inner: Generator::new(),
        }
    }

    /// Draw the next id.
    pub fn next_id(&mut self) -> ActivityId {
        // Overflow of the random component inside one millisecond is
        // astronomically unlikely; fall back to a fresh ULID.
        let ulid = self.inner.generate().unwrap_or_else(|_| Ulid::new());
        ActivityId(ulid.to_string())
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdGenerator").finish_non_exhaustive()
    }
}
