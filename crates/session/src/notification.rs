//! Transient user-facing messages with a fixed visibility window.
//!
//! There is no background timer here. A notification carries the instant
//! it was posted; callers ask for it with the current instant and call
//! [`Notifier::tick`] from whatever event loop drives them.

use std::time::{Duration, Instant};

use tracing::debug;

/// A message and the instant it was posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Message text
    pub text: String,
    /// When it was posted
    pub posted_at: Instant,
}

/// Holds at most one notification; a newer post replaces the older one.
#[derive(Debug, Clone)]
pub struct Notifier {
    current: Option<Notification>,
    ttl: Duration,
}

impl Notifier {
    /// Create a notifier with the given visibility window.
    pub fn new(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    /// Visibility window.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Post `text` at `now`, replacing anything already showing.
    pub fn post(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        debug!("Notification: {}", text);
        self.current = Some(Notification { text, posted_at: now });
    }

    /// Text visible at `now`, if any.
    pub fn visible(&self, now: Instant) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|n| now < self.expires_at(n))
            .map(|n| n.text.as_str())
    }

    /// When the current notification disappears.
    pub fn deadline(&self) -> Option<Instant> {
        self.current.as_ref().map(|n| self.expires_at(n))
    }

    /// Drop the current notification if it has expired by `now`.
    ///
    /// Returns true if one was dropped.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.deadline() {
            Some(deadline) if now >= deadline => {
                self.current = None;
                debug!("Notification dismissed");
                true
            }
            _ => false,
        }
    }

    fn expires_at(&self, n: &Notification) -> Instant {
        n.posted_at + self.ttl
    }
}
