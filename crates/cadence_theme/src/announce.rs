//! Screen-reader announcements
//!
//! Announcements are handed to a [`LiveRegion`] sink that the assistive
//! technology bridge drains; they are never rendered as visible UI. The
//! announcer itself is fire-and-forget and synchronous, so a mode flip and
//! its announcement cannot be observed out of order.

use crate::theme::ColorScheme;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Live-region politeness level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priority {
    /// Queued behind whatever the screen reader is currently saying.
    Polite,
    /// Interrupts current speech. Reserved for errors.
    Assertive,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Polite => "polite",
            Self::Assertive => "assertive",
        }
    }
}

/// One message bound for assistive technology.
#[derive(Clone, Debug, PartialEq)]
pub struct Announcement {
    pub message: String,
    pub priority: Priority,
}

/// Sink the AT bridge implements.
pub trait LiveRegion: Send + Sync {
    fn announce(&self, announcement: Announcement);
}

/// Bounded queue sink. The platform bridge drains it on its own cadence;
/// when nothing drains (headless runs), old entries are dropped rather than
/// growing without bound.
pub struct QueueLiveRegion {
    queue: Mutex<VecDeque<Announcement>>,
    capacity: usize,
}

impl QueueLiveRegion {
    /// Capacity is clamped to at least one entry.
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            capacity: capacity.max(1),
        }
    }

    /// Take all pending announcements, oldest first.
    pub fn drain(&self) -> Vec<Announcement> {
        self.queue.lock().unwrap().drain(..).collect()
    }
}

impl Default for QueueLiveRegion {
    fn default() -> Self {
        Self::new(16)
    }
}

impl LiveRegion for QueueLiveRegion {
    fn announce(&self, announcement: Announcement) {
        let mut queue = self.queue.lock().unwrap();
        while queue.len() >= self.capacity {
            queue.pop_front();
        }
        queue.push_back(announcement);
    }
}

/// Emits screen-reader announcements for theme events.
pub struct AccessibilityAnnouncer {
    region: Arc<dyn LiveRegion>,
}

impl AccessibilityAnnouncer {
    pub fn new(region: Arc<dyn LiveRegion>) -> Self {
        Self { region }
    }

    pub fn announce(&self, message: impl Into<String>, priority: Priority) {
        let message = message.into();
        tracing::trace!(%message, priority = priority.as_str(), "announce");
        self.region.announce(Announcement { message, priority });
    }

    /// The per-toggle announcement naming the destination mode.
    pub fn announce_scheme(&self, scheme: ColorScheme) {
        let message = match scheme {
            ColorScheme::Light => "Switched to light mode",
            ColorScheme::Dark => "Switched to dark mode",
        };
        self.announce(message, Priority::Polite);
    }
}
