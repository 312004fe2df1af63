//! Screen reader announcement support.
//!
//! Announcements are ephemeral messages pushed to assistive technology. They
//! are not tied to any visible text. Polite announcements wait for current
//! speech to finish, urgent ones interrupt it.

use std::collections::VecDeque;

use super::surface::Element;

/// Trait for providing screen reader support.
pub trait ScreenReaderSupport {
    /// Announce a message on behalf of an element.
    fn announce(&mut self, source: Element, message: &str);

    /// Announce an urgent message (interrupts current speech).
    fn announce_urgent(&mut self, message: &str);

    /// Check if screen reader support is enabled.
    fn is_enabled(&self) -> bool;

    /// Enable or disable screen reader support.
    fn set_enabled(&mut self, enabled: bool);
}

/// A message handed to the screen reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    /// Element that requested the announcement, if any
    pub source: Option<Element>,
    /// Text to speak
    pub message: String,
    /// Whether this interrupts current speech
    pub urgent: bool,
}

/// Queue of pending announcements.
///
/// Disabled queues drop messages, the same way a device without a running
/// screen reader ignores announcement requests.
#[derive(Debug, Clone)]
pub struct AnnouncementQueue {
    /// Whether announcements are accepted
    enabled: bool,
    /// Pending polite announcements
    polite: VecDeque<Announcement>,
    /// Pending urgent announcements
    urgent: VecDeque<Announcement>,
}

impl Default for AnnouncementQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnouncementQueue {
    /// Create a new, enabled queue.
    pub fn new() -> Self {
        Self {
            enabled: true,
            polite: VecDeque::new(),
            urgent: VecDeque::new(),
        }
    }

    /// Create a queue that drops every announcement.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new()
        }
    }

    /// Get the next announcement, urgent ones first.
    pub fn pop(&mut self) -> Option<Announcement> {
        self.urgent.pop_front().or_else(|| self.polite.pop_front())
    }

    /// Drain every pending announcement, urgent ones first.
    pub fn drain(&mut self) -> Vec<Announcement> {
        let mut all: Vec<_> = self.urgent.drain(..).collect();
        all.extend(self.polite.drain(..));
        all
    }

    /// Check if there are pending announcements.
    pub fn has_pending(&self) -> bool {
        !self.polite.is_empty() || !self.urgent.is_empty()
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        !self.has_pending()
    }
}

impl ScreenReaderSupport for AnnouncementQueue {
    fn announce(&mut self, source: Element, message: &str) {
        if self.enabled {
            self.polite.push_back(Announcement {
                source: Some(source),
                message: message.to_string(),
                urgent: false,
            });
            tracing::debug!("Screen reader announce ({}): {}", source, message);
        }
    }

    fn announce_urgent(&mut self, message: &str) {
        if self.enabled {
            self.urgent.push_back(Announcement {
                source: None,
                message: message.to_string(),
                urgent: true,
            });
            tracing::debug!("Screen reader urgent: {}", message);
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if enabled {
            tracing::info!("Screen reader support enabled");
        }
    }
}
