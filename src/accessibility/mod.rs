//! Accessibility module.
//!
//! This module provides the accessibility plumbing shared by every screen:
//! - Custom accessibility actions and their per-kind registry
//! - The view surface boundary implemented by the hosting UI toolkit
//! - Screen reader announcement queueing

pub mod actions;
pub mod screen_reader;
pub mod surface;

// Re-export primary types
pub use actions::{ActionKind, ActionRegistry};
pub use screen_reader::{Announcement, AnnouncementQueue, ScreenReaderSupport};
pub use surface::{
    ActionHandle, CustomAction, Element, ElementState, FieldTone, Icon, RecordingSurface,
    ViewSurface,
};
