//! recipe-a11y - Accessibility patterns demo
//!
//! Three self-contained screens showing accessible interaction patterns: a
//! quantity stepper with announced state, a recipe card with fast/slow
//! screen reader navigation modes and dynamic custom actions, and a text
//! field with visual and semantic validation states. Screens talk to the UI
//! toolkit only through the [`accessibility::ViewSurface`] trait.

pub mod accessibility;
pub mod i18n;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use accessibility::{ActionKind, ActionRegistry, Element, RecordingSurface, ViewSurface};
pub use storage::config::AppConfig;
pub use ui::screens::{
    NavigationMode, PseudonymFieldController, QuantityStepperController, RecipeCardController,
};
