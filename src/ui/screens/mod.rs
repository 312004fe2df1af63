//! UI screens for the application.

pub mod pseudonym;
pub mod quantity;
pub mod recipe_card;

pub use pseudonym::{validate_pseudonym, FieldValidity, PseudonymFieldController};
pub use quantity::{QuantityError, QuantityStepperController};
pub use recipe_card::{NavigationMode, RecipeCardController, RecipeContent};

/// Screen navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Quantity stepper screen
    Stepper,
    /// Recipe card screen
    #[default]
    RecipeCard,
    /// Pseudonym form screen
    Pseudonym,
}

impl Screen {
    /// Get all screens.
    pub fn all() -> &'static [Screen] {
        &[Screen::Stepper, Screen::RecipeCard, Screen::Pseudonym]
    }

    /// Short machine name, used by the console host.
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Stepper => "stepper",
            Screen::RecipeCard => "card",
            Screen::Pseudonym => "pseudonym",
        }
    }

    /// Translation key of the screen title.
    pub fn title_key(&self) -> &'static str {
        match self {
            Screen::Stepper => "screen-stepper",
            Screen::RecipeCard => "screen-card",
            Screen::Pseudonym => "screen-pseudonym",
        }
    }

    /// Parse from a short machine name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::all().iter().copied().find(|s| s.name() == name)
    }
}
