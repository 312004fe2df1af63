//! Quantity stepper screen.
//!
//! The value is rendered as plain text and announced on every change so a
//! screen reader user hears the result of pressing "+" or "-".

use crate::accessibility::{Element, ViewSurface};
use crate::i18n::TranslationService;

/// Errors from stepper operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    #[error("Quantity cannot go below zero")]
    BelowZero,
}

/// Controller for the "+" / "-" quantity stepper.
pub struct QuantityStepperController<S: ViewSurface> {
    surface: S,
    translations: TranslationService,
    quantity: u32,
}

impl<S: ViewSurface> QuantityStepperController<S> {
    /// Create a stepper at zero.
    pub fn new(surface: S, translations: TranslationService) -> Self {
        Self {
            surface,
            translations,
            quantity: 0,
        }
    }

    /// Render the initial value and label the buttons' click actions.
    pub fn initialize(&mut self) {
        let increment = self.translations.translate("click-increment");
        self.surface
            .replace_activation_action(Element::IncrementButton, &increment);
        let decrement = self.translations.translate("click-decrement");
        self.surface
            .replace_activation_action(Element::DecrementButton, &decrement);
        self.render();
    }

    /// Add one item.
    pub fn increment(&mut self) -> u32 {
        self.quantity = self.quantity.saturating_add(1);
        self.render();
        self.quantity
    }

    /// Remove one item, refusing to go below zero.
    ///
    /// A refusal shows a transient notice and leaves the value unchanged.
    pub fn decrement(&mut self) -> Result<u32, QuantityError> {
        if self.quantity == 0 {
            let notice = self.translations.translate("quantity-negative");
            self.surface.show_notice(&notice);
            tracing::warn!("Refused decrement at zero");
            return Err(QuantityError::BelowZero);
        }

        self.quantity -= 1;
        self.render();
        Ok(self.quantity)
    }

    /// Handle a click on one of the stepper buttons.
    pub fn activate(&mut self, element: Element) -> bool {
        match element {
            Element::IncrementButton => {
                self.increment();
            }
            // The refusal is already surfaced as a notice
            Element::DecrementButton => {
                let _ = self.decrement();
            }
            _ => return false,
        }
        true
    }

    fn render(&mut self) {
        let value = self.quantity.to_string();
        self.surface.set_text(Element::QuantityText, &value);

        let message = self
            .translations
            .translate_with_args("quantity-announce", &[("quantity", value.as_str())]);
        self.surface.announce(Element::QuantityText, &message);
    }

    /// Current quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Get the view surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Get the view surface mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
