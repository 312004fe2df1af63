//! Pseudonym form with a validated text input.
//!
//! Validation errors are conveyed both visually (red tone) and semantically
//! (field error text, which screen readers read with the field). The submit
//! button stays disabled until the content is valid.

use crate::accessibility::{Element, FieldTone, Icon, ViewSurface};
use crate::i18n::TranslationService;

/// Default minimum pseudonym length in characters.
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Result of validating the field content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValidity {
    /// Content accepted
    Valid,
    /// Content too short
    TooShort,
}

impl FieldValidity {
    /// Check if the content was accepted.
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldValidity::Valid)
    }
}

/// Validate a pseudonym against a minimum length in characters.
pub fn validate_pseudonym(text: &str, min_length: usize) -> FieldValidity {
    if text.chars().count() >= min_length {
        FieldValidity::Valid
    } else {
        FieldValidity::TooShort
    }
}

/// Controller for the pseudonym field and its validate button.
pub struct PseudonymFieldController<S: ViewSurface> {
    surface: S,
    translations: TranslationService,
    min_length: usize,
    validity: Option<FieldValidity>,
}

impl<S: ViewSurface> PseudonymFieldController<S> {
    /// Create a controller with the default minimum length.
    pub fn new(surface: S, translations: TranslationService) -> Self {
        Self::with_min_length(surface, translations, DEFAULT_MIN_LENGTH)
    }

    /// Create a controller with a custom minimum length.
    pub fn with_min_length(surface: S, translations: TranslationService, min_length: usize) -> Self {
        Self {
            surface,
            translations,
            min_length,
            validity: None,
        }
    }

    /// Disable the validate button until something valid is typed.
    pub fn initialize(&mut self) {
        self.surface.set_enabled(Element::ValidateButton, false);
    }

    /// Re-validate after every edit of the field.
    pub fn on_text_changed(&mut self, text: &str) -> FieldValidity {
        let validity = validate_pseudonym(text, self.min_length);
        match validity {
            FieldValidity::Valid => self.show_success(),
            FieldValidity::TooShort => self.show_error(),
        }

        if self.validity != Some(validity) {
            tracing::debug!("Pseudonym field is now {:?}", validity);
        }
        self.validity = Some(validity);
        validity
    }

    fn show_error(&mut self) {
        let min = self.min_length.to_string();
        let message = self
            .translations
            .translate_with_args("pseudonym-error", &[("min", min.as_str())]);

        self.surface
            .set_error(Element::PseudonymField, Some(message.as_str()));
        self.surface
            .set_field_tone(Element::PseudonymField, FieldTone::Error);
        // Success marks must not outlive the valid content
        self.surface.set_icon(Element::PseudonymField, None);
        self.surface
            .set_content_description(Element::PseudonymField, None);
        self.surface.set_enabled(Element::ValidateButton, false);
    }

    fn show_success(&mut self) {
        self.surface.set_error(Element::PseudonymField, None);
        self.surface
            .set_field_tone(Element::PseudonymField, FieldTone::Success);
        self.surface
            .set_icon(Element::PseudonymField, Some(Icon::CheckCircle));
        let description = self.translations.translate("pseudonym-valid");
        self.surface
            .set_content_description(Element::PseudonymField, Some(description.as_str()));
        self.surface.set_enabled(Element::ValidateButton, true);
    }

    /// Validity after the last edit, `None` before any edit.
    pub fn validity(&self) -> Option<FieldValidity> {
        self.validity
    }

    /// Minimum accepted length in characters.
    pub fn min_length(&self) -> usize {
        self.min_length
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
