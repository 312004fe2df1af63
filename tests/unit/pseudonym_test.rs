//! Unit tests for the pseudonym field validation states.

use recipe_a11y::accessibility::{Element, FieldTone, Icon, RecordingSurface};
use recipe_a11y::i18n::TranslationService;
use recipe_a11y::ui::screens::{FieldValidity, PseudonymFieldController};

fn form() -> PseudonymFieldController<RecordingSurface> {
    let mut form = PseudonymFieldController::new(RecordingSurface::new(), TranslationService::new());
    form.initialize();
    form
}

#[test]
fn test_validate_disabled_initially() {
    let form = form();
    assert!(!form.surface().is_enabled(Element::ValidateButton));
    assert_eq!(form.validity(), None);
    assert_eq!(form.min_length(), 3);
}

#[test]
fn test_short_text_shows_error() {
    let mut form = form();

    assert_eq!(form.on_text_changed("ab"), FieldValidity::TooShort);

    let field = form.surface().element(Element::PseudonymField).unwrap();
    assert_eq!(
        field.error.as_deref(),
        Some("Your pseudonym must contain at least 3 characters")
    );
    assert_eq!(field.tone, FieldTone::Error);
    assert!(!form.surface().is_enabled(Element::ValidateButton));
}

#[test]
fn test_valid_text_clears_error() {
    let mut form = form();
    form.on_text_changed("a");

    assert_eq!(form.on_text_changed("abc"), FieldValidity::Valid);

    let field = form.surface().element(Element::PseudonymField).unwrap();
    assert_eq!(field.error, None);
    assert_eq!(field.tone, FieldTone::Success);
    assert_eq!(field.icon, Some(Icon::CheckCircle));
    assert!(form.surface().is_enabled(Element::ValidateButton));
}

#[test]
fn test_becoming_invalid_again_disables_button() {
    let mut form = form();
    form.on_text_changed("abcd");
    form.on_text_changed("ab");

    assert_eq!(form.validity(), Some(FieldValidity::TooShort));
    assert!(!form.surface().is_enabled(Element::ValidateButton));
}

#[test]
fn test_becoming_invalid_again_drops_success_marks() {
    let mut form = form();
    form.on_text_changed("abcd");
    assert_eq!(
        form.surface().content_description(Element::PseudonymField),
        Some("Pseudonym valid")
    );

    form.on_text_changed("ab");

    let surface = form.surface();
    assert_eq!(surface.content_description(Element::PseudonymField), None);
    assert_eq!(surface.icon(Element::PseudonymField), None);
    let field = surface.element(Element::PseudonymField).unwrap();
    assert_eq!(field.tone, FieldTone::Error);
    assert_eq!(
        field.error.as_deref(),
        Some("Your pseudonym must contain at least 3 characters")
    );
}

#[test]
fn test_custom_min_length() {
    let mut form =
        PseudonymFieldController::with_min_length(RecordingSurface::new(), TranslationService::new(), 5);
    form.initialize();

    assert_eq!(form.on_text_changed("abcd"), FieldValidity::TooShort);
    let field = form.surface().element(Element::PseudonymField).unwrap();
    assert!(field.error.as_deref().unwrap().contains('5'));
    assert_eq!(form.on_text_changed("abcde"), FieldValidity::Valid);
}
