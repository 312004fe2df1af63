//! Integration test: configuration and localized labels flowing into screens.

use recipe_a11y::accessibility::{ActionKind, Element, RecordingSurface};
use recipe_a11y::i18n::{Language, TranslationService};
use recipe_a11y::storage::config::{load_config_from, save_config_to, AppConfig};
use recipe_a11y::ui::screens::{
    NavigationMode, PseudonymFieldController, QuantityStepperController, RecipeCardController,
    RecipeContent,
};

#[test]
fn test_french_card_labels() {
    let mut card = RecipeCardController::new(
        RecordingSurface::new(),
        TranslationService::for_language(Language::French),
    );
    card.initialize();

    let labels: Vec<_> = card
        .surface()
        .actions(Element::RecipeCard)
        .iter()
        .map(|a| a.label.clone())
        .collect();
    assert!(labels.contains(&"Passer en navigation détaillée".to_string()));
    assert_eq!(
        card.surface().activation_label(Element::RecipeCard),
        Some("consulter la recette")
    );
}

#[test]
fn test_french_stepper() {
    let mut stepper = QuantityStepperController::new(
        RecordingSurface::new(),
        TranslationService::for_language(Language::French),
    );
    stepper.initialize();
    stepper.surface_mut().take_announcements();

    stepper.increment();
    let announcement = stepper.surface_mut().pop_announcement().unwrap();
    assert_eq!(announcement.message, "Quantité : 1");
}

#[test]
fn test_config_drives_screens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = AppConfig::default();
    config.language = Some("fr".to_string());
    config.accessibility.initial_mode = NavigationMode::Slow;
    config.pseudonym.min_length = 4;
    config.recipe.title = Some("Tarte aux pommes".to_string());
    save_config_to(&path, &config).unwrap();

    let config = load_config_from(&path).unwrap();
    let translations = TranslationService::for_language(config.resolve_language());

    let defaults = RecipeContent::from_translations(&translations);
    let content = RecipeContent {
        title: config.recipe.title.clone().unwrap_or(defaults.title),
        summary: defaults.summary,
    };
    let mut card =
        RecipeCardController::with_content(RecordingSurface::new(), translations.clone(), content);
    card.initialize();
    if config.accessibility.initial_mode == NavigationMode::Slow {
        card.enter_slow_mode();
    }
    assert_eq!(card.surface().text(Element::RecipeTitle), "Tarte aux pommes");
    assert_eq!(card.registry().kinds(), vec![ActionKind::FastMode]);

    let mut form = PseudonymFieldController::with_min_length(
        RecordingSurface::new(),
        translations,
        config.pseudonym.min_length,
    );
    form.initialize();
    form.on_text_changed("abc");
    let field = form.surface().element(Element::PseudonymField).unwrap();
    assert_eq!(
        field.error.as_deref(),
        Some("Votre pseudonyme doit contenir au moins 4 caractères")
    );
}

#[test]
fn test_runtime_overrides() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("card.ftl"),
        "action-slow-mode = Read every detail\n",
    )
    .unwrap();

    let mut translations = TranslationService::new();
    assert_eq!(translations.load_overrides(Language::English, dir.path()).unwrap(), 1);

    let mut card = RecipeCardController::new(RecordingSurface::new(), translations);
    card.initialize();

    let slow = card
        .surface()
        .actions(Element::RecipeCard)
        .iter()
        .find(|a| a.kind == ActionKind::SlowMode)
        .map(|a| a.label.clone());
    assert_eq!(slow.as_deref(), Some("Read every detail"));
}
