//! Unit tests for the recipe card navigation modes and favorite state.

use recipe_a11y::accessibility::{
    ActionKind, ActionRegistry, Element, Icon, RecordingSurface, ViewSurface,
};
use recipe_a11y::i18n::TranslationService;
use recipe_a11y::ui::screens::recipe_card::CARD_ELEMENTS;
use recipe_a11y::ui::screens::{NavigationMode, RecipeCardController};

const FAST_SET: [ActionKind; 4] = [
    ActionKind::SlowMode,
    ActionKind::AddToBasket,
    ActionKind::FavoriteAdd,
    ActionKind::FavoriteRemove,
];

fn initialized_card() -> RecipeCardController<RecordingSurface> {
    let mut card = RecipeCardController::new(RecordingSurface::new(), TranslationService::new());
    card.initialize();
    card
}

/// Registry and surface must agree on the live actions.
fn assert_card_actions(card: &RecipeCardController<RecordingSurface>, expected: &[ActionKind]) {
    assert_eq!(card.registry().kinds(), expected);
    assert_eq!(card.surface().action_kinds(Element::RecipeCard), expected);

    for action in card.surface().actions(Element::RecipeCard) {
        assert_eq!(card.registry().handle(action.kind), Some(action.handle));
    }
}

#[test]
fn test_initialize() {
    let card = initialized_card();

    assert_eq!(card.mode(), NavigationMode::Fast);
    assert!(!card.is_favorite());
    assert_card_actions(&card, &FAST_SET);
}

#[test]
fn test_initialize_hides_children() {
    let card = initialized_card();
    let surface = card.surface();

    assert!(surface.is_important(Element::RecipeCard));
    assert!(!surface.is_important(Element::FavoriteButton));
    assert!(!surface.is_important(Element::AddToBasketButton));
    assert!(!surface.is_important(Element::RecipeTitle));
}

#[test]
fn test_initialize_describes_card() {
    let card = initialized_card();
    let state = card.surface().element(Element::RecipeCard).unwrap();
    assert_eq!(
        state.content_description.as_deref(),
        Some("Recipe card Chocolate chip cookies")
    );
}

#[test]
fn test_action_labels() {
    let card = initialized_card();
    let labels: Vec<_> = card
        .surface()
        .actions(Element::RecipeCard)
        .iter()
        .map(|a| a.label.as_str())
        .collect();

    assert_eq!(
        labels,
        vec![
            "Add recipe to basket",
            "Add to favorites",
            "Remove from favorites",
            "Switch to detailed navigation",
        ]
    );
}

#[test]
fn test_slow_then_fast_scenario() {
    let mut card = initialized_card();

    card.enter_slow_mode();
    assert_eq!(card.mode(), NavigationMode::Slow);
    assert_card_actions(&card, &[ActionKind::FastMode]);
    for element in CARD_ELEMENTS {
        assert!(card.surface().is_important(element), "{} hidden", element);
    }

    card.enter_fast_mode();
    assert_eq!(card.mode(), NavigationMode::Fast);
    assert_card_actions(&card, &FAST_SET);
    for element in CARD_ELEMENTS {
        assert_eq!(
            card.surface().is_important(element),
            element == Element::RecipeCard
        );
    }
}

#[test]
fn test_fast_mode_twice_is_idempotent() {
    let mut once = initialized_card();
    once.enter_slow_mode();
    once.enter_fast_mode();

    let mut twice = initialized_card();
    twice.enter_slow_mode();
    twice.enter_fast_mode();
    twice.enter_fast_mode();

    assert_eq!(once.registry().kinds(), twice.registry().kinds());
    assert_eq!(twice.surface().actions(Element::RecipeCard).len(), 4);
    assert_card_actions(&twice, &FAST_SET);
}

#[test]
fn test_slow_mode_twice_is_idempotent() {
    let mut card = initialized_card();
    card.enter_slow_mode();
    card.enter_slow_mode();

    assert_card_actions(&card, &[ActionKind::FastMode]);
}

#[test]
fn test_transition_sequences_settle() {
    let sequences: [&[NavigationMode]; 4] = [
        &[NavigationMode::Slow, NavigationMode::Slow, NavigationMode::Fast],
        &[NavigationMode::Fast, NavigationMode::Slow],
        &[
            NavigationMode::Slow,
            NavigationMode::Fast,
            NavigationMode::Fast,
            NavigationMode::Slow,
            NavigationMode::Fast,
        ],
        &[],
    ];

    for sequence in sequences {
        let mut card = initialized_card();
        for mode in sequence {
            match mode {
                NavigationMode::Fast => card.enter_fast_mode(),
                NavigationMode::Slow => card.enter_slow_mode(),
            }
        }

        let expected: Vec<_> = match card.mode() {
            NavigationMode::Fast => FAST_SET.to_vec(),
            NavigationMode::Slow => vec![ActionKind::FastMode],
        };
        assert_card_actions(&card, &expected);
        assert_eq!(
            card.mode(),
            sequence.last().copied().unwrap_or(NavigationMode::Fast)
        );
    }
}

#[test]
fn test_toggle_favorite_twice_restores() {
    let mut card = initialized_card();
    let label = card
        .surface()
        .activation_label(Element::FavoriteButton)
        .map(str::to_string);
    let icon = card.surface().icon(Element::FavoriteButton);

    card.toggle_favorite();
    assert!(card.is_favorite());
    assert_eq!(card.surface().icon(Element::FavoriteButton), Some(Icon::FavoriteOn));
    assert_eq!(
        card.surface().activation_label(Element::FavoriteButton),
        Some("remove from favorites")
    );

    card.toggle_favorite();
    assert!(!card.is_favorite());
    assert_eq!(
        card.surface().activation_label(Element::FavoriteButton).map(str::to_string),
        label
    );
    assert_eq!(card.surface().icon(Element::FavoriteButton), icon);
}

#[test]
fn test_favorite_announcements() {
    let mut card = initialized_card();
    card.surface_mut().take_announcements();

    card.toggle_favorite();
    card.toggle_favorite();

    let messages: Vec<_> = card
        .surface_mut()
        .take_announcements()
        .into_iter()
        .map(|a| a.message)
        .collect();
    assert_eq!(
        messages,
        vec!["Recipe added to favorites", "Recipe removed from favorites"]
    );
}

#[test]
fn test_favorite_does_not_touch_mode() {
    let mut card = initialized_card();
    card.enter_slow_mode();
    card.set_favorite(true);

    assert_eq!(card.mode(), NavigationMode::Slow);
    assert_card_actions(&card, &[ActionKind::FastMode]);
}

#[test]
fn test_action_dispatch() {
    let mut card = initialized_card();

    assert!(card.perform_action(ActionKind::FavoriteAdd));
    assert!(card.is_favorite());
    // Forcing, not toggling
    assert!(card.perform_action(ActionKind::FavoriteAdd));
    assert!(card.is_favorite());
    assert!(card.perform_action(ActionKind::FavoriteRemove));
    assert!(!card.is_favorite());

    assert!(card.perform_action(ActionKind::SlowMode));
    assert_eq!(card.mode(), NavigationMode::Slow);
    assert!(card.perform_action(ActionKind::FastMode));
    assert_eq!(card.mode(), NavigationMode::Fast);
}

#[test]
fn test_add_to_basket_delegates_to_button() {
    let mut card = initialized_card();
    card.surface_mut().take_notices();

    assert!(card.perform_action(ActionKind::AddToBasket));
    // Nothing happens until the host delivers the click
    assert!(card.surface_mut().take_notices().is_empty());

    let pending = card.surface_mut().take_activations();
    assert_eq!(pending, vec![Element::AddToBasketButton]);
    for element in pending {
        assert!(card.activate(element));
    }
    assert_eq!(card.surface_mut().take_notices(), vec!["Recipe added to basket"]);
}

#[test]
fn test_favorite_click_toggles() {
    let mut card = initialized_card();
    assert!(card.activate(Element::FavoriteButton));
    assert!(card.is_favorite());
    assert!(card.activate(Element::FavoriteButton));
    assert!(!card.is_favorite());
}

#[test]
fn test_card_click_shows_summary() {
    let mut card = initialized_card();
    assert!(card.activate(Element::RecipeCard));
    let notices = card.surface_mut().take_notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].contains("15 minutes"));
}

#[test]
fn test_deregister_absent_kind() {
    let mut card = initialized_card();
    let mut registry = card.registry().clone();
    let before = registry.kinds();

    assert!(!registry.deregister(card.surface_mut(), Element::RecipeCard, ActionKind::FastMode));

    assert_eq!(registry.kinds(), before);
    assert_eq!(card.surface().actions(Element::RecipeCard).len(), 4);
}

/// Surface that counts calls, to check the registry never leaks handles.
#[derive(Default)]
struct CountingSurface {
    inner: RecordingSurface,
    added: usize,
    removed: usize,
}

impl ViewSurface for CountingSurface {
    fn set_important_for_accessibility(&mut self, element: Element, important: bool) {
        self.inner.set_important_for_accessibility(element, important);
    }

    fn add_action(
        &mut self,
        element: Element,
        label: &str,
        kind: ActionKind,
    ) -> recipe_a11y::accessibility::ActionHandle {
        self.added += 1;
        self.inner.add_action(element, label, kind)
    }

    fn remove_action(&mut self, element: Element, handle: recipe_a11y::accessibility::ActionHandle) {
        self.removed += 1;
        self.inner.remove_action(element, handle);
    }

    fn replace_activation_action(&mut self, element: Element, label: &str) {
        self.inner.replace_activation_action(element, label);
    }

    fn announce(&mut self, element: Element, message: &str) {
        self.inner.announce(element, message);
    }

    fn trigger_activation(&mut self, element: Element) {
        self.inner.trigger_activation(element);
    }

    fn set_icon(&mut self, element: Element, icon: Option<Icon>) {
        self.inner.set_icon(element, icon);
    }

    fn set_text(&mut self, element: Element, text: &str) {
        self.inner.set_text(element, text);
    }

    fn set_content_description(&mut self, element: Element, description: Option<&str>) {
        self.inner.set_content_description(element, description);
    }

    fn set_enabled(&mut self, element: Element, enabled: bool) {
        self.inner.set_enabled(element, enabled);
    }

    fn set_error(&mut self, element: Element, error: Option<&str>) {
        self.inner.set_error(element, error);
    }

    fn set_field_tone(&mut self, element: Element, tone: recipe_a11y::accessibility::FieldTone) {
        self.inner.set_field_tone(element, tone);
    }

    fn show_notice(&mut self, message: &str) {
        self.inner.show_notice(message);
    }
}

#[test]
fn test_no_leaked_handles() {
    let mut card = RecipeCardController::new(CountingSurface::default(), TranslationService::new());
    card.initialize();
    assert_eq!(card.surface().added, 4);
    // FastMode was never registered, so nothing is removed
    assert_eq!(card.surface().removed, 0);

    card.enter_fast_mode();
    assert_eq!(card.surface().added, 4);

    card.enter_slow_mode();
    card.enter_fast_mode();
    let surface = card.surface();
    assert_eq!(surface.added - surface.removed, 4);
    assert_eq!(surface.inner.actions(Element::RecipeCard).len(), 4);
}

#[test]
fn test_empty_registry() {
    let registry = ActionRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert_eq!(registry.handle(ActionKind::SlowMode), None);
}
