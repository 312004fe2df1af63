//! Recipe card screen with two accessibility navigation modes.
//!
//! In fast mode only the card is exposed to the screen reader. Swiping moves
//! to the next recipe, and the card carries custom actions for everything the
//! hidden children do. In slow mode every child is exposed for field-by-field
//! reading and the card only offers the action that returns to fast mode.
//!
//! The favorite flag is an independent two-state machine.

use serde::{Deserialize, Serialize};

use crate::accessibility::{ActionKind, ActionRegistry, Element, Icon, ViewSurface};
use crate::i18n::TranslationService;

/// Elements making up the card, in reading order.
pub const CARD_ELEMENTS: [Element; 4] = [
    Element::RecipeCard,
    Element::RecipeTitle,
    Element::FavoriteButton,
    Element::AddToBasketButton,
];

/// Accessibility navigation mode of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
    /// Card-level summary traversal
    #[default]
    Fast,
    /// Field-by-field detailed traversal
    Slow,
}

impl NavigationMode {
    /// Custom actions exposed on the card while in this mode.
    pub fn exposed_actions(&self) -> &'static [ActionKind] {
        match self {
            NavigationMode::Fast => &[
                ActionKind::AddToBasket,
                ActionKind::FavoriteAdd,
                ActionKind::FavoriteRemove,
                ActionKind::SlowMode,
            ],
            NavigationMode::Slow => &[ActionKind::FastMode],
        }
    }

    /// Whether a card element is exposed to the accessibility tree in this mode.
    pub fn exposes(&self, element: Element) -> bool {
        match self {
            NavigationMode::Fast => element == Element::RecipeCard,
            NavigationMode::Slow => CARD_ELEMENTS.contains(&element),
        }
    }

    fn announcement_key(&self) -> &'static str {
        match self {
            NavigationMode::Fast => "announce-fast-mode",
            NavigationMode::Slow => "announce-slow-mode",
        }
    }
}

impl std::fmt::Display for NavigationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NavigationMode::Fast => write!(f, "fast"),
            NavigationMode::Slow => write!(f, "slow"),
        }
    }
}

/// Text content of the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeContent {
    /// Recipe title
    pub title: String,
    /// Summary shown when the card is opened
    pub summary: String,
}

impl RecipeContent {
    /// Default content from the translation catalogue.
    pub fn from_translations(translations: &TranslationService) -> Self {
        Self {
            title: translations.translate("recipe-title"),
            summary: translations.translate("recipe-summary"),
        }
    }
}

/// Controller owning the card's navigation mode, favorite flag and custom
/// accessibility actions.
pub struct RecipeCardController<S: ViewSurface> {
    surface: S,
    translations: TranslationService,
    content: RecipeContent,
    mode: NavigationMode,
    is_favorite: bool,
    registry: ActionRegistry,
    initialized: bool,
}

impl<S: ViewSurface> RecipeCardController<S> {
    /// Create a controller with content from the translation catalogue.
    pub fn new(surface: S, translations: TranslationService) -> Self {
        let content = RecipeContent::from_translations(&translations);
        Self::with_content(surface, translations, content)
    }

    /// Create a controller with explicit content.
    pub fn with_content(surface: S, translations: TranslationService, content: RecipeContent) -> Self {
        Self {
            surface,
            translations,
            content,
            mode: NavigationMode::Fast,
            is_favorite: false,
            registry: ActionRegistry::new(),
            initialized: false,
        }
    }

    /// Set up the card: favorite off, fast mode, relabelled click actions.
    ///
    /// Only the first call has an effect.
    pub fn initialize(&mut self) {
        if self.initialized {
            tracing::warn!("Recipe card already initialized");
            return;
        }
        self.initialized = true;

        self.surface.set_text(Element::RecipeTitle, &self.content.title);
        let description = format!(
            "{} {}",
            self.translations.translate("recipe-card"),
            self.content.title
        );
        self.surface
            .set_content_description(Element::RecipeCard, Some(description.as_str()));

        self.set_favorite(false);
        self.enter_fast_mode();
        self.replace_click_actions();
    }

    fn replace_click_actions(&mut self) {
        let add = self.translations.translate("click-add");
        self.surface
            .replace_activation_action(Element::AddToBasketButton, &add);

        let consult = self.translations.translate("click-consult-recipe");
        self.surface
            .replace_activation_action(Element::RecipeCard, &consult);
    }

    /// Switch to fast navigation: only the card is exposed, with the full
    /// custom action set.
    pub fn enter_fast_mode(&mut self) {
        self.apply_importance(NavigationMode::Fast);

        self.deregister(ActionKind::FastMode);
        for kind in NavigationMode::Fast.exposed_actions() {
            self.register(*kind);
        }

        self.settle(NavigationMode::Fast);
    }

    /// Switch to slow navigation: every element is exposed, the card keeps
    /// only the action back to fast mode.
    pub fn enter_slow_mode(&mut self) {
        self.apply_importance(NavigationMode::Slow);

        for kind in NavigationMode::Fast.exposed_actions() {
            self.deregister(*kind);
        }
        self.register(ActionKind::FastMode);

        self.settle(NavigationMode::Slow);
    }

    fn apply_importance(&mut self, mode: NavigationMode) {
        for element in CARD_ELEMENTS {
            self.surface
                .set_important_for_accessibility(element, mode.exposes(element));
        }
    }

    fn settle(&mut self, mode: NavigationMode) {
        if self.mode != mode {
            tracing::info!("Recipe card navigation: {} -> {}", self.mode, mode);
        }
        self.mode = mode;

        let message = self.translations.translate(mode.announcement_key());
        self.surface.announce(Element::RecipeCard, &message);
    }

    fn register(&mut self, kind: ActionKind) {
        let label = self.translations.translate(kind.label_key());
        self.registry
            .register(&mut self.surface, Element::RecipeCard, kind, &label);
    }

    fn deregister(&mut self, kind: ActionKind) {
        self.registry
            .deregister(&mut self.surface, Element::RecipeCard, kind);
    }

    /// Flip the favorite flag.
    pub fn toggle_favorite(&mut self) {
        self.set_favorite(!self.is_favorite);
    }

    /// Mark or unmark the recipe as favorite.
    ///
    /// Updates the icon, relabels the favorite button's click action and
    /// announces the change. Mode and registry are untouched.
    pub fn set_favorite(&mut self, value: bool) {
        self.is_favorite = value;

        let (icon, label_key, announce_key) = if value {
            (Icon::FavoriteOn, "favorite-label-on", "announce-favorite-added")
        } else {
            (Icon::FavoriteOff, "favorite-label-off", "announce-favorite-removed")
        };

        self.surface.set_icon(Element::FavoriteButton, Some(icon));
        let label = self.translations.translate(label_key);
        self.surface
            .replace_activation_action(Element::FavoriteButton, &label);
        let message = self.translations.translate(announce_key);
        self.surface.announce(Element::FavoriteButton, &message);
    }

    /// Run a custom action invoked by assistive technology.
    ///
    /// Every exposed action is handled and returns `true`. Assistive
    /// technology can only reach exposed actions, so `false` only answers a
    /// stale host call naming a kind the current mode has withdrawn.
    pub fn perform_action(&mut self, kind: ActionKind) -> bool {
        if !self.registry.contains(kind) {
            tracing::warn!("Action {} is not exposed in {} mode", kind, self.mode);
            return false;
        }

        match kind {
            ActionKind::FastMode => self.enter_fast_mode(),
            ActionKind::SlowMode => self.enter_slow_mode(),
            ActionKind::FavoriteAdd => self.set_favorite(true),
            ActionKind::FavoriteRemove => self.set_favorite(false),
            ActionKind::AddToBasket => self
                .surface
                .trigger_activation(Element::AddToBasketButton),
        }
        true
    }

    /// Handle a plain activation (click) of a card element.
    pub fn activate(&mut self, element: Element) -> bool {
        match element {
            Element::FavoriteButton => self.toggle_favorite(),
            Element::AddToBasketButton => {
                let notice = self.translations.translate("notice-added-to-basket");
                self.surface.show_notice(&notice);
            }
            Element::RecipeCard => self.surface.show_notice(&self.content.summary),
            _ => return false,
        }
        true
    }

    /// Current navigation mode.
    pub fn mode(&self) -> NavigationMode {
        self.mode
    }

    /// Whether the recipe is marked favorite.
    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    /// Live custom actions.
    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Card content.
    pub fn content(&self) -> &RecipeContent {
        &self.content
    }

    /// Get the view surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Get the view surface mutably (for draining host-side queues).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
